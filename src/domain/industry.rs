use {
    crate::{config::constants::peer, domain::InputError},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Industry {
    #[default]
    Ecommerce,
    Saas,
    Igaming,
    Agency,
    Leadgen,
    Dtc,
    Finance,
    Health,
    Education,
    Other,
}

impl Industry {
    /// Benchmark match rate for advertisers in this industry.
    pub const fn peer_average(self) -> f64 {
        match self {
            Self::Ecommerce => peer::ECOMMERCE,
            Self::Saas => peer::SAAS,
            Self::Igaming => peer::IGAMING,
            Self::Agency => peer::AGENCY,
            Self::Leadgen => peer::LEADGEN,
            Self::Dtc => peer::DTC,
            Self::Finance => peer::FINANCE,
            Self::Health => peer::HEALTH,
            Self::Education => peer::EDUCATION,
            Self::Other => peer::OTHER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ecommerce => "eCommerce",
            Self::Saas => "SaaS",
            Self::Igaming => "iGaming",
            Self::Agency => "Agencies running brands",
            Self::Leadgen => "Lead Gen",
            Self::Dtc => "DTC / Retail",
            Self::Finance => "Finance / Fintech",
            Self::Health => "Health & Wellness",
            Self::Education => "Education / EdTech",
            Self::Other => "Other",
        }
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        Self::from_str(text.trim()).map_err(|_| InputError::UnknownIndustry(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ten_industries_with_rates_in_unit_interval() {
        let all: Vec<Industry> = Industry::iter().collect();
        assert_eq!(all.len(), 10);
        for industry in all {
            let rate = industry.peer_average();
            assert!((0.0..=1.0).contains(&rate), "{industry} -> {rate}");
        }
    }

    #[test]
    fn parses_lowercase_keys_only() {
        assert_eq!(Industry::parse("igaming").unwrap(), Industry::Igaming);
        assert_eq!(Industry::parse(" dtc ").unwrap(), Industry::Dtc);
        assert!(matches!(
            Industry::parse("retail"),
            Err(InputError::UnknownIndustry(_))
        ));
    }

    #[test]
    fn saas_benchmark() {
        assert_eq!(Industry::Saas.peer_average(), 0.78);
    }
}
