use {
    crate::{config::constants::match_rate, domain::InputError},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// How the advertiser currently tracks conversions.
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TrackingSetup {
    PixelOnly,
    #[default]
    Ga4PlusPixels,
    ServerSideDedup,
}

impl TrackingSetup {
    /// Share of true conversions this setup attributes.
    pub const fn match_rate(self) -> f64 {
        match self {
            Self::PixelOnly => match_rate::PIXEL_ONLY,
            Self::Ga4PlusPixels => match_rate::GA4_PLUS_PIXELS,
            Self::ServerSideDedup => match_rate::SERVER_SIDE_DEDUP,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PixelOnly => "Pixel only",
            Self::Ga4PlusPixels => "GA4 + platform pixels",
            Self::ServerSideDedup => "Server-side + deduplication (CAPI/gtm-ss)",
        }
    }

    /// Boundary parser for loosely typed callers (CLI flags, form posts).
    pub fn parse(text: &str) -> Result<Self, InputError> {
        Self::from_str(text.trim()).map_err(|_| InputError::UnknownSetup(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_round_trip_through_display() {
        for setup in TrackingSetup::iter() {
            assert_eq!(TrackingSetup::parse(&setup.to_string()).unwrap(), setup);
        }
        assert_eq!(TrackingSetup::Ga4PlusPixels.to_string(), "ga4PlusPixels");
    }

    #[test]
    fn rejects_unknown_setup() {
        let err = TrackingSetup::parse("pixelsOnly").unwrap_err();
        assert_eq!(err, InputError::UnknownSetup("pixelsOnly".into()));
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&TrackingSetup::ServerSideDedup).unwrap();
        assert_eq!(json, "\"serverSideDedup\"");
        assert!(serde_json::from_str::<TrackingSetup>("\"capi\"").is_err());
    }
}
