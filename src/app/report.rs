use {
    crate::{
        data::StoredResults,
        domain::{Industry, TrackingSetup},
        models::{CalculatorInputs, CalculatorResults, mix_warning},
        utils::{format_currency, format_percentage},
    },
    strum::IntoEnumIterator,
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl MetricRow {
    fn new(metric: &'static str, value: impl Into<String>) -> Self {
        Self {
            metric,
            value: value.into(),
        }
    }
}

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Match rate")]
    rate: String,
}

/// Headline card: the numbers the results panel shows, formatted the same way.
pub fn render_results(inputs: &CalculatorInputs, results: &CalculatorResults) -> String {
    let missed = match results.missed_conversions {
        Some(n) => format!("{}/mo", n),
        None => "unknown (no AOV)".to_string(),
    };
    let delta_sign = if results.peer_delta > 0.0 { "+" } else { "" };

    let mut rows = vec![
        MetricRow::new("Monthly spend", format_currency(inputs.spend)),
        MetricRow::new(
            "Channel mix",
            format!(
                "Meta {} / Google {} / Other {}",
                inputs.mix.meta, inputs.mix.google, inputs.mix.other
            ),
        ),
        MetricRow::new("Tracking setup", inputs.setup.label()),
        MetricRow::new("Industry", inputs.industry.label()),
        MetricRow::new("Invisible revenue / month", format_currency(results.invisible_revenue)),
        MetricRow::new(
            "Recoverable",
            format!(
                "{} to {}",
                format_currency(results.recoverable_low),
                format_currency(results.recoverable_high)
            ),
        ),
        MetricRow::new("Missed conversions", missed),
        MetricRow::new("Your match rate", format!("~{}", format_percentage(results.match_rate))),
        MetricRow::new("Peer average", format_percentage(results.peer)),
        MetricRow::new(
            "Peer delta",
            format!("{}{}", delta_sign, format_percentage(results.peer_delta)),
        ),
        MetricRow::new("Adjusted gap", format_percentage(results.adj_gap)),
        MetricRow::new("Risk", results.risk.to_string()),
    ];
    if let Some(warning) = mix_warning(&inputs.mix) {
        rows.push(MetricRow::new("Warning", warning));
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_stored(stored: &StoredResults) -> String {
    let rows = vec![
        MetricRow::new("Invisible revenue / month", format_currency(stored.invisible_revenue)),
        MetricRow::new("Risk", stored.risk.to_string()),
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn render_tables() -> String {
    let setups: Vec<RateRow> = TrackingSetup::iter()
        .map(|s| RateRow {
            key: s.into(),
            label: s.label(),
            rate: format_percentage(s.match_rate()),
        })
        .collect();
    let industries: Vec<RateRow> = Industry::iter()
        .map(|i| RateRow {
            key: i.into(),
            label: i.label(),
            rate: format_percentage(i.peer_average()),
        })
        .collect();

    let setups = Table::new(setups).with(Style::rounded()).to_string();
    let industries = Table::new(industries).with(Style::rounded()).to_string();
    format!("Tracking setups\n{setups}\n\nIndustry benchmarks\n{industries}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;

    #[test]
    fn results_card_shows_formatted_headline() {
        let inputs = CalculatorInputs::default();
        let out = render_results(&inputs, &compute(&inputs));
        assert!(out.contains("$15K"));
        assert!(out.contains("124/mo"));
        assert!(out.contains("~72%"));
        assert!(out.contains("High"));
        assert!(!out.contains("Warning"));
    }

    #[test]
    fn results_card_flags_bad_mix() {
        let mut inputs = CalculatorInputs::default();
        inputs.mix.other = 0.0;
        let out = render_results(&inputs, &compute(&inputs));
        assert!(out.contains("Total: 90.0% (must equal 100%)"));
    }

    #[test]
    fn tables_list_every_key() {
        let out = render_tables();
        assert!(out.contains("serverSideDedup"));
        assert!(out.contains("86%"));
        assert!(out.contains("education"));
    }
}
