use {
    crate::models::{CalculatorInputs, CalculatorResults},
    serde::{Deserialize, Serialize},
};

/// Inputs and results flattened into the column layout the CRM expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub industry: String,
    pub tracking_setup: String,
    pub monthly_spend: f64,
    pub mix_meta: f64,
    pub mix_google: f64,
    pub mix_other: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aov_or_ltv: Option<f64>,
    pub est_invisible_rev_month: f64,
    /// Omitted when unknown and also when it rounds to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub est_missed_conversions: Option<i64>,
    pub peer_avg_match: f64,
    pub your_match: f64,
    pub base_gap: f64,
    pub adj_gap: f64,
    pub peer_delta: f64,
    pub recoverable_low: f64,
    pub recoverable_high: f64,
    pub risk_level: String,
}

impl CalculatorSnapshot {
    pub fn new(inputs: &CalculatorInputs, results: &CalculatorResults) -> Self {
        Self {
            industry: inputs.industry.to_string(),
            tracking_setup: inputs.setup.to_string(),
            monthly_spend: inputs.spend,
            mix_meta: inputs.mix.meta,
            mix_google: inputs.mix.google,
            mix_other: inputs.mix.other,
            aov_or_ltv: inputs.aov,
            est_invisible_rev_month: results.invisible_revenue,
            est_missed_conversions: results.missed_conversions.filter(|&n| n != 0),
            peer_avg_match: results.peer,
            your_match: results.match_rate,
            base_gap: results.base_gap,
            adj_gap: results.adj_gap,
            peer_delta: results.peer_delta,
            recoverable_low: results.recoverable_low,
            recoverable_high: results.recoverable_high,
            risk_level: results.risk.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;

    #[test]
    fn flattens_default_scenario() {
        let inputs = CalculatorInputs::default();
        let snap = CalculatorSnapshot::new(&inputs, &compute(&inputs));
        assert_eq!(snap.industry, "ecommerce");
        assert_eq!(snap.tracking_setup, "ga4PlusPixels");
        assert_eq!(snap.mix_meta, 60.0);
        assert_eq!(snap.est_missed_conversions, Some(124));
        assert_eq!(snap.your_match, 0.72);
        assert!((snap.adj_gap - 0.2968).abs() < 1e-9);
        assert!((snap.recoverable_high - 13_356.0).abs() < 1e-6);
        assert_eq!(snap.risk_level, "High");
    }

    #[test]
    fn zero_missed_conversions_are_dropped() {
        let mut inputs = CalculatorInputs::default();
        inputs.spend = 100.0;
        let results = compute(&inputs);
        // 100 * 0.2968 / 120 rounds to 0
        assert_eq!(results.missed_conversions, Some(0));

        let snap = CalculatorSnapshot::new(&inputs, &results);
        assert_eq!(snap.est_missed_conversions, None);
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json.get("est_missed_conversions").is_none());
    }

    #[test]
    fn unknown_aov_is_omitted_from_json() {
        let mut inputs = CalculatorInputs::default();
        inputs.aov = None;
        let json = serde_json::to_value(CalculatorSnapshot::new(&inputs, &compute(&inputs))).unwrap();
        assert!(json.get("aov_or_ltv").is_none());
        assert!(json.get("est_missed_conversions").is_none());
    }
}
