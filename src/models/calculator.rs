use {
    crate::{
        config::constants::{defaults, risk},
        domain::{ChannelMix, Industry, InputError, TrackingSetup},
    },
    serde::{Deserialize, Serialize},
    std::fmt,
    strum_macros::{Display, EnumIter},
};

/// Everything the calculator form collects. Rebuilt on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    /// Monthly ad spend in USD.
    pub spend: f64,
    pub mix: ChannelMix,
    pub setup: TrackingSetup,
    pub industry: Industry,
    /// Average order value or LTV. `None` means unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aov: Option<f64>,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        defaults::INPUTS
    }
}

impl CalculatorInputs {
    /// Parses a JSON form post. Unknown setup or industry keys are rejected here,
    /// so the engine only ever sees closed enum values.
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(|e| InputError::Malformed(e.to_string()))
    }
}

impl fmt::Display for CalculatorInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spend={}|{}|setup={}|industry={}|aov={:?}",
            self.spend, self.mix, self.setup, self.industry, self.aov
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets an adjusted gap. Each band includes its upper bound:
    /// exactly 0.12 is Low and exactly 0.20 is Medium.
    pub fn from_adj_gap(adj_gap: f64) -> Self {
        if adj_gap <= risk::LOW_MAX {
            Self::Low
        } else if adj_gap <= risk::MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Derived numbers for one set of inputs. Never patched, always recomputed whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResults {
    #[serde(rename = "match")]
    pub match_rate: f64,
    pub base_gap: f64,
    pub adj_gap: f64,
    pub peer: f64,
    /// Signed: negative when the advertiser beats the industry benchmark.
    pub peer_delta: f64,
    pub invisible_revenue: f64,
    /// `None` when no positive AOV was given. Never coerced to zero.
    pub missed_conversions: Option<i64>,
    pub risk: RiskLevel,
    pub recoverable_low: f64,
    pub recoverable_high: f64,
}
