//! Benchmark tables and calculator policy constants.
//!
//! These values are the entire knowledge base of the calculator. Changing one here
//! changes every estimate the engine produces.

/// Hard ceiling on the adjusted gap. Business policy, not a mathematical bound.
pub const MAX_GAP: f64 = 0.6;

/// Share of tracked conversions each tracking setup attributes.
pub mod match_rate {
    pub const PIXEL_ONLY: f64 = 0.62;
    pub const GA4_PLUS_PIXELS: f64 = 0.72;
    pub const SERVER_SIDE_DEDUP: f64 = 0.86;
}

/// Industry benchmark match rates.
pub mod peer {
    pub const ECOMMERCE: f64 = 0.72;
    pub const SAAS: f64 = 0.78;
    pub const IGAMING: f64 = 0.65;
    pub const AGENCY: f64 = 0.70;
    pub const LEADGEN: f64 = 0.69;
    pub const DTC: f64 = 0.74;
    pub const FINANCE: f64 = 0.76;
    pub const HEALTH: f64 = 0.73;
    pub const EDUCATION: f64 = 0.75;
    pub const OTHER: f64 = 0.71;
}

/// Channel gap multipliers. Meta under-attributes more, Google a bit less.
pub mod gap_multiplier {
    pub const META: f64 = 1.15;
    pub const GOOGLE: f64 = 0.90;
    pub const OTHER: f64 = 1.00;
}

/// Upper bounds (inclusive) of the risk bands, applied to the adjusted gap.
pub mod risk {
    pub const LOW_MAX: f64 = 0.12;
    pub const MEDIUM_MAX: f64 = 0.20;
}

/// Credibility band shown next to the headline number.
pub mod recovery {
    pub const LOW_FACTOR: f64 = 0.6;
    pub const HIGH_FACTOR: f64 = 0.9;
}

pub mod mix {
    /// Mix fields are percentages, not fractions.
    pub const TARGET_TOTAL: f64 = 100.0;
    pub const TOLERANCE: f64 = 0.1;

    // Fallback split when the untouched channels are both zero.
    pub const FALLBACK_PINNED: f64 = 90.0;
    pub const FALLBACK_REST: f64 = 5.0;
}

/// Spend slider bounds used by the form layer. The engine accepts any value.
pub mod spend {
    pub const MIN: f64 = 10_000.0;
    pub const MAX: f64 = 500_000.0;
    pub const STEP: f64 = 1_000.0;
}

pub mod defaults {
    use crate::domain::{ChannelMix, Industry, TrackingSetup};
    use crate::models::CalculatorInputs;

    pub const SPEND: f64 = 50_000.0;
    pub const MIX: ChannelMix = ChannelMix {
        meta: 60.0,
        google: 30.0,
        other: 10.0,
    };
    pub const AOV: f64 = 120.0;

    pub const INPUTS: CalculatorInputs = CalculatorInputs {
        spend: SPEND,
        mix: MIX,
        setup: TrackingSetup::Ga4PlusPixels,
        industry: Industry::Ecommerce,
        aov: Some(AOV),
    };
}
