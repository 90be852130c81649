#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::compute;
pub use domain::{
    Channel, ChannelMix, Industry, InputError, TrackingSetup, auto_balance_channel_mix,
    validate_channel_mix,
};
pub use models::{CalculatorInputs, CalculatorResults, CalculatorSession, RiskLevel};
pub use utils::{format_currency, format_percentage};

// CLI argument parsing
use {
    clap::{Args, Parser, Subcommand},
    config::constants::{defaults, spend},
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Estimate invisible revenue for one set of inputs
    Compute {
        #[command(flatten)]
        calc: CalculatorArgs,

        /// Print inputs and results as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Capture UTM parameters from a landing URL and persist them
    Utm { url: String },
    /// Compute, then submit the lead to the configured integrations
    Lead {
        #[command(flatten)]
        calc: CalculatorArgs,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Agree to receive the report and follow-up emails
        #[arg(long, default_value_t = false)]
        consent: bool,

        /// Page the form was submitted from
        #[arg(long, default_value = "")]
        page_url: String,
    },
    /// Show the results stored by the last successful lead submission
    Last,
    /// List tracking setups and industry benchmarks
    Tables,
}

/// Calculator form fields. Mix edits are applied in the order meta, google, other,
/// each one going through the auto-balance policy like a form edit would.
#[derive(Args, Debug, Clone)]
pub struct CalculatorArgs {
    /// Monthly ad spend in USD
    #[arg(long, value_parser = parse_spend, default_value_t = defaults::SPEND)]
    pub spend: f64,

    /// Meta share of spend, in percent
    #[arg(long)]
    pub meta: Option<f64>,

    /// Google share of spend, in percent
    #[arg(long)]
    pub google: Option<f64>,

    /// Share of spend on other channels, in percent
    #[arg(long)]
    pub other: Option<f64>,

    #[arg(long, value_parser = TrackingSetup::parse, default_value = "ga4PlusPixels")]
    pub setup: TrackingSetup,

    #[arg(long, value_parser = Industry::parse, default_value = "ecommerce")]
    pub industry: Industry,

    /// Average order value or LTV (defaults to the form default)
    #[arg(long, conflicts_with = "no_aov")]
    pub aov: Option<f64>,

    /// Treat AOV as unknown
    #[arg(long, default_value_t = false)]
    pub no_aov: bool,

    /// Keep mix edits exactly as typed, even when they exceed 100%
    #[arg(long, default_value_t = false)]
    pub no_auto_balance: bool,
}

/// The form slider only offers `spend::MIN..=spend::MAX`; the engine itself takes any
/// non-negative amount.
fn parse_spend(raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::Malformed(format!("spend '{}'", raw)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(InputError::Malformed(format!("spend '{}' must be >= 0", raw)));
    }
    if !(spend::MIN..=spend::MAX).contains(&value) {
        log::info!(
            "Spend {} is outside the form range {}..={} (step {})",
            value,
            spend::MIN,
            spend::MAX,
            spend::STEP
        );
    }
    Ok(value)
}
