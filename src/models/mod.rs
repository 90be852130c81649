mod calculator;
mod lead;
mod session;
mod snapshot;

pub use {
    calculator::{CalculatorInputs, CalculatorResults, RiskLevel},
    lead::{LeadData, LeadError, Subscriber, SubscriberFields, WebhookPayload},
    session::{CalculatorSession, mix_warning},
    snapshot::CalculatorSnapshot,
};
