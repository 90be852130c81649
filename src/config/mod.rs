//! Configuration module for the attribution calculator.

// Can all be private now because we have a public re-export.
mod debug;
mod integrations;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::MAX_GAP;
pub use debug::DF;
pub use integrations::{INTEGRATIONS, IntegrationConfig, IntegrationSettings};
pub use persistence::PERSISTENCE;
