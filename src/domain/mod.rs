// Domain types and value objects
mod channel_mix;
mod error;
mod industry;
mod tracking_setup;

// Re-export commonly used types to the world
pub use channel_mix::{Channel, ChannelMix, auto_balance_channel_mix, validate_channel_mix};
pub use error::InputError;
pub use industry::Industry;
pub use tracking_setup::TrackingSetup;
