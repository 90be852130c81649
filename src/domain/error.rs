use thiserror::Error;

/// Rejections raised at the input boundary, before anything reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown tracking setup '{0}' (expected pixelOnly, ga4PlusPixels or serverSideDedup)")]
    UnknownSetup(String),

    #[error("unknown industry '{0}'")]
    UnknownIndustry(String),

    #[error("unknown channel '{0}' (expected meta, google or other)")]
    UnknownChannel(String),

    #[error("invalid calculator inputs: {0}")]
    Malformed(String),
}
