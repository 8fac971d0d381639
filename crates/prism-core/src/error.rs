//! Boundary errors.
//!
//! The conversion math itself never fails; these errors only come from
//! name lookup, text parsing and configuration loading.

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("unknown RGB color space: {0}")]
    UnknownColorSpace(String),
    #[error("unknown chromatic adaptation method: {0}")]
    UnknownAdaptation(String),
    #[error("unknown illuminant: {0}")]
    UnknownIlluminant(String),
    #[error("invalid triple {0:?}: expected three comma-separated unsigned integers")]
    InvalidTriple(String),
    #[error("{channel} value {value} is out of range 0..={max}")]
    ChannelOutOfRange {
        channel: &'static str,
        value: f64,
        max: f64,
    },
    #[error("invalid profile configuration: {0}")]
    Config(#[from] serde_json::Error),
}
