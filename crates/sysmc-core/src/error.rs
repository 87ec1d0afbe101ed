//! Error types for sysmc

use thiserror::Error;

/// sysmc error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported literal for a sign-combination selector
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// Dataset/component input missing required fields
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Zero toys requested or zero components in a dataset
    #[error("empty sample: {0}")]
    EmptySample(String),

    /// Computation error
    #[error("computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
