//! Error types for orbit configuration and loading

use thiserror::Error;

/// Result type for simulation setup
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while building or loading a run configuration
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid parameter `{name}` = {value}: must be {requirement}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("Degenerate orbit: angular step per frame is {0}")]
    DegenerateOrbit(f64),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject zero, negative, NaN and infinite values
pub(crate) fn require_positive(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value, requirement: "finite and > 0" })
    }
}

/// Reject negative, NaN and infinite values
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value, requirement: "finite and >= 0" })
    }
}
