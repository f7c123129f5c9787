//! Error types for the JS boundary
//!
//! Nothing in the sampling core is fatal: malformed frames degrade to
//! "no body found". These errors only describe bad input handed over by
//! JavaScript.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Landmark payload that cannot be decoded into a frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("Invalid landmark data length: {len} (expected 132 or 99)")]
    InvalidLength { len: usize },
}

/// Rejected sampler configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("visibility threshold must be within [0, 1], got {0}")]
    VisibilityThreshold(f32),

    #[error("detection window must be at least one second")]
    EmptyWindow,

    #[error("tolerance band [{min}, {max}] must satisfy 0 <= min <= max <= 180")]
    ToleranceBand { min: f32, max: f32 },

    #[error("pass rate must be within [0, 100], got {0}")]
    PassRate(f64),

    #[error("configuration can only change while idle")]
    NotIdle,

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ConfigError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}
