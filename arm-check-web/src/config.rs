//! Sampler calibration values
//!
//! The defaults are the screening contract; overriding them is only meant
//! for calibration experiments.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Minimum landmark visibility for an arm to count as seen
pub const VISIBILITY_THRESHOLD: f32 = 0.4;

/// Length of one detection window in seconds
pub const DETECTION_DURATION_SECONDS: u32 = 15;

/// Tolerance band, mirrored into negative angles
pub const TOLERANCE_MIN_DEGREES: f32 = 168.0;
pub const TOLERANCE_MAX_DEGREES: f32 = 180.0;

/// Within-tolerance percentage needed to pass
pub const PASS_RATE_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplerConfig {
    pub visibility_threshold: f32,
    pub window_seconds: u32,
    pub tolerance_min_degrees: f32,
    pub tolerance_max_degrees: f32,
    pub pass_rate_percent: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: VISIBILITY_THRESHOLD,
            window_seconds: DETECTION_DURATION_SECONDS,
            tolerance_min_degrees: TOLERANCE_MIN_DEGREES,
            tolerance_max_degrees: TOLERANCE_MAX_DEGREES,
            pass_rate_percent: PASS_RATE_PERCENT,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::VisibilityThreshold(self.visibility_threshold));
        }
        if self.window_seconds == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        let (min, max) = (self.tolerance_min_degrees, self.tolerance_max_degrees);
        if !(0.0..=180.0).contains(&min) || !(0.0..=180.0).contains(&max) || min > max {
            return Err(ConfigError::ToleranceBand { min, max });
        }
        if !(0.0..=100.0).contains(&self.pass_rate_percent) {
            return Err(ConfigError::PassRate(self.pass_rate_percent));
        }
        Ok(())
    }
}
