//! Detection result - reduces a finished run's counters to a verdict

use serde::Serialize;
use crate::arm::Arm;
use crate::config::SamplerConfig;
use super::accumulator::{DominantArm, SamplingAccumulator};

/// Immutable snapshot of a completed run
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub success: bool,
    pub message: String,
    /// `"Normal"` or `"Not Normal"`
    pub status_label: String,
    /// Percent of all frames with an active arm
    pub detection_rate: f64,
    /// Percent of detected frames within tolerance
    pub within_rate: f64,
    pub total_frames: u32,
    pub detected_frames: u32,
    pub within_tolerance_frames: u32,
    pub average_angle: Option<f64>,
    pub dominant_arm: Option<DominantArm>,
    pub arms_seen: Vec<Arm>,
}

const STATUS_NORMAL: &str = "Normal";
const STATUS_NOT_NORMAL: &str = "Not Normal";

impl DetectionResult {
    /// Derive the verdict. Pure: the same counters always give the same result.
    pub fn from_accumulator(acc: &SamplingAccumulator, config: &SamplerConfig) -> Self {
        if acc.total_frames() == 0 {
            return Self::failure(
                acc,
                "No camera frames captured during the detection window.".to_string(),
            );
        }
        if acc.detected_frames() == 0 {
            return Self::failure(
                acc,
                format!(
                    "No arm was visible during the {}-second period.",
                    config.window_seconds
                ),
            );
        }

        let detected = f64::from(acc.detected_frames());
        let detection_rate = detected / f64::from(acc.total_frames()) * 100.0;
        let within_rate = if acc.within_tolerance_frames() > 0 {
            f64::from(acc.within_tolerance_frames()) / detected * 100.0
        } else {
            0.0
        };

        let success = within_rate >= config.pass_rate_percent;
        let message = if success {
            format!(
                "Arm stayed within the target range ({}) for {:.1}% of detected frames.",
                band_text(config),
                within_rate
            )
        } else {
            format!("Arm was within the target range only {:.1}% of the time.", within_rate)
        };

        Self {
            success,
            message,
            status_label: status_label(success).to_string(),
            detection_rate,
            within_rate,
            total_frames: acc.total_frames(),
            detected_frames: acc.detected_frames(),
            within_tolerance_frames: acc.within_tolerance_frames(),
            average_angle: acc.average_angle(),
            dominant_arm: acc.dominant_arm(),
            arms_seen: acc.arms_seen(),
        }
    }

    fn failure(acc: &SamplingAccumulator, message: String) -> Self {
        Self {
            success: false,
            message,
            status_label: status_label(false).to_string(),
            detection_rate: 0.0,
            within_rate: 0.0,
            total_frames: acc.total_frames(),
            detected_frames: acc.detected_frames(),
            within_tolerance_frames: acc.within_tolerance_frames(),
            average_angle: None,
            dominant_arm: None,
            arms_seen: Vec::new(),
        }
    }
}

fn status_label(success: bool) -> &'static str {
    if success {
        STATUS_NORMAL
    } else {
        STATUS_NOT_NORMAL
    }
}

/// `168°-180° or -180° to -168°`
pub fn band_text(config: &SamplerConfig) -> String {
    let (min, max) = (config.tolerance_min_degrees, config.tolerance_max_degrees);
    format!("{min}°-{max}° or -{max}° to -{min}°")
}
