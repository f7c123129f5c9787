//! Status text for the live panel and the result box

use crate::arm::Arm;
use crate::sampler::{band_text, DetectionResult, LiveStatus, Phase, Presence};
use crate::config::SamplerConfig;

/// `Left arm + Right arm`, or `None` when empty
pub fn format_arms_label(arms: &[Arm]) -> String {
    if arms.is_empty() {
        return "None".to_string();
    }
    arms.iter().map(Arm::label).collect::<Vec<_>>().join(" + ")
}

pub fn presence_text(presence: &Presence) -> String {
    if presence.detected {
        format!("Detected ({})", format_arms_label(&presence.arms))
    } else {
        "No arm detected".to_string()
    }
}

/// Multi-line live panel text
pub fn live_status_text(status: &LiveStatus, config: &SamplerConfig) -> String {
    let current = &status.current;
    let mut lines = vec![
        format!("Arm Detection: {}", presence_text(&status.presence)),
        format!(
            "Active Arm: {}",
            current
                .active_arm
                .map_or_else(|| "None".to_string(), |arm| arm.as_str().to_uppercase())
        ),
        format!(
            "Current Angle: {}",
            current
                .angle
                .map_or_else(|| "N/A".to_string(), |angle| format!("{angle:.2}°"))
        ),
        format!(
            "Within target range ({}): {}",
            band_text(config),
            if current.within_tolerance { "Yes" } else { "No" }
        ),
        format!("Arms visible now: {}", format_arms_label(&current.arms)),
    ];

    if status.phase == Phase::Running {
        lines.push(format!("Time Remaining: {}s", status.time_remaining));
    }
    if let Some(frames) = status.frames_processed {
        lines.push(format!("Frames processed: {frames}"));
    }

    lines.join("\n")
}

/// Multi-line result box text
pub fn result_text(result: &DetectionResult) -> String {
    let mut lines = vec![
        result.status_label.clone(),
        result.message.clone(),
        format!("Total frames: {}", result.total_frames),
        format!("Frames with arm visible: {}", result.detected_frames),
        format!(
            "Within target range: {} frames ({:.1}%)",
            result.within_tolerance_frames, result.within_rate
        ),
        format!("Arm visibility: {:.1}% of all frames", result.detection_rate),
    ];

    if let Some(angle) = result.average_angle {
        lines.push(format!("Average angle: {angle:.2}°"));
    }
    if let Some(dominant) = result.dominant_arm {
        lines.push(format!("Dominant arm: {}", dominant.label()));
    }
    if !result.arms_seen.is_empty() {
        let seen: Vec<_> = result.arms_seen.iter().map(Arm::label).collect();
        lines.push(format!("Arms seen: {}", seen.join(", ")));
    }

    lines.join("\n")
}
