//! Frame counters for one detection run
//!
//! Owned by the session; reset at every start, read once when the run ends.

use serde::Serialize;
use crate::arm::{ActiveArm, Arm};

/// Which arm carried most of the run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantArm {
    Left,
    Right,
    Both,
}

impl DominantArm {
    pub fn label(&self) -> &'static str {
        match self {
            DominantArm::Left => "Left arm",
            DominantArm::Right => "Right arm",
            DominantArm::Both => "Both arms",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingAccumulator {
    total_frames: u32,
    detected_frames: u32,
    within_tolerance_frames: u32,
    left_frames: u32,
    right_frames: u32,
    angle_sum: f64,
    angle_count: u32,
}

impl SamplingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame into the counters. `None` covers both "no body" and
    /// "body but no visible arm".
    pub fn record(&mut self, active: Option<&ActiveArm>) {
        self.total_frames += 1;

        let Some(active) = active else {
            return;
        };

        self.detected_frames += 1;
        match active.arm {
            Arm::Left => self.left_frames += 1,
            Arm::Right => self.right_frames += 1,
        }
        if active.measurement.within_tolerance {
            self.within_tolerance_frames += 1;
        }
        self.angle_sum += f64::from(active.measurement.angle_degrees);
        self.angle_count += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn detected_frames(&self) -> u32 {
        self.detected_frames
    }

    pub fn within_tolerance_frames(&self) -> u32 {
        self.within_tolerance_frames
    }

    pub fn arm_frames(&self, arm: Arm) -> u32 {
        match arm {
            Arm::Left => self.left_frames,
            Arm::Right => self.right_frames,
        }
    }

    pub fn average_angle(&self) -> Option<f64> {
        if self.angle_count > 0 {
            Some(self.angle_sum / f64::from(self.angle_count))
        } else {
            None
        }
    }

    pub fn dominant_arm(&self) -> Option<DominantArm> {
        let (left, right) = (self.left_frames, self.right_frames);
        if left == right {
            (left > 0).then_some(DominantArm::Both)
        } else if left > right {
            Some(DominantArm::Left)
        } else {
            Some(DominantArm::Right)
        }
    }

    /// Arms selected at least once, left first
    pub fn arms_seen(&self) -> Vec<Arm> {
        Arm::ALL
            .into_iter()
            .filter(|arm| self.arm_frames(*arm) > 0)
            .collect()
    }
}
