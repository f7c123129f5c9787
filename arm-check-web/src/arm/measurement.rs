//! Per-frame arm measurement - one per arm per frame, never stored

use serde::{Deserialize, Serialize};
use crate::bridge::{LandmarkFrame, LEFT_ARM, RIGHT_ARM};
use crate::config::SamplerConfig;
use super::angles::{shoulder_wrist_angle, ToleranceBand};
use super::gate::{mean_visibility, VisibilityGate};

/// Which arm a measurement belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Left,
    Right,
}

impl Arm {
    /// Evaluation order; the left arm wins exact ties
    pub const ALL: [Arm; 2] = [Arm::Left, Arm::Right];

    /// Shoulder, elbow, wrist landmark indices
    pub fn indices(&self) -> [usize; 3] {
        match self {
            Arm::Left => LEFT_ARM,
            Arm::Right => RIGHT_ARM,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arm::Left => "left",
            Arm::Right => "right",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Arm::Left => "Left arm",
            Arm::Right => "Right arm",
        }
    }
}

/// Angle, tolerance flag and confidence of one visible arm
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmMeasurement {
    /// Shoulder→wrist direction in (-180, 180]
    pub angle_degrees: f32,
    pub within_tolerance: bool,
    /// Mean of shoulder/elbow/wrist visibility
    pub average_visibility: f32,
}

/// Evaluates frames against one configuration
pub struct ArmEvaluator {
    gate: VisibilityGate,
    band: ToleranceBand,
}

impl ArmEvaluator {
    pub fn new(config: &SamplerConfig) -> Self {
        Self {
            gate: VisibilityGate::new(config.visibility_threshold),
            band: ToleranceBand::new(config.tolerance_min_degrees, config.tolerance_max_degrees),
        }
    }

    /// Measure one arm, `None` when it fails the visibility gate
    pub fn measure(&self, frame: &LandmarkFrame, arm: Arm) -> Option<ArmMeasurement> {
        let [shoulder_idx, elbow_idx, wrist_idx] = arm.indices();
        let joints = self.gate.apply([
            frame.get(shoulder_idx),
            frame.get(elbow_idx),
            frame.get(wrist_idx),
        ])?;
        let [shoulder, _elbow, wrist] = joints;

        let angle_degrees = shoulder_wrist_angle(shoulder.position(), wrist.position());

        Some(ArmMeasurement {
            angle_degrees,
            within_tolerance: self.band.contains(angle_degrees),
            average_visibility: mean_visibility(&joints),
        })
    }

    /// Measure both arms independently
    pub fn evaluate(&self, frame: &LandmarkFrame) -> FrameMeasurements {
        FrameMeasurements {
            left: self.measure(frame, Arm::Left),
            right: self.measure(frame, Arm::Right),
        }
    }
}

impl Default for ArmEvaluator {
    fn default() -> Self {
        Self::new(&SamplerConfig::default())
    }
}

/// Both arms of a single frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameMeasurements {
    pub left: Option<ArmMeasurement>,
    pub right: Option<ArmMeasurement>,
}

impl FrameMeasurements {
    pub fn get(&self, arm: Arm) -> Option<&ArmMeasurement> {
        match arm {
            Arm::Left => self.left.as_ref(),
            Arm::Right => self.right.as_ref(),
        }
    }

    /// Visible arms, left first
    pub fn visible_arms(&self) -> Vec<Arm> {
        Arm::ALL
            .into_iter()
            .filter(|arm| self.get(*arm).is_some())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::bridge::Landmark;

    /// Frame with one arm pointing at `angle` degrees from its shoulder
    pub(crate) fn arm_frame(arm: Arm, angle: f32, visibility: Option<f32>) -> LandmarkFrame {
        add_arm(LandmarkFrame::empty(), arm, angle, visibility)
    }

    pub(crate) fn add_arm(
        frame: LandmarkFrame,
        arm: Arm,
        angle: f32,
        visibility: Option<f32>,
    ) -> LandmarkFrame {
        let [shoulder, elbow, wrist] = arm.indices();
        let (sx, sy) = match arm {
            Arm::Left => (0.6, 0.4),
            Arm::Right => (0.4, 0.4),
        };
        let rad = angle.to_radians();
        let point = |len: f32| Landmark {
            visibility,
            ..Landmark::new(sx + len * rad.cos(), sy + len * rad.sin())
        };
        frame
            .with(shoulder, Landmark { visibility, ..Landmark::new(sx, sy) })
            .with(elbow, point(0.1))
            .with(wrist, point(0.2))
    }

    #[test]
    fn test_measures_visible_arm() {
        let frame = arm_frame(Arm::Left, 170.0, Some(0.9));
        let m = ArmEvaluator::default().measure(&frame, Arm::Left).unwrap();
        assert!((m.angle_degrees - 170.0).abs() < 0.01);
        assert!(m.within_tolerance);
        assert!((m.average_visibility - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_other_arm_not_visible() {
        let frame = arm_frame(Arm::Left, 170.0, None);
        let measurements = ArmEvaluator::default().evaluate(&frame);
        assert!(measurements.left.is_some());
        assert!(measurements.right.is_none());
        assert_eq!(measurements.visible_arms(), vec![Arm::Left]);
    }

    #[test]
    fn test_low_visibility_hides_arm() {
        let frame = arm_frame(Arm::Right, 175.0, Some(0.3));
        assert!(ArmEvaluator::default().measure(&frame, Arm::Right).is_none());
    }

    #[test]
    fn test_bent_elbow_still_scores() {
        // Shoulder and wrist aligned, elbow dropped well below the line
        let frame = arm_frame(Arm::Left, 175.0, None)
            .with(LEFT_ARM[1], Landmark::new(0.5, 0.7));
        let m = ArmEvaluator::default().measure(&frame, Arm::Left).unwrap();
        assert!(m.within_tolerance);
    }

    #[test]
    fn test_out_of_tolerance_angle() {
        let frame = arm_frame(Arm::Right, 120.0, None);
        let m = ArmEvaluator::default().measure(&frame, Arm::Right).unwrap();
        assert!(!m.within_tolerance);
    }
}
