//! Arm module - per-frame geometry and active-arm selection
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod gate;
mod measurement;
mod selector;

pub use angles::{normalize_degrees, shoulder_wrist_angle, ToleranceBand};
pub use gate::{mean_visibility, VisibilityGate};
pub use measurement::{Arm, ArmEvaluator, ArmMeasurement, FrameMeasurements};
pub use selector::{select_active_arm, ActiveArm};

#[cfg(test)]
pub(crate) use measurement::tests::{add_arm, arm_frame};
