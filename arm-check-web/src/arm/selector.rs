//! Active-arm selection
//!
//! At most one arm represents a frame. Tolerance outranks visibility;
//! equal visibility goes to the left arm.

use super::measurement::{Arm, ArmMeasurement, FrameMeasurements};

/// The arm chosen to represent a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveArm {
    pub arm: Arm,
    pub measurement: ArmMeasurement,
}

/// Pick the active arm from the two (possibly absent) measurements
pub fn select_active_arm(
    left: Option<ArmMeasurement>,
    right: Option<ArmMeasurement>,
) -> Option<ActiveArm> {
    let active = |arm, measurement| Some(ActiveArm { arm, measurement });

    match (left, right) {
        (None, None) => None,
        (Some(l), None) => active(Arm::Left, l),
        (None, Some(r)) => active(Arm::Right, r),
        (Some(l), Some(r)) => {
            if l.within_tolerance != r.within_tolerance {
                if l.within_tolerance {
                    active(Arm::Left, l)
                } else {
                    active(Arm::Right, r)
                }
            } else if l.average_visibility >= r.average_visibility {
                active(Arm::Left, l)
            } else {
                active(Arm::Right, r)
            }
        }
    }
}

impl FrameMeasurements {
    pub fn active_arm(&self) -> Option<ActiveArm> {
        select_active_arm(self.left, self.right)
    }
}
