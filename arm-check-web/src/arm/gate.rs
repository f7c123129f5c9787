//! Visibility gate for a shoulder/elbow/wrist triple
//!
//! An arm passes when all three landmarks exist and each reported
//! visibility is at or above the threshold. Backends that omit visibility
//! are treated as fully confident.

use crate::bridge::Landmark;

/// Visibility used when a landmark does not report one
const DEFAULT_VISIBILITY: f32 = 1.0;

pub struct VisibilityGate {
    /// Minimum visibility to accept a landmark
    threshold: f32,
}

impl VisibilityGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    fn accepts(&self, landmark: Option<&Landmark>) -> bool {
        match landmark {
            None => false,
            Some(point) => point.visibility.map_or(true, |v| v >= self.threshold),
        }
    }

    /// Returns the three landmarks when every one of them passes the gate
    pub fn apply<'a>(
        &self,
        joints: [Option<&'a Landmark>; 3],
    ) -> Option<[&'a Landmark; 3]> {
        if !joints.iter().all(|joint| self.accepts(*joint)) {
            return None;
        }
        let [shoulder, elbow, wrist] = joints;
        Some([shoulder?, elbow?, wrist?])
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(crate::config::VISIBILITY_THRESHOLD)
    }
}

/// Unweighted mean visibility, 1.0 standing in for missing values
pub fn mean_visibility(joints: &[&Landmark]) -> f32 {
    if joints.is_empty() {
        return 0.0;
    }
    let sum: f32 = joints
        .iter()
        .map(|joint| joint.visibility.unwrap_or(DEFAULT_VISIBILITY))
        .sum();
    sum / joints.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(visibility: Option<f32>) -> Landmark {
        Landmark { visibility, ..Landmark::new(0.5, 0.5) }
    }

    #[test]
    fn test_missing_visibility_passes() {
        let gate = VisibilityGate::default();
        let p = point(None);
        assert!(gate.apply([Some(&p), Some(&p), Some(&p)]).is_some());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let gate = VisibilityGate::default();
        let at = point(Some(0.4));
        let below = point(Some(0.39));
        assert!(gate.apply([Some(&at), Some(&at), Some(&at)]).is_some());
        assert!(gate.apply([Some(&at), Some(&below), Some(&at)]).is_none());
    }

    #[test]
    fn test_missing_landmark_fails() {
        let gate = VisibilityGate::default();
        let p = point(Some(0.9));
        assert!(gate.apply([Some(&p), None, Some(&p)]).is_none());
    }

    #[test]
    fn test_mean_substitutes_default() {
        let a = point(Some(0.4));
        let b = point(None);
        let c = point(Some(0.7));
        assert!((mean_visibility(&[&a, &b, &c]) - 0.7).abs() < 1e-6);
    }
}
