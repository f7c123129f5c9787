//! Arm line segments for the canvas overlay
//!
//! Only arms that pass the visibility gate are drawn. This is the one place
//! the elbow is used.

use crate::arm::{Arm, ArmEvaluator};
use crate::bridge::LandmarkFrame;

/// Floats per segment: x1, y1, x2, y2
pub const SEGMENT_STRIDE: usize = 4;

/// Convert normalized landmark (0-1) to canvas pixels
fn to_canvas(position: (f32, f32), width: f32, height: f32) -> (f32, f32) {
    (position.0 * width, position.1 * height)
}

/// Shoulder→elbow and elbow→wrist for one arm, `None` if a joint is missing
fn arm_segments(frame: &LandmarkFrame, arm: Arm, width: f32, height: f32) -> Option<[f32; 8]> {
    let [shoulder, elbow, wrist] = arm.indices();
    let shoulder = to_canvas(frame.get(shoulder)?.position(), width, height);
    let elbow = to_canvas(frame.get(elbow)?.position(), width, height);
    let wrist = to_canvas(frame.get(wrist)?.position(), width, height);

    Some([
        shoulder.0, shoulder.1, elbow.0, elbow.1,
        elbow.0, elbow.1, wrist.0, wrist.1,
    ])
}

/// Flat `[x1, y1, x2, y2, ...]` list covering every visible arm, left first
pub fn build_arm_segments(
    frame: &LandmarkFrame,
    evaluator: &ArmEvaluator,
    width: f32,
    height: f32,
) -> Vec<f32> {
    let mut vertices = Vec::new();

    for arm in evaluator.evaluate(frame).visible_arms() {
        if let Some(segments) = arm_segments(frame, arm, width, height) {
            vertices.extend_from_slice(&segments);
        }
    }

    vertices
}
