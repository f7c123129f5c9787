//! Arm direction angle and the tolerance band
//!
//! The angle is the direction of the shoulder→wrist vector in image space
//! (y grows downward). The elbow does not take part.

/// Normalize any angle in degrees into (-180, 180]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Direction of the shoulder→wrist vector in degrees, in (-180, 180]
///
/// Uses `atan2(wrist.y - shoulder.y, wrist.x - shoulder.x)`:
/// - 0° = wrist directly right of the shoulder in the image
/// - ±180° = wrist directly left of the shoulder
/// - 90° = wrist below the shoulder
pub fn shoulder_wrist_angle(shoulder: (f32, f32), wrist: (f32, f32)) -> f32 {
    let dx = wrist.0 - shoulder.0;
    let dy = wrist.1 - shoulder.1;
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Closed angle range mirrored into negative angles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToleranceBand {
    pub min: f32,
    pub max: f32,
}

impl ToleranceBand {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True when the angle lies in [min, max] or [-max, -min], inclusive
    pub fn contains(&self, angle: f32) -> bool {
        let angle = normalize_degrees(angle);
        let within_positive = angle >= self.min && angle <= self.max;
        let within_negative = angle >= -self.max && angle <= -self.min;
        within_positive || within_negative
    }
}
