//! Landmark storage and JS bridge
//!
//! Receives MediaPipe Pose landmarks from JavaScript, decodes them into a
//! `LandmarkFrame`, feeds the frame to the arm-check session and keeps the
//! latest frame around for the overlay.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::error::FrameError;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

/// Shoulder, elbow, wrist
pub const LEFT_ARM: [usize; 3] = [LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST];
pub const RIGHT_ARM: [usize; 3] = [RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST];

/// Values per landmark with and without a visibility channel
const STRIDE_WITH_VISIBILITY: usize = 4;
const STRIDE_WITHOUT_VISIBILITY: usize = 3;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single pose landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
    /// Detector confidence, `None` when the backend does not report one
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One pose estimate. Missing or undecodable points are `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    landmarks: [Option<Landmark>; LANDMARK_COUNT],
}

impl Default for LandmarkFrame {
    fn default() -> Self {
        Self::empty()
    }
}

impl LandmarkFrame {
    /// Frame with no landmarks at all
    pub fn empty() -> Self {
        Self { landmarks: [None; LANDMARK_COUNT] }
    }

    /// Builder used by callers that assemble frames point by point
    pub fn with(mut self, index: usize, landmark: Landmark) -> Self {
        self.set(index, landmark);
        self
    }

    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = Some(landmark);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index).and_then(|slot| slot.as_ref())
    }

    /// Decode the flat Float32Array sent by JavaScript.
    ///
    /// Accepts 33 × 4 values (`x, y, z, visibility`) or 33 × 3 values
    /// (`x, y, z`). An empty array is the "no body found" signal and
    /// decodes to `Ok(None)`. A `NaN` visibility means the backend did not
    /// supply one; a non-finite coordinate marks the landmark as missing.
    pub fn from_flat(data: &[f32]) -> Result<Option<Self>, FrameError> {
        let stride = match data.len() {
            0 => return Ok(None),
            n if n == LANDMARK_COUNT * STRIDE_WITH_VISIBILITY => STRIDE_WITH_VISIBILITY,
            n if n == LANDMARK_COUNT * STRIDE_WITHOUT_VISIBILITY => STRIDE_WITHOUT_VISIBILITY,
            len => return Err(FrameError::InvalidLength { len }),
        };

        let mut frame = Self::empty();
        for (i, chunk) in data.chunks_exact(stride).enumerate() {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let visibility = chunk
                .get(3)
                .copied()
                .filter(|v| !v.is_nan());
            frame.landmarks[i] = Some(Landmark { x, y, z, visibility });
        }

        Ok(Some(frame))
    }
}

/// Internal storage for the most recent frame
#[derive(Default)]
struct LandmarkStore {
    frame: Option<LandmarkFrame>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per pose result with a flat Float32Array
/// (33 landmarks × `x, y, z, visibility`).
///
/// Returns `true` when the set of visible arms changed with this frame.
/// Malformed input is logged and treated as "no body found".
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> bool {
    let frame = match LandmarkFrame::from_flat(data) {
        Ok(frame) => frame,
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            None
        }
    };

    let changed = super::session::ingest_frame(frame.as_ref());

    LANDMARKS.with(|store_cell| {
        store_cell.borrow_mut().frame = frame;
    });

    changed
}

/// Called from JavaScript when the pose estimator found no body
#[wasm_bindgen]
pub fn clear_landmarks() -> bool {
    update_landmarks(&[])
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Latest decoded frame (for the overlay)
pub fn latest_frame() -> Option<LandmarkFrame> {
    LANDMARKS.with(|store_cell| store_cell.borrow().frame.clone())
}

/// Forget the stored frame (component teardown)
pub fn forget_frame() {
    LANDMARKS.with(|store_cell| {
        store_cell.borrow_mut().frame = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_with_visibility(visibility: f32) -> Vec<f32> {
        let mut data = Vec::with_capacity(LANDMARK_COUNT * 4);
        for i in 0..LANDMARK_COUNT {
            data.extend_from_slice(&[i as f32 / 100.0, 0.5, 0.0, visibility]);
        }
        data
    }

    #[test]
    fn test_empty_array_is_no_body() {
        assert_eq!(LandmarkFrame::from_flat(&[]).unwrap(), None);
    }

    #[test]
    fn test_decodes_visibility_channel() {
        let frame = LandmarkFrame::from_flat(&flat_with_visibility(0.8)).unwrap().unwrap();
        let shoulder = frame.get(LEFT_SHOULDER).unwrap();
        assert!((shoulder.x - 0.11).abs() < 1e-6);
        assert_eq!(shoulder.visibility, Some(0.8));
    }

    #[test]
    fn test_nan_visibility_means_not_supplied() {
        let frame = LandmarkFrame::from_flat(&flat_with_visibility(f32::NAN)).unwrap().unwrap();
        assert_eq!(frame.get(RIGHT_WRIST).unwrap().visibility, None);
    }

    #[test]
    fn test_three_channel_layout() {
        let data = vec![0.5; LANDMARK_COUNT * 3];
        let frame = LandmarkFrame::from_flat(&data).unwrap().unwrap();
        assert_eq!(frame.get(LEFT_ELBOW), Some(&Landmark::new(0.5, 0.5).with_z(0.5)));
    }

    #[test]
    fn test_non_finite_coordinate_is_missing() {
        let mut data = flat_with_visibility(0.9);
        data[LEFT_WRIST * 4] = f32::NAN;
        let frame = LandmarkFrame::from_flat(&data).unwrap().unwrap();
        assert!(frame.get(LEFT_WRIST).is_none());
        assert!(frame.get(RIGHT_WRIST).is_some());
    }

    #[test]
    fn test_bad_length_rejected() {
        let err = LandmarkFrame::from_flat(&[0.0; 10]).unwrap_err();
        assert_eq!(err, FrameError::InvalidLength { len: 10 });
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let frame = LandmarkFrame::empty().with(99, Landmark::new(0.1, 0.1));
        assert_eq!(frame, LandmarkFrame::empty());
    }

    impl Landmark {
        fn with_z(mut self, z: f32) -> Self {
            self.z = z;
            self
        }
    }
}
