//! Web tests for the arm-check bridge
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use arm_check_web::*;

const VALUES_PER_LANDMARK: usize = 4;

/// Flat 33 × (x, y, z, visibility) array with the left arm held at `angle`
fn left_arm_payload(angle: f32) -> Vec<f32> {
    let mut data = vec![0.0; LANDMARK_COUNT * VALUES_PER_LANDMARK];
    for i in 0..LANDMARK_COUNT {
        data[i * VALUES_PER_LANDMARK + 3] = 0.1;
    }
    let rad = angle.to_radians();
    let (sx, sy) = (0.6, 0.4);
    let joints = [
        (LEFT_SHOULDER, sx, sy),
        (LEFT_ELBOW, sx + 0.1 * rad.cos(), sy + 0.1 * rad.sin()),
        (LEFT_WRIST, sx + 0.2 * rad.cos(), sy + 0.2 * rad.sin()),
    ];
    for (index, x, y) in joints {
        let base = index * VALUES_PER_LANDMARK;
        data[base] = x;
        data[base + 1] = y;
        data[base + 3] = 0.95;
    }
    data
}

fn fresh() {
    teardown();
    reset_detection();
}

// ============================================================================
// Frame handling
// ============================================================================

#[wasm_bindgen_test]
fn test_presence_reported_on_change() {
    fresh();
    let payload = left_arm_payload(172.0);
    assert!(update_landmarks(&payload));
    assert!(!update_landmarks(&payload));
    assert!(clear_landmarks());
}

#[wasm_bindgen_test]
fn test_malformed_frame_counts_as_empty() {
    fresh();
    assert!(start_detection());
    update_landmarks(&[0.5; 7]);
    assert_eq!(frames_processed(), 1);
    assert!(stop_detection());
    let text = get_result_text();
    assert!(text.contains("No arm was visible"));
}

// ============================================================================
// Full run
// ============================================================================

#[wasm_bindgen_test]
fn test_full_window_passes() {
    fresh();
    assert!(start_detection());
    assert!(is_detecting());
    let payload = left_arm_payload(170.0);
    for _ in 0..10 {
        update_landmarks(&payload);
    }

    let mut finished = false;
    for _ in 0..15 {
        finished = tick_second();
    }
    assert!(finished);
    assert!(!is_detecting());
    assert_eq!(time_remaining(), 0);

    let result = get_result();
    assert!(!result.is_null());
    let success = js_sys::Reflect::get(&result, &JsValue::from_str("success")).unwrap();
    assert_eq!(success.as_bool(), Some(true));
    let dominant = js_sys::Reflect::get(&result, &JsValue::from_str("dominantArm")).unwrap();
    assert_eq!(dominant.as_string().as_deref(), Some("left"));
}

#[wasm_bindgen_test]
fn test_reset_clears_result() {
    fresh();
    start_detection();
    stop_detection();
    assert!(!get_result().is_null());
    reset_detection();
    assert!(get_result().is_null());
    assert_eq!(get_result_text(), "");
    assert_eq!(time_remaining(), 15);
}

// ============================================================================
// Overlay and config
// ============================================================================

#[wasm_bindgen_test]
fn test_segments_for_visible_arm() {
    fresh();
    update_landmarks(&left_arm_payload(175.0));
    assert_eq!(get_arm_segments(640.0, 480.0).length(), 8);
    clear_landmarks();
    assert_eq!(get_arm_segments(640.0, 480.0).length(), 0);
}

#[wasm_bindgen_test]
fn test_configure_rejected_while_running() {
    fresh();
    let config = serde_wasm_bindgen::to_value(&arm_check_web::config::SamplerConfig::default()).unwrap();
    assert!(configure(config.clone()).is_ok());
    start_detection();
    assert!(configure(config).is_err());
    reset_detection();
}
