//! Session bridge - commands, countdown ticks and display getters for JS
//!
//! The page owns the camera, the MediaPipe session and the 1s interval.
//! It forwards every pose result to `update_landmarks` and every interval
//! tick to `tick_second`, then reads state back through the getters here.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::config::SamplerConfig;
use crate::error::ConfigError;
use crate::overlay;
use crate::sampler::ArmCheckSession;
use super::landmarks::{forget_frame, latest_frame, LandmarkFrame};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<ArmCheckSession> = RefCell::new(ArmCheckSession::default());
}

/// Feed one decoded frame (or `None` for no body). Called from `update_landmarks`.
pub fn ingest_frame(frame: Option<&LandmarkFrame>) -> bool {
    SESSION.with(|session_cell| session_cell.borrow_mut().process_frame(frame))
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Begin a detection window. Ignored unless idle.
#[wasm_bindgen]
pub fn start_detection() -> bool {
    SESSION.with(|session_cell| session_cell.borrow_mut().start())
}

/// End the window early. Returns false when no run was in progress.
#[wasm_bindgen]
pub fn stop_detection() -> bool {
    SESSION.with(|session_cell| session_cell.borrow_mut().stop().is_some())
}

/// Clear result and counters, back to idle
#[wasm_bindgen]
pub fn reset_detection() {
    SESSION.with(|session_cell| session_cell.borrow_mut().reset());
}

/// Called by the page's one-second interval. Returns true when the run
/// completed on this tick (the page can stop its interval).
#[wasm_bindgen]
pub fn tick_second() -> bool {
    SESSION.with(|session_cell| session_cell.borrow_mut().tick())
}

/// Called on unmount after the camera and pose session are closed.
/// Any run in progress is dropped without a result.
#[wasm_bindgen]
pub fn teardown() {
    SESSION.with(|session_cell| session_cell.borrow_mut().teardown());
    forget_frame();
}

/// Replace calibration values (camelCase object, missing keys keep defaults)
#[wasm_bindgen]
pub fn configure(value: JsValue) -> Result<(), JsValue> {
    let config: SamplerConfig = serde_wasm_bindgen::from_value(value).map_err(ConfigError::from)?;
    SESSION.with(|session_cell| session_cell.borrow_mut().set_config(config))?;
    Ok(())
}

// ============================================================================
// GETTERS
// ============================================================================

#[wasm_bindgen]
pub fn is_detecting() -> bool {
    SESSION.with(|session_cell| session_cell.borrow().is_running())
}

#[wasm_bindgen]
pub fn time_remaining() -> u32 {
    SESSION.with(|session_cell| session_cell.borrow().time_remaining())
}

/// Frames counted so far in the current (or last) run
#[wasm_bindgen]
pub fn frames_processed() -> u32 {
    SESSION.with(|session_cell| session_cell.borrow().accumulator().total_frames())
}

/// Presence, current detection, phase and countdown as a plain object
#[wasm_bindgen]
pub fn get_live_status() -> JsValue {
    SESSION.with(|session_cell| {
        let status = session_cell.borrow().live_status();
        serde_wasm_bindgen::to_value(&status).unwrap_or(JsValue::NULL)
    })
}

/// The finished run's result, or null
#[wasm_bindgen]
pub fn get_result() -> JsValue {
    SESSION.with(|session_cell| {
        match session_cell.borrow().result() {
            Some(result) => serde_wasm_bindgen::to_value(result).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    })
}

#[wasm_bindgen]
pub fn get_config() -> JsValue {
    SESSION.with(|session_cell| {
        serde_wasm_bindgen::to_value(session_cell.borrow().config()).unwrap_or(JsValue::NULL)
    })
}

/// Arm segments of the latest frame in canvas pixels, `[x1, y1, x2, y2, ...]`
#[wasm_bindgen]
pub fn get_arm_segments(width: f32, height: f32) -> js_sys::Float32Array {
    let segments = match latest_frame() {
        Some(frame) => SESSION.with(|session_cell| {
            overlay::build_arm_segments(&frame, session_cell.borrow().evaluator(), width, height)
        }),
        None => Vec::new(),
    };
    js_sys::Float32Array::from(segments.as_slice())
}

/// Live panel text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_status_text() -> String {
    SESSION.with(|session_cell| {
        let session = session_cell.borrow();
        overlay::live_status_text(&session.live_status(), session.config())
    })
}

/// Result box text, empty before a run finishes
#[wasm_bindgen]
pub fn get_result_text() -> String {
    SESSION.with(|session_cell| {
        session_cell
            .borrow()
            .result()
            .map(overlay::result_text)
            .unwrap_or_default()
    })
}
