//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    // Frame types
    Landmark,
    LandmarkFrame,
    // Constants
    LANDMARK_COUNT,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_ARM, RIGHT_ARM,
};

pub use session::{
    start_detection,
    stop_detection,
    reset_detection,
    tick_second,
    teardown,
    configure,
    is_detecting,
    time_remaining,
    frames_processed,
    get_live_status,
    get_result,
    get_config,
    get_arm_segments,
    get_status_text,
    get_result_text,
};
