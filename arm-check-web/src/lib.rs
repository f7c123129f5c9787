//! Arm Check Web - webcam arm-alignment screening
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page runs the camera and MediaPipe Pose, forwards each result to
//! `update_landmarks` and each elapsed second to `tick_second`, and reads
//! the live status and final result back through the bridge getters.

mod bridge;
pub mod arm;
pub mod config;
pub mod error;
pub mod overlay;
pub mod sampler;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions and frame types for JS / Rust callers
pub use bridge::*;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install the console logger. Level: "trace", "debug", "info", "warn", "error".
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("✅ Arm check initialized (log level: {})", level);
}

/// Crate version, shown in the page footer
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
