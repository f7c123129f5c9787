//! Overlay module - what the page draws and prints over the video
//!
//! Re-exports only. All logic in submodules.

mod segments;
mod status;

pub use segments::{build_arm_segments, SEGMENT_STRIDE};
pub use status::{format_arms_label, live_status_text, presence_text, result_text};
