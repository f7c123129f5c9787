//! Sampler module - detection window bookkeeping and scoring
//!
//! Re-exports only. All logic in submodules.

mod accumulator;
mod result;
mod session;

pub use accumulator::{DominantArm, SamplingAccumulator};
pub use result::{band_text, DetectionResult};
pub use session::{ArmCheckSession, CurrentDetection, LiveStatus, Phase, Presence};
