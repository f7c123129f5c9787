//! Arm-check session - Idle → Running → Finalized
//!
//! Fed by two event sources on the same thread: one call per pose result
//! and one call per elapsed second. Frames always refresh the live display
//! state; they only reach the accumulator while a run is in progress.

use serde::Serialize;
use crate::arm::{ActiveArm, Arm, ArmEvaluator};
use crate::bridge::LandmarkFrame;
use crate::config::SamplerConfig;
use crate::error::ConfigError;
use super::accumulator::SamplingAccumulator;
use super::result::DetectionResult;

/// Run state. Data that only exists in one phase lives in that variant.
#[derive(Clone, Debug, PartialEq)]
enum RunState {
    Idle,
    Running { remaining_secs: u32 },
    Finalized { result: DetectionResult, remaining_secs: u32 },
}

/// Phase name exposed to the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Finalized,
}

/// Which arms are visible right now
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Presence {
    pub detected: bool,
    pub arms: Vec<Arm>,
}

/// Measurement of the current frame
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDetection {
    pub detected: bool,
    pub arms: Vec<Arm>,
    pub active_arm: Option<Arm>,
    pub angle: Option<f32>,
    pub within_tolerance: bool,
}

impl CurrentDetection {
    fn from_frame(arms: Vec<Arm>, active: Option<&ActiveArm>) -> Self {
        Self {
            detected: active.is_some(),
            arms,
            active_arm: active.map(|a| a.arm),
            angle: active.map(|a| a.measurement.angle_degrees),
            within_tolerance: active.map_or(false, |a| a.measurement.within_tolerance),
        }
    }
}

/// Read-only display snapshot, refreshed on every frame and tick
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    pub phase: Phase,
    pub time_remaining: u32,
    pub presence: Presence,
    pub current: CurrentDetection,
    /// Only while running
    pub frames_processed: Option<u32>,
}

pub struct ArmCheckSession {
    config: SamplerConfig,
    evaluator: ArmEvaluator,
    state: RunState,
    accumulator: SamplingAccumulator,
    presence: Presence,
    current: CurrentDetection,
}

impl ArmCheckSession {
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            evaluator: ArmEvaluator::new(&config),
            config,
            state: RunState::Idle,
            accumulator: SamplingAccumulator::new(),
            presence: Presence::default(),
            current: CurrentDetection::default(),
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &ArmEvaluator {
        &self.evaluator
    }

    /// Swap calibration values. Only allowed while idle.
    pub fn set_config(&mut self, config: SamplerConfig) -> Result<(), ConfigError> {
        if self.phase() != Phase::Idle {
            return Err(ConfigError::NotIdle);
        }
        config.validate()?;
        self.evaluator = ArmEvaluator::new(&config);
        self.config = config;
        log::info!("arm check configuration updated: {:?}", self.config);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Idle → Running. Returns false (no-op) in any other phase.
    pub fn start(&mut self) -> bool {
        if self.state != RunState::Idle {
            log::debug!("start ignored in phase {:?}", self.phase());
            return false;
        }
        self.accumulator.reset();
        self.current = CurrentDetection::default();
        self.state = RunState::Running { remaining_secs: self.config.window_seconds };
        log::info!("arm detection started ({}s window)", self.config.window_seconds);
        true
    }

    /// Running → Finalized ahead of the countdown
    pub fn stop(&mut self) -> Option<&DetectionResult> {
        if !matches!(self.state, RunState::Running { .. }) {
            log::debug!("stop ignored in phase {:?}", self.phase());
            return None;
        }
        log::info!("arm detection stopped early");
        // The countdown display returns to the full window on an early stop
        self.finalize(self.config.window_seconds)
    }

    /// Any phase → Idle, discarding result and counters
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.accumulator.reset();
        self.current = CurrentDetection::default();
        log::info!("arm detection reset");
    }

    /// Abandon everything without finalizing (page teardown)
    pub fn teardown(&mut self) {
        if matches!(self.state, RunState::Running { .. }) {
            log::info!(
                "arm detection abandoned after {} frames",
                self.accumulator.total_frames()
            );
        }
        self.reset();
        self.presence = Presence::default();
    }

    /// One second elapsed. Returns true when this tick finished the run.
    pub fn tick(&mut self) -> bool {
        let RunState::Running { remaining_secs } = &mut self.state else {
            return false;
        };
        if *remaining_secs <= 1 {
            self.finalize(0);
            return true;
        }
        *remaining_secs -= 1;
        false
    }

    fn finalize(&mut self, remaining_secs: u32) -> Option<&DetectionResult> {
        let result = DetectionResult::from_accumulator(&self.accumulator, &self.config);
        log::info!(
            "arm detection finished: success={} within={:.1}% frames={}/{}",
            result.success,
            result.within_rate,
            result.detected_frames,
            result.total_frames
        );
        self.state = RunState::Finalized { result, remaining_secs };
        self.result()
    }

    // ------------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------------

    /// Handle one pose result, `None` meaning no body was found.
    ///
    /// Returns true when the presence (set of visible arms) changed.
    pub fn process_frame(&mut self, frame: Option<&LandmarkFrame>) -> bool {
        let (arms, active) = match frame {
            Some(frame) => {
                let measurements = self.evaluator.evaluate(frame);
                (measurements.visible_arms(), measurements.active_arm())
            }
            None => (Vec::new(), None),
        };

        let presence = Presence { detected: !arms.is_empty(), arms: arms.clone() };
        let presence_changed = presence != self.presence;
        if presence_changed {
            self.presence = presence;
        }

        self.current = CurrentDetection::from_frame(arms, active.as_ref());

        if matches!(self.state, RunState::Running { .. }) {
            self.accumulator.record(active.as_ref());
        }

        presence_changed
    }

    // ------------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        match self.state {
            RunState::Idle => Phase::Idle,
            RunState::Running { .. } => Phase::Running,
            RunState::Finalized { .. } => Phase::Finalized,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn time_remaining(&self) -> u32 {
        match self.state {
            RunState::Idle => self.config.window_seconds,
            RunState::Running { remaining_secs } => remaining_secs,
            RunState::Finalized { remaining_secs, .. } => remaining_secs,
        }
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.state {
            RunState::Finalized { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn accumulator(&self) -> &SamplingAccumulator {
        &self.accumulator
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    pub fn current(&self) -> &CurrentDetection {
        &self.current
    }

    pub fn live_status(&self) -> LiveStatus {
        LiveStatus {
            phase: self.phase(),
            time_remaining: self.time_remaining(),
            presence: self.presence.clone(),
            current: self.current.clone(),
            frames_processed: self.is_running().then(|| self.accumulator.total_frames()),
        }
    }
}

impl Default for ArmCheckSession {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}
