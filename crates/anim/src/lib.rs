//! Flight-progress animation as a plain value: a bounded fraction in [0, 1]
//! advanced by cooperative ticks.
//!
//! The caller owns the loop. Each frame it reports wall-clock elapsed time
//! via [`Animator::tick`]; the animator scales it, advances progress while
//! playing, clamps at 1.0, and pauses itself on completion. There are no
//! threads and no callbacks, and a cancelled animator ignores everything
//! from then on.

use std::time::Duration;

use thiserror::Error;

/// Default playback rate: simulated seconds per wall-clock second.
pub const DEFAULT_TIME_SCALE: f64 = 100.0;

/// Playback state of an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
    Cancelled,
}

/// Errors when constructing an animator.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("animation requires a positive total duration, got {0} s")]
    NonPositiveDuration(f64),
    #[error("animation requires a positive time scale, got {0}")]
    NonPositiveTimeScale(f64),
}

/// Progress animation over a flight of known total duration.
#[derive(Debug, Clone)]
pub struct Animator {
    total_duration_s: f64,
    time_scale: f64,
    progress: f64,
    state: Playback,
}

impl Animator {
    /// Animator for a flight lasting `total_duration_s` simulated seconds at
    /// the default 100× time scale, initially paused at zero progress.
    pub fn new(total_duration_s: f64) -> Result<Self, AnimationError> {
        Self::with_time_scale(total_duration_s, DEFAULT_TIME_SCALE)
    }

    /// Animator with an explicit time scale (simulated seconds per wall second).
    pub fn with_time_scale(total_duration_s: f64, time_scale: f64) -> Result<Self, AnimationError> {
        if total_duration_s <= 0.0 {
            return Err(AnimationError::NonPositiveDuration(total_duration_s));
        }
        if time_scale <= 0.0 {
            return Err(AnimationError::NonPositiveTimeScale(time_scale));
        }
        Ok(Self {
            total_duration_s,
            time_scale,
            progress: 0.0,
            state: Playback::Paused,
        })
    }

    /// Current progress fraction in [0, 1].
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current playback state.
    pub fn state(&self) -> Playback {
        self.state
    }

    /// Simulated seconds elapsed at the current progress.
    pub fn elapsed_s(&self) -> f64 {
        self.progress * self.total_duration_s
    }

    /// Simulated seconds remaining at the current progress.
    pub fn remaining_s(&self) -> f64 {
        (1.0 - self.progress) * self.total_duration_s
    }

    /// Whether progress has reached the arrival.
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Start or resume playback. No-op once cancelled or finished.
    pub fn play(&mut self) {
        if self.state != Playback::Cancelled && !self.is_finished() {
            self.state = Playback::Playing;
        }
    }

    /// Suspend playback, keeping progress.
    pub fn pause(&mut self) {
        if self.state == Playback::Playing {
            self.state = Playback::Paused;
        }
    }

    /// Rewind to zero progress, paused. No-op once cancelled.
    pub fn reset(&mut self) {
        if self.state != Playback::Cancelled {
            self.progress = 0.0;
            self.state = Playback::Paused;
        }
    }

    /// Detach the animation: all further ticks and controls are ignored.
    pub fn cancel(&mut self) {
        self.state = Playback::Cancelled;
    }

    /// Advance by `elapsed` wall-clock time and return the new progress.
    ///
    /// Progress moves by `elapsed × time_scale / total_duration` while
    /// playing, clamps at 1.0, and playback pauses itself on arrival.
    pub fn tick(&mut self, elapsed: Duration) -> f64 {
        if self.state != Playback::Playing {
            return self.progress;
        }
        let increment = elapsed.as_secs_f64() * self.time_scale / self.total_duration_s;
        self.progress += increment;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.state = Playback::Paused;
        }
        self.progress
    }
}
