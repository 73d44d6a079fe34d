//! Idle auto-roam animation.
//!
//! While nobody touches the gallery the canvas drifts along a slow,
//! non-repeating path. The animator is stepped once per frame by the UI and
//! keeps running until it is cancelled on teardown.

use crate::constants::*;
use crate::types::Position;
use std::time::{SystemTime, UNIX_EPOCH};

/// Frame-stepped roaming task bound to the lifetime of the gallery view.
#[derive(Debug, Clone)]
pub struct RoamAnimator {
    /// Clock reading (s) of the most recent user interaction
    last_interaction: f64,
    /// Unix time (s) at which the frame clock read zero
    epoch: f64,
    running: bool,
}

impl Default for RoamAnimator {
    fn default() -> Self {
        Self {
            last_interaction: 0.0,
            epoch: 0.0,
            running: true,
        }
    }
}

/// Unix time (s) corresponding to a frame clock that currently reads `now`.
pub fn wall_clock_epoch(now: f64) -> f64 {
    let unix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default();
    unix - now
}

impl RoamAnimator {
    /// Creates a running animator whose idle clock starts at `now`.
    pub fn new(now: f64) -> Self {
        Self {
            last_interaction: now,
            epoch: 0.0,
            running: true,
        }
    }

    /// Evaluates the roam path at `epoch + now`, so it follows wall-clock time.
    pub fn set_epoch(&mut self, epoch: f64) {
        self.epoch = epoch;
    }

    /// Records user activity at `now`, suspending roaming for the idle period.
    pub fn note_interaction(&mut self, now: f64) {
        self.last_interaction = now;
    }

    /// Seconds elapsed since the last interaction.
    pub fn idle_seconds(&self, now: f64) -> f64 {
        now - self.last_interaction
    }

    /// Whether the task still wants frames.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the task for good. Later steps never move the canvas.
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("Roam animation cancelled");
        }
        self.running = false;
    }

    /// Runs one frame of the animation.
    ///
    /// `blocked` is true while dragging, while the detail view is showing or
    /// while the settings panel is open. Returns the delta to add to the pan
    /// offset, or `None` when the canvas should stay put this frame.
    pub fn step(&self, now: f64, blocked: bool) -> Option<Position> {
        if !self.running || blocked || self.idle_seconds(now) <= ROAM_IDLE_SECONDS {
            return None;
        }
        Some(roam_delta(self.epoch + now))
    }
}

/// Displacement of the roam path at time `t` (s).
///
/// The two axes run at different angular frequencies so the path meanders
/// instead of closing into a loop.
pub fn roam_delta(t: f64) -> Position {
    let phase = t / ROAM_PERIOD;
    let dx = phase.sin() * ROAM_SPEED;
    let dy = (phase * ROAM_Y_FREQUENCY).cos() * ROAM_SPEED;
    Position::new(dx, dy)
}
