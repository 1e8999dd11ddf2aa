//! Dwell timer at ping-pong extremities

use serde::{Deserialize, Serialize};

/// Counts down simulated time while the patrol rests at a path end
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointPauseController {
    remaining: f32,
}

impl EndpointPauseController {
    /// Start a dwell of `duration` seconds (non-positive durations are ignored)
    pub fn arm(&mut self, duration: f32) {
        if duration > 0.0 {
            self.remaining = duration;
        }
    }

    /// Consume `dt` of dwell time. Returns true if this tick was spent paused,
    /// in which case the caller skips integration.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.remaining > 0.0
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
