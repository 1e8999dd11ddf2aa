//! Patrol configuration
//!
//! Supplied once (usually as JSON next to the level data) and immutable
//! after the patrol starts.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SNAP_EPSILON, DEFAULT_SPEED};
use crate::sim::path::{LoopMode, PathDefinition};

/// Fatal configuration problems, detected before a patrol starts
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("path needs at least 2 waypoints, got {count}")]
    InsufficientWaypoints { count: usize },

    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteWaypoint { index: usize },

    #[error("speed must be finite and >= 0, got {0}")]
    NegativeSpeed(f32),

    #[error("pause_at_ends must be finite and >= 0, got {0}")]
    InvalidPause(f32),

    #[error("snap_epsilon must be finite and > 0, got {0}")]
    InvalidSnapEpsilon(f32),

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

fn default_snap_epsilon() -> f32 {
    DEFAULT_SNAP_EPSILON
}

/// Everything needed to start a patrol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolConfig {
    /// Path of the moving object (at least 2)
    pub waypoints: Vec<Vec2>,
    /// Wrap around or go back and forth
    pub loop_mode: LoopMode,
    /// World units per second
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Dwell at the first and last waypoint (ping-pong only)
    #[serde(default)]
    pub pause_at_ends: f32,
    /// Arrival tolerance
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: f32,
}

impl PatrolConfig {
    pub fn new(waypoints: Vec<Vec2>, loop_mode: LoopMode) -> Self {
        Self {
            waypoints,
            loop_mode,
            speed: DEFAULT_SPEED,
            pause_at_ends: 0.0,
            snap_epsilon: DEFAULT_SNAP_EPSILON,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_pause_at_ends(mut self, seconds: f32) -> Self {
        self.pause_at_ends = seconds;
        self
    }

    pub fn with_snap_epsilon(mut self, epsilon: f32) -> Self {
        self.snap_epsilon = epsilon;
        self
    }

    /// Check every field and build the path
    pub fn validate(&self) -> Result<PathDefinition, ConfigError> {
        // Negated comparisons so NaN fails too
        if !(self.speed >= 0.0) || !self.speed.is_finite() {
            return Err(ConfigError::NegativeSpeed(self.speed));
        }
        if !(self.pause_at_ends >= 0.0) || !self.pause_at_ends.is_finite() {
            return Err(ConfigError::InvalidPause(self.pause_at_ends));
        }
        if !(self.snap_epsilon > 0.0) || !self.snap_epsilon.is_finite() {
            return Err(ConfigError::InvalidSnapEpsilon(self.snap_epsilon));
        }
        PathDefinition::validate(self.waypoints.clone(), self.loop_mode)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded patrol config from {} ({} waypoints)",
            path.as_ref().display(),
            config.waypoints.len()
        );
        Ok(config)
    }
}
