//! Waypoint Patrol - kinematic patrol engine for moving platforms and hazards
//!
//! Core modules:
//! - `sim`: Deterministic step-driven traversal (path, cursor, integrator, dwell)
//! - `config`: Data-driven patrol configuration (JSON)
//! - `markers`: Derived trajectory samples for decorative path rendering

pub mod config;
pub mod markers;
pub mod sim;

pub use config::{ConfigError, PatrolConfig};
pub use sim::{LoopMode, PathDefinition, Patrol, PositionSink};

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, matches typical physics step)
    pub const SIM_DT: f32 = 1.0 / 50.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Whole path cycles a single tick walks before the rest is wrapped away
    pub const MAX_CYCLES_PER_TICK: u32 = 16;

    /// Arrival tolerance in world units
    pub const DEFAULT_SNAP_EPSILON: f32 = 0.001;
    /// Patrol speed when none is configured (world units/s)
    pub const DEFAULT_SPEED: f32 = 3.0;

    /// Default spacing between trajectory markers
    pub const DEFAULT_MARKER_SPACING: f32 = 0.5;
    /// Spacing floor so marker sampling stays bounded
    pub const MIN_MARKER_SPACING: f32 = 0.01;
}

/// Unit vector from `from` toward `to`, or zero when they coincide
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Heading as an angle (radians) measured from +Y, for sprites authored facing up
#[inline]
pub fn heading_angle(dir: Vec2) -> f32 {
    // -x because rotating +Y counter-clockwise sweeps toward -X
    (-dir.x).atan2(dir.y)
}
