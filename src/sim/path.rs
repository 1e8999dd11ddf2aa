//! Validated patrol paths
//!
//! A path is an ordered list of waypoints plus a loop mode:
//! - `Closed`: the last waypoint connects back to the first
//! - `PingPong`: traversal reverses at either end, no implicit wrap

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cursor::Direction;
use crate::config::ConfigError;

/// A fixed 2D point the patrol passes through
pub type Waypoint = Vec2;

/// How traversal continues past the final waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Last waypoint wraps to the first, always moving forward
    Closed,
    /// Reverse direction at the first and last waypoint (yoyo)
    PingPong,
}

impl LoopMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopMode::Closed => "closed",
            LoopMode::PingPong => "ping_pong",
        }
    }
}

/// Ordered waypoints plus loop mode. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathDefinition {
    waypoints: Vec<Waypoint>,
    loop_mode: LoopMode,
}

impl PathDefinition {
    /// Build a path, rejecting fewer than two waypoints or non-finite coordinates
    pub fn validate(waypoints: Vec<Waypoint>, loop_mode: LoopMode) -> Result<Self, ConfigError> {
        if waypoints.len() < 2 {
            return Err(ConfigError::InsufficientWaypoints {
                count: waypoints.len(),
            });
        }
        if let Some(index) = waypoints.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteWaypoint { index });
        }
        Ok(Self {
            waypoints,
            loop_mode,
        })
    }

    #[inline]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Index of the final waypoint
    #[inline]
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Waypoint at `i`. Panics if out of range, like slice indexing.
    #[inline]
    pub fn waypoint_at(&self, i: usize) -> Waypoint {
        self.waypoints[i]
    }

    /// Closed paths include the wrap segment; ping-pong paths don't
    pub fn segment_count(&self) -> usize {
        match self.loop_mode {
            LoopMode::Closed => self.waypoints.len(),
            LoopMode::PingPong => self.waypoints.len() - 1,
        }
    }

    /// Waypoint index the cursor heads to from `start` when moving in `direction`.
    ///
    /// Closed paths ignore direction and wrap. Ping-pong paths clamp at the
    /// ends, so asking past an extremity yields the extremity itself (a
    /// zero-length segment the integrator snaps through).
    pub fn next_index(&self, start: usize, direction: Direction) -> usize {
        match self.loop_mode {
            LoopMode::Closed => (start + 1) % self.waypoints.len(),
            LoopMode::PingPong => {
                let next = start as isize + direction.sign();
                next.clamp(0, self.last_index() as isize) as usize
            }
        }
    }

    /// Segment `i` as (start, end) in forward path order
    pub fn segment(&self, i: usize) -> (Waypoint, Waypoint) {
        let start = self.waypoints[i];
        let end = self.waypoints[(i + 1) % self.waypoints.len()];
        (start, end)
    }

    pub fn segment_length(&self, i: usize) -> f32 {
        let (a, b) = self.segment(i);
        a.distance(b)
    }

    /// Segments in forward path order, including the wrap segment when closed
    pub fn segments(&self) -> impl Iterator<Item = (Waypoint, Waypoint)> + '_ {
        (0..self.segment_count()).map(|i| self.segment(i))
    }

    /// One lap (closed) or one one-way pass (ping-pong)
    pub fn total_length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Distance until traversal state repeats: a lap, or out-and-back
    pub fn cycle_length(&self) -> f32 {
        match self.loop_mode {
            LoopMode::Closed => self.total_length(),
            LoopMode::PingPong => 2.0 * self.total_length(),
        }
    }

    /// Advances (waypoint arrivals) in one full cycle
    pub fn cycle_advances(&self) -> usize {
        match self.loop_mode {
            LoopMode::Closed => self.segment_count(),
            LoopMode::PingPong => 2 * self.segment_count(),
        }
    }
}
