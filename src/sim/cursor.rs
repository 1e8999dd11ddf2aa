//! Segment cursor and per-patrol traversal state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::path::{LoopMode, PathDefinition};
use super::pause::EndpointPauseController;

/// Travel direction along the waypoint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1 forward, -1 backward
    #[inline]
    pub fn sign(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Result of moving the cursor onto the waypoint it was heading to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// Waypoint index that is now the segment start
    pub waypoint: usize,
    /// Direction reversed at a ping-pong extremity
    pub flipped: bool,
}

/// Which segment the patrol is on and which way it is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentCursor {
    pub segment_start_index: usize,
    pub direction: Direction,
}

impl SegmentCursor {
    /// Waypoint index the current segment ends at
    #[inline]
    pub fn target_index(&self, path: &PathDefinition) -> usize {
        path.next_index(self.segment_start_index, self.direction)
    }

    #[inline]
    pub fn target(&self, path: &PathDefinition) -> Vec2 {
        path.waypoint_at(self.target_index(path))
    }

    /// Step onto the next segment after arriving at the current target.
    ///
    /// Ping-pong takes the arrived waypoint as the new start first, then
    /// flips if that waypoint is the extremity in the travel direction.
    pub fn advance(&mut self, path: &PathDefinition) -> Arrival {
        let arrived = self.target_index(path);
        self.segment_start_index = arrived;

        let flipped = match path.loop_mode() {
            LoopMode::Closed => false,
            LoopMode::PingPong => match self.direction {
                Direction::Forward => arrived == path.last_index(),
                Direction::Backward => arrived == 0,
            },
        };
        if flipped {
            self.direction = self.direction.flipped();
        }

        Arrival {
            waypoint: arrived,
            flipped,
        }
    }
}

/// Mutable traversal state, exclusively owned by one patrol
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalState {
    pub cursor: SegmentCursor,
    pub pause: EndpointPauseController,
}

impl TraversalState {
    #[inline]
    pub fn segment_start_index(&self) -> usize {
        self.cursor.segment_start_index
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.cursor.direction
    }

    #[inline]
    pub fn pause_remaining(&self) -> f32 {
        self.pause.remaining()
    }
}
