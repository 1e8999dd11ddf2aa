//! Position sinks - where the patrol writes its output
//!
//! The engine never owns the rendered or physical body. It reads the body's
//! authoritative position and writes through one of two operations:
//! - `teleport`: exact placement on waypoint arrival, no interpolation
//! - `move_towards`: partial in-segment motion, may be swept continuously

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Body the patrol drives
pub trait PositionSink {
    /// Authoritative position of the body right now
    fn current_position(&self) -> Vec2;

    /// Place the body exactly at `pos`
    fn teleport(&mut self, pos: Vec2);

    /// Move the body to `pos` as continuous displacement
    fn move_towards(&mut self, pos: Vec2);
}

impl<S: PositionSink + ?Sized> PositionSink for &mut S {
    fn current_position(&self) -> Vec2 {
        (**self).current_position()
    }

    fn teleport(&mut self, pos: Vec2) {
        (**self).teleport(pos)
    }

    fn move_towards(&mut self, pos: Vec2) {
        (**self).move_towards(pos)
    }
}

/// Most recent write to a kinematic body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Nothing written yet
    Rest,
    /// Placed exactly, collision observers see a discontinuity
    Teleported { to: Vec2 },
    /// Swept from one point to another
    Swept { from: Vec2, to: Vec2 },
}

/// Kinematic rigid body stand-in (the decorated hazard/platform variant).
///
/// Partial moves are recorded as sweeps so a collision layer can test the
/// whole displacement rather than only the end point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    pos: Vec2,
    last_motion: Motion,
    /// Sweeps since the last `take_sweeps` (oldest first)
    #[serde(skip)]
    sweeps: Vec<(Vec2, Vec2)>,
}

impl KinematicBody {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            last_motion: Motion::Rest,
            sweeps: Vec::new(),
        }
    }

    #[inline]
    pub fn last_motion(&self) -> Motion {
        self.last_motion
    }

    /// Drain recorded sweeps, e.g. once per physics step
    pub fn take_sweeps(&mut self) -> Vec<(Vec2, Vec2)> {
        std::mem::take(&mut self.sweeps)
    }
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl PositionSink for KinematicBody {
    fn current_position(&self) -> Vec2 {
        self.pos
    }

    fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.last_motion = Motion::Teleported { to: pos };
    }

    fn move_towards(&mut self, pos: Vec2) {
        let from = self.pos;
        self.pos = pos;
        self.last_motion = Motion::Swept { from, to: pos };
        self.sweeps.push((from, pos));
    }
}

/// Plain transform (the undecorated variant): every write is a direct assignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSink {
    pub position: Vec2,
}

impl TransformSink {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

impl PositionSink for TransformSink {
    fn current_position(&self) -> Vec2 {
        self.position
    }

    fn teleport(&mut self, pos: Vec2) {
        self.position = pos;
    }

    fn move_towards(&mut self, pos: Vec2) {
        self.position = pos;
    }
}
