//! Deterministic patrol simulation
//!
//! This module must stay pure and step-driven:
//! - Fixed timestep supplied by the host
//! - No wall-clock time, no background work
//! - Each patrol owns its state; nothing is shared between patrols

pub mod clock;
pub mod cursor;
pub mod integrator;
pub mod path;
pub mod patrol;
pub mod pause;
pub mod sink;

pub use clock::FixedTimestep;
pub use cursor::{Arrival, Direction, SegmentCursor, TraversalState};
pub use integrator::{DistanceIntegrator, IntegrationReport};
pub use path::{LoopMode, PathDefinition, Waypoint};
pub use patrol::{Patrol, TickReport};
pub use pause::EndpointPauseController;
pub use sink::{KinematicBody, Motion, PositionSink, TransformSink};
