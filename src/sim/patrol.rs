//! Patrol engine - one path, one traversal state, one body
//!
//! The host calls `tick(dt)` once per fixed simulation step. Everything else
//! (rendering, hazards, scene flow) reads the sink afterwards.

use glam::Vec2;

use super::cursor::TraversalState;
use super::integrator::{DistanceIntegrator, IntegrationReport};
use super::path::{LoopMode, PathDefinition};
use super::sink::PositionSink;
use crate::config::{ConfigError, PatrolConfig};

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Position committed to the sink after this tick
    pub position: Vec2,
    /// Tick was spent dwelling at an endpoint
    pub paused: bool,
    pub integration: IntegrationReport,
}

/// A kinematic body patrolling a fixed path
#[derive(Debug, Clone)]
pub struct Patrol<S: PositionSink> {
    path: PathDefinition,
    integrator: DistanceIntegrator,
    speed: f32,
    state: TraversalState,
    sink: S,
    enabled: bool,
    /// Degenerate-path warning already logged
    stall_reported: bool,
}

impl<S: PositionSink> Patrol<S> {
    /// Validate `config` and place the body exactly on the first waypoint.
    ///
    /// Refuses to start on any configuration error; there is no
    /// half-initialized patrol.
    pub fn new(config: &PatrolConfig, mut sink: S) -> Result<Self, ConfigError> {
        let path = config.validate()?;

        if path.loop_mode() == LoopMode::Closed && config.pause_at_ends > 0.0 {
            log::warn!(
                "pause_at_ends={} ignored on a closed loop (dwell is ping-pong only)",
                config.pause_at_ends
            );
        }

        sink.teleport(path.waypoint_at(0));

        log::info!(
            "Patrol started: {} waypoints, mode={}, speed={}, length={:.3}",
            path.waypoint_count(),
            path.loop_mode().as_str(),
            config.speed,
            path.total_length()
        );

        Ok(Self {
            integrator: DistanceIntegrator {
                snap_epsilon: config.snap_epsilon,
                pause_at_ends: config.pause_at_ends,
            },
            speed: config.speed,
            path,
            state: TraversalState::default(),
            sink,
            enabled: true,
            stall_reported: false,
        })
    }

    /// Advance the patrol by `dt` seconds of simulated time.
    ///
    /// Zero or negative `dt`, zero speed, or a disabled patrol are no-op ticks.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport {
            position: self.sink.current_position(),
            paused: false,
            integration: IntegrationReport::default(),
        };

        if !self.enabled || dt <= 0.0 || self.speed <= 0.0 {
            return report;
        }

        if self.state.pause.tick(dt) {
            report.paused = true;
            return report;
        }

        let budget = self.speed * dt;
        report.integration = self
            .integrator
            .integrate(&self.path, &mut self.state, &mut self.sink, budget);

        if report.integration.stalled && !self.stall_reported {
            log::warn!("Patrol cannot make progress along its path (zero-length or degenerate); holding position");
            self.stall_reported = true;
        }

        report.position = self.sink.current_position();
        report
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.sink.current_position()
    }

    #[inline]
    pub fn path(&self) -> &PathDefinition {
        &self.path
    }

    #[inline]
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the body, e.g. when something external perturbs it.
    /// The next tick resumes from whatever position the sink reports.
    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled patrols keep their traversal state but ignore ticks
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Patrol {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }
}
