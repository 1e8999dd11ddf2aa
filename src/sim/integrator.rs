//! Distance-budget integration along the path
//!
//! Each tick spends `speed * dt` of travel. The budget is consumed across as
//! many segments as it reaches, so the perceived speed does not depend on the
//! tick rate or on how finely the path is subdivided.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cursor::TraversalState;
use super::path::{LoopMode, PathDefinition};
use super::sink::PositionSink;
use crate::consts::{DEFAULT_SNAP_EPSILON, MAX_CYCLES_PER_TICK};

/// What happened while spending one tick's budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationReport {
    /// Distance actually travelled (never more than the budget)
    pub distance: f32,
    /// Waypoints arrived at, including zero-length snaps
    pub waypoints_reached: u32,
    /// Ping-pong direction reversals
    pub flips: u32,
    /// A dwell was armed and the rest of the budget discarded
    pub pause_armed: bool,
    /// Gave up on a path whose waypoints all coincide
    pub stalled: bool,
    /// Whole cycles skipped arithmetically instead of walked
    pub cycles_skipped: u32,
}

/// Spends a distance budget by walking the cursor along the path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceIntegrator {
    /// Below this distance the body counts as having arrived
    pub snap_epsilon: f32,
    /// Dwell at ping-pong extremities (seconds, 0 = none)
    pub pause_at_ends: f32,
}

impl Default for DistanceIntegrator {
    fn default() -> Self {
        Self {
            snap_epsilon: DEFAULT_SNAP_EPSILON,
            pause_at_ends: 0.0,
        }
    }
}

impl DistanceIntegrator {
    /// Move `sink` along `path` by up to `budget` world units.
    ///
    /// Exact arrivals are teleports; the final partial move is a
    /// `move_towards`. Reaching a ping-pong end with a dwell configured ends
    /// the integration immediately and drops whatever budget is left.
    ///
    /// Without a dwell, traversal repeats every `cycle_length`, so a budget
    /// worth more than `MAX_CYCLES_PER_TICK` cycles is reduced modulo the
    /// cycle once the body is on the path. Iterations stay bounded however
    /// large `speed * dt` gets.
    pub fn integrate<S: PositionSink + ?Sized>(
        &self,
        path: &PathDefinition,
        state: &mut TraversalState,
        sink: &mut S,
        budget: f32,
    ) -> IntegrationReport {
        let mut report = IntegrationReport::default();
        let mut budget = budget;
        // Consecutive arrivals that consumed nothing. A full cycle of them
        // means every waypoint coincides and the loop would never end.
        let mut idle_arrivals = 0usize;
        let idle_limit = path.cycle_advances();
        let pauses = path.loop_mode() == LoopMode::PingPong && self.pause_at_ends > 0.0;
        let cycle = path.cycle_length();
        let wraps = !pauses && cycle > 0.0;
        // Hard ceiling on arrivals for when f32 can no longer subtract a
        // segment from the budget (segments tiny next to the cycle)
        let arrival_limit = (MAX_CYCLES_PER_TICK as usize + 2) * idle_limit + 2;
        let mut arrivals = 0usize;

        while budget > 0.0 {
            let current = sink.current_position();
            let seg_end = state.cursor.target(path);

            if wraps
                && budget > cycle * MAX_CYCLES_PER_TICK as f32
                && self.on_segment(current, path.waypoint_at(state.cursor.segment_start_index), seg_end)
            {
                let reduced = budget % cycle;
                report.cycles_skipped += ((budget - reduced) / cycle).round() as u32;
                report.distance += budget - reduced;
                budget = reduced;
                log::debug!("Skipped {} whole cycles of budget", report.cycles_skipped);
                continue;
            }

            let to_end = seg_end - current;
            let remaining = to_end.length();

            if remaining <= self.snap_epsilon {
                // Float residue (or a duplicate waypoint): land exactly, spend nothing
                sink.teleport(seg_end);
                idle_arrivals += 1;
                if idle_arrivals > idle_limit {
                    report.stalled = true;
                    break;
                }
            } else if budget >= remaining {
                sink.teleport(seg_end);
                budget -= remaining;
                report.distance += remaining;
                idle_arrivals = 0;
            } else {
                sink.move_towards(current + to_end / remaining * budget);
                report.distance += budget;
                break;
            }

            let arrival = state.cursor.advance(path);
            report.waypoints_reached += 1;
            arrivals += 1;
            if arrivals > arrival_limit {
                report.stalled = true;
                break;
            }

            if arrival.flipped {
                report.flips += 1;
                log::debug!(
                    "Patrol reversed at waypoint {} (now {:?})",
                    arrival.waypoint,
                    state.cursor.direction
                );
                if pauses {
                    state.pause.arm(self.pause_at_ends);
                    report.pause_armed = true;
                    log::debug!("Dwell armed for {}s", self.pause_at_ends);
                    break;
                }
            }
        }

        report
    }

    /// `p` lies on the segment `a -> b` (within the snap tolerance)
    fn on_segment(&self, p: Vec2, a: Vec2, b: Vec2) -> bool {
        p.distance(a) + p.distance(b) <= a.distance(b) + self.snap_epsilon
    }
}
