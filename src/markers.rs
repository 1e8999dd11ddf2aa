//! Trajectory markers for decorative path rendering
//!
//! Derived, read-only samples along each segment. Nothing here feeds back
//! into the patrol.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_MARKER_SPACING;
use crate::sim::PathDefinition;
use crate::{heading, heading_angle};

/// One marker sprite along the trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub pos: Vec2,
    /// Unit direction of the segment the marker sits on
    pub heading: Vec2,
    /// Rotation from +Y to `heading` (radians)
    pub angle: f32,
}

/// Evenly spaced markers between `a` and `b`, both ends included.
///
/// The segment is split into `max(1, floor(len / spacing))` equal steps so
/// markers always land on both endpoints. Zero-length segments yield nothing.
pub fn sample_segment(a: Vec2, b: Vec2, spacing: f32) -> Vec<Marker> {
    let len = a.distance(b);
    if len <= 0.0 {
        return Vec::new();
    }

    let spacing = spacing.max(MIN_MARKER_SPACING);
    let count = ((len / spacing).floor() as usize).max(1);
    let step = len / count as f32;
    let dir = heading(a, b);
    let angle = heading_angle(dir);

    (0..=count)
        .map(|c| Marker {
            pos: a + dir * (c as f32 * step),
            heading: dir,
            angle,
        })
        .collect()
}

/// Markers for every segment of `path`, including the wrap segment when closed
pub fn sample_markers(path: &PathDefinition, spacing: f32) -> Vec<Marker> {
    path.segments()
        .flat_map(|(a, b)| sample_segment(a, b, spacing))
        .collect()
}
