//! Line-segment geometry for the reference sphere and item connections.

use crate::connections::Edge;
use crate::layout::spherical_to_cartesian;
use glam::Vec3;
use std::f64::consts::PI;

pub type Segment = [Vec3; 2];

/// Latitude circles and longitude meridians on a sphere of `radius`.
///
/// `latitudes` bands yield `latitudes - 1` interior circles (the poles are
/// skipped); each circle and meridian is split into `segments` pieces.
pub fn lat_long_segments(
    radius: f32,
    latitudes: usize,
    longitudes: usize,
    segments: usize,
) -> Vec<Segment> {
    let mut out = Vec::new();
    if segments == 0 {
        return out;
    }

    for lat in 1..latitudes {
        let phi = PI * lat as f64 / latitudes as f64;
        for i in 0..segments {
            let t0 = 2.0 * PI * i as f64 / segments as f64;
            let t1 = 2.0 * PI * (i + 1) as f64 / segments as f64;
            out.push([
                spherical_to_cartesian(radius, t0, phi),
                spherical_to_cartesian(radius, t1, phi),
            ]);
        }
    }

    for lon in 0..longitudes {
        let theta = 2.0 * PI * lon as f64 / longitudes as f64;
        for i in 0..segments {
            let p0 = PI * i as f64 / segments as f64;
            let p1 = PI * (i + 1) as f64 / segments as f64;
            out.push([
                spherical_to_cartesian(radius, theta, p0),
                spherical_to_cartesian(radius, theta, p1),
            ]);
        }
    }
    out
}

/// One segment per edge. Edges naming a missing position are skipped.
pub fn edge_segments(positions: &[Vec3], edges: &[Edge]) -> Vec<Segment> {
    edges
        .iter()
        .filter_map(|&(a, b)| Some([*positions.get(a)?, *positions.get(b)?]))
        .collect()
}
