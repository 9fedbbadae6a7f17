//! Point distributions for placing gallery items in 3D.
//!
//! All generators return positions in item order. The sphere and grid
//! generators are deterministic; the scatter generator draws from an RNG and
//! is meant to be called once per session and cached by the caller.

use crate::constants::{GRID_MIN_RING_POINTS, GRID_ROW_FACTOR, SCATTER_XY_EXTENT, SCATTER_Z_EXTENT};
use glam::Vec3;
use rand::prelude::*;
use std::f64::consts::PI;

/// Which settled formation the gallery arranges its items in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutKind {
    /// Golden-angle spiral, blended from the scatter formation.
    #[default]
    Fibonacci,
    /// Latitude rings; items sit directly on the ring points.
    Grid,
}

impl LayoutKind {
    pub fn label(self) -> &'static str {
        match self {
            LayoutKind::Fibonacci => "Fibonacci",
            LayoutKind::Grid => "Grid",
        }
    }

    pub fn generate(self, count: usize, radius: f32) -> Vec<Vec3> {
        match self {
            LayoutKind::Fibonacci => generate_sphere_layout(count, radius),
            LayoutKind::Grid => generate_grid_layout(count, radius),
        }
    }
}

/// Convert physics-convention spherical coordinates to Cartesian, Y up.
///
/// - `theta`: azimuth around the Y axis
/// - `phi`: polar angle measured from +Y
#[inline]
pub fn spherical_to_cartesian(radius: f32, theta: f64, phi: f64) -> Vec3 {
    let r = radius as f64;
    Vec3::new(
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
    )
}

/// Golden-angle spiral over the sphere surface.
///
/// `phi = acos(1 - 2t)` keeps the distribution uniform in area rather than in
/// angle, so item 0 always lands on the +Y pole.
pub fn generate_sphere_layout(count: usize, radius: f32) -> Vec<Vec3> {
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle_increment = 2.0 * PI * golden_ratio;
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let phi = (1.0 - 2.0 * t).acos();
            let theta = angle_increment * i as f64;
            spherical_to_cartesian(radius, theta, phi)
        })
        .collect()
}

/// Uniform random positions inside a box sized relative to `radius`.
pub fn generate_scatter_layout(count: usize, radius: f32) -> Vec<Vec3> {
    generate_scatter_layout_with(count, radius, &mut thread_rng())
}

/// Same as [`generate_scatter_layout`] but drawing from the given RNG.
pub fn generate_scatter_layout_with<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    let xy = radius * SCATTER_XY_EXTENT;
    let z = radius * SCATTER_Z_EXTENT;
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * xy,
                (rng.gen::<f32>() - 0.5) * 2.0 * xy,
                (rng.gen::<f32>() - 0.5) * 2.0 * z,
            )
        })
        .collect()
}

/// Latitude/longitude rings approximating `count` points.
///
/// Rings are filled top to bottom and generation stops as soon as `count`
/// points exist, so the last ring may be truncated. With few rows the rings
/// can also run out early, in which case fewer than `count` points come back.
pub fn generate_grid_layout(count: usize, radius: f32) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(count);
    if count == 0 {
        return positions;
    }
    let rows = ((count as f64 * GRID_ROW_FACTOR as f64).sqrt().ceil() as usize).max(1);
    let cols = count.div_ceil(rows);

    for i in 0..rows {
        let phi = PI * (i + 1) as f64 / (rows + 1) as f64;
        let ring = ((cols as f64 * phi.sin()).round() as usize).max(GRID_MIN_RING_POINTS);
        for j in 0..ring {
            let theta = 2.0 * PI * j as f64 / ring as f64;
            positions.push(spherical_to_cartesian(radius, theta, phi));
            if positions.len() >= count {
                return positions;
            }
        }
    }
    positions
}
