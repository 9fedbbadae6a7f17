//! Neighbour graphs over item positions, used to draw connecting lines.
//!
//! Edges are undirected `(low, high)` index pairs, deduplicated and sorted.

use crate::constants::{DELAUNAY_CANDIDATES, DELAUNAY_NEIGHBORS, GEODESIC_NEIGHBORS};
use fnv::FnvHashSet;
use glam::Vec3;
use smallvec::SmallVec;

pub type Edge = (usize, usize);

/// Indices of the `k` positions closest to `positions[i]`, nearest first.
fn nearest(positions: &[Vec3], i: usize, k: usize) -> SmallVec<[usize; 8]> {
    let origin = positions[i];
    let mut by_distance: Vec<(usize, f32)> = positions
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(j, p)| (j, origin.distance_squared(*p)))
        .collect();
    by_distance.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    by_distance.into_iter().take(k).map(|(j, _)| j).collect()
}

fn collect_edges(
    positions: &[Vec3],
    mut neighbours: impl FnMut(usize) -> SmallVec<[usize; 8]>,
) -> Vec<Edge> {
    let mut edges = FnvHashSet::default();
    for i in 0..positions.len() {
        for j in neighbours(i) {
            edges.insert((i.min(j), i.max(j)));
        }
    }
    let mut edges: Vec<Edge> = edges.into_iter().collect();
    edges.sort_unstable();
    edges
}

/// Connect every position to its `k` nearest neighbours.
pub fn connect_nearest(positions: &[Vec3], k: usize) -> Vec<Edge> {
    collect_edges(positions, |i| nearest(positions, i, k))
}

/// Icosphere-like mesh: each position linked to its closest seven.
pub fn connect_geodesic(positions: &[Vec3]) -> Vec<Edge> {
    connect_nearest(positions, GEODESIC_NEIGHBORS)
}

/// Rough triangulation: among the eight closest candidates, keep six.
pub fn connect_delaunay(positions: &[Vec3]) -> Vec<Edge> {
    collect_edges(positions, |i| {
        let mut candidates = nearest(positions, i, DELAUNAY_CANDIDATES);
        candidates.truncate(DELAUNAY_NEIGHBORS);
        candidates
    })
}
