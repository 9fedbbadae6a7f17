//! Per-item presentation values derived from the view state.

use crate::constants::*;
use crate::view_mode::ViewMode;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Opacity for one thumbnail.
///
/// In the overview every item is near-opaque with hover lifting it to full;
/// once something is selected the others dim.
#[inline]
pub fn node_opacity(mode: ViewMode, selected: bool, hovered: bool) -> f32 {
    match mode {
        ViewMode::Overview if hovered => NODE_OPACITY_HOVERED,
        ViewMode::Overview => NODE_OPACITY_IDLE,
        _ if selected => 1.0,
        _ => NODE_OPACITY_DIMMED,
    }
}

/// Smoothed hover scale for one thumbnail.
#[derive(Clone, Copy, Debug)]
pub struct NodeVisual {
    pub scale: f32,
}

impl Default for NodeVisual {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl NodeVisual {
    /// Exponential approach toward the hover target over `dt_sec`.
    pub fn update(&mut self, hovered: bool, dt_sec: f32) {
        let target = if hovered { NODE_HOVER_SCALE } else { 1.0 };
        let alpha = 1.0 - (-dt_sec.max(0.0) / NODE_SCALE_TAU_SEC).exp();
        self.scale += (target - self.scale) * alpha;
    }
}

/// Instance record handed to a renderer, one per visible item.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub opacity: f32,
    /// 1.0 for the selected item, 0.0 otherwise.
    pub highlight: f32,
}

impl NodeInstance {
    pub fn new(position: Vec3, scale: f32, opacity: f32, selected: bool) -> Self {
        Self {
            position: position.to_array(),
            scale,
            opacity,
            highlight: if selected { 1.0 } else { 0.0 },
        }
    }
}
