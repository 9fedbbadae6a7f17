//! The gallery scene: items, their layouts, the camera and everything that
//! moves it, wired together behind the input and per-frame entry points a
//! host calls.

use crate::camera::Camera;
use crate::config::{ConfigError, GalleryConfig};
use crate::connections::connect_nearest;
use crate::constants::*;
use crate::formation::interpolate;
use crate::guides::{edge_segments, lat_long_segments, Segment};
use crate::keyboard::Command;
use crate::layout::{
    generate_grid_layout, generate_scatter_layout, generate_sphere_layout, LayoutKind,
};
use crate::media::{MediaItem, PreloadTracker};
use crate::node::{node_opacity, NodeInstance, NodeVisual};
use crate::orbit::{OrbitController, OrbitControls};
use crate::picking::{pick_nearest, screen_to_world_ray};
use crate::transition::{CameraTransitionController, TransitionComplete};
use crate::view_mode::{CameraCommand, ViewMode, ViewModeMachine};
use glam::{Vec2, Vec3};
use instant::Instant;

pub struct Gallery<O: OrbitController = OrbitControls> {
    config: GalleryConfig,
    items: Vec<MediaItem>,
    layout: LayoutKind,
    sphere: Vec<Vec3>,
    grid: Vec<Vec3>,
    scatter: Vec<Vec3>,
    camera: Camera,
    orbit: O,
    transitions: CameraTransitionController,
    machine: ViewModeMachine,
    preload: PreloadTracker,
    hovered: Option<usize>,
    visuals: Vec<NodeVisual>,
    last_frame: Instant,
}

impl Gallery<OrbitControls> {
    pub fn new(
        items: Vec<MediaItem>,
        config: GalleryConfig,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        let orbit = OrbitControls::new(config.orbit.clone());
        Self::with_orbit(items, config, orbit, now)
    }
}

impl<O: OrbitController> Gallery<O> {
    pub fn with_orbit(
        items: Vec<MediaItem>,
        config: GalleryConfig,
        orbit: O,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        config.validate()?;

        let count = items.len();
        let sphere = generate_sphere_layout(count, config.radius);
        let grid = generate_grid_layout(count, config.radius);
        let scatter = generate_scatter_layout(count, config.radius);
        let layout = config.layout;
        let visible = match layout {
            LayoutKind::Fibonacci => sphere.len(),
            LayoutKind::Grid => grid.len(),
        };
        log::info!(
            "[layout] {} items, radius={:.2}, layout={}",
            count,
            config.radius,
            layout.label()
        );

        Ok(Self {
            camera: Camera::new(&config.camera, 1.0),
            transitions: CameraTransitionController::new(config.transition.clone()),
            machine: ViewModeMachine::new(visible, config.formation.clone(), now),
            preload: PreloadTracker::default(),
            hovered: None,
            visuals: vec![NodeVisual::default(); count],
            last_frame: now,
            config,
            items,
            layout,
            sphere,
            grid,
            scatter,
            orbit,
        })
    }

    // ---------------- Read-only state ----------------

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn sphere_layout(&self) -> &[Vec3] {
        &self.sphere
    }

    pub fn grid_layout(&self) -> &[Vec3] {
        &self.grid
    }

    pub fn scatter_layout(&self) -> &[Vec3] {
        &self.scatter
    }

    /// Settled positions of the active layout.
    pub fn settled_layout(&self) -> &[Vec3] {
        match self.layout {
            LayoutKind::Fibonacci => &self.sphere,
            LayoutKind::Grid => &self.grid,
        }
    }

    /// Items that have a place in the active layout.
    pub fn visible_count(&self) -> usize {
        self.machine.item_count()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn orbit(&self) -> &O {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut O {
        &mut self.orbit
    }

    pub fn transitions(&self) -> &CameraTransitionController {
        &self.transitions
    }

    pub fn mode(&self) -> ViewMode {
        self.machine.mode()
    }

    pub fn selected(&self) -> Option<usize> {
        self.machine.selected()
    }

    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.items.get(self.machine.selected()?)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.machine.is_selected(index)
    }

    pub fn formation_progress(&self) -> f32 {
        self.machine.formation_progress()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn preload(&self) -> &PreloadTracker {
        &self.preload
    }

    pub fn preload_mut(&mut self) -> &mut PreloadTracker {
        &mut self.preload
    }

    /// Where each visible item is drawn this frame.
    pub fn node_positions(&self) -> Vec<Vec3> {
        let progress = self.formation_progress();
        let visible = self.visible_count();
        match self.layout {
            LayoutKind::Fibonacci => self
                .scatter
                .iter()
                .zip(&self.sphere)
                .take(visible)
                .map(|(s, p)| interpolate(*s, *p, progress))
                .collect(),
            LayoutKind::Grid => self.grid.iter().take(visible).copied().collect(),
        }
    }

    pub fn node_instances(&self) -> Vec<NodeInstance> {
        let mode = self.mode();
        self.node_positions()
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                let selected = self.is_selected(i);
                let hovered = self.hovered == Some(i);
                NodeInstance::new(
                    position,
                    NODE_BASE_SIZE * self.visuals[i].scale,
                    node_opacity(mode, selected, hovered),
                    selected,
                )
            })
            .collect()
    }

    /// Lines linking each drawn item to its nearest neighbours.
    pub fn connection_segments(&self) -> Vec<Segment> {
        let positions = self.node_positions();
        let edges = connect_nearest(&positions, NEAREST_NEIGHBORS);
        edge_segments(&positions, &edges)
    }

    /// Latitude/longitude wireframe of the settled sphere.
    pub fn guide_segments(&self) -> Vec<Segment> {
        lat_long_segments(
            self.config.radius,
            GUIDE_LATITUDES,
            GUIDE_LONGITUDES,
            GUIDE_SEGMENTS,
        )
    }

    /// Item under the pointer, using the live camera.
    pub fn pick(&self, viewport: Vec2, px: Vec2) -> Option<usize> {
        let (ro, rd) = screen_to_world_ray(&self.camera, viewport, px);
        pick_nearest(ro, rd, &self.node_positions(), PICK_RADIUS)
    }

    // ---------------- Input ----------------

    pub fn select(&mut self, index: usize, now: Instant) {
        let cmd = self.machine.select(index);
        self.run(cmd, now);
    }

    pub fn next(&mut self, now: Instant) {
        let cmd = self.machine.next();
        self.run(cmd, now);
    }

    pub fn previous(&mut self, now: Instant) {
        let cmd = self.machine.previous();
        self.run(cmd, now);
    }

    pub fn close(&mut self, now: Instant) {
        let cmd = self.machine.close();
        self.run(cmd, now);
    }

    pub fn command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Close => self.close(now),
            Command::Next => self.next(now),
            Command::Previous => self.previous(now),
            Command::Layout(kind) => {
                self.set_layout(kind);
            }
        }
    }

    pub fn pointer_moved(&mut self, dx: f32, dy: f32, now: Instant) {
        self.machine.pointer_moved(dx, dy, now);
    }

    pub fn orbit_interaction_start(&mut self, now: Instant) {
        self.machine.orbit_interaction(now);
    }

    pub fn orbit_interaction_end(&mut self, now: Instant) {
        self.machine.orbit_interaction(now);
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.visible_count());
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
        }
    }

    /// Switch the settled formation. Only honoured in an idle overview;
    /// returns whether the layout changed.
    pub fn set_layout(&mut self, kind: LayoutKind) -> bool {
        if kind == self.layout {
            return false;
        }
        if self.mode() != ViewMode::Overview || !self.transitions.is_idle() {
            log::warn!("[layout] switch to {} ignored outside overview", kind.label());
            return false;
        }
        let visible = match kind {
            LayoutKind::Fibonacci => self.sphere.len(),
            LayoutKind::Grid => self.grid.len(),
        }
        .min(self.items.len());
        if !self.machine.set_item_count(visible) {
            return false;
        }
        self.layout = kind;
        self.hovered = None;
        log::info!("[layout] {} ({} visible)", kind.label(), visible);
        true
    }

    fn run(&mut self, cmd: Option<CameraCommand>, now: Instant) {
        match cmd {
            Some(CameraCommand::FocusOn(index)) => {
                let target = self.settled_layout()[index];
                self.transitions.focus_on(target, &self.camera, &mut self.orbit, now);
                self.preload.begin(&self.items[index]);
            }
            Some(CameraCommand::ReturnHome) => {
                self.transitions.return_home(&self.camera, &mut self.orbit, now);
                self.preload.clear();
            }
            None => {}
        }
    }

    // ---------------- Per frame ----------------

    /// Advance everything time-based to `now`.
    ///
    /// Input delivered before this call is already folded into formation
    /// progress, so positions read afterwards are consistent for the frame.
    pub fn frame(&mut self, now: Instant) -> Option<TransitionComplete> {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = self.last_frame.max(now);

        self.machine.advance(dt, now);
        self.orbit.update(&mut self.camera);
        let done = self.transitions.tick(now, &mut self.camera, &mut self.orbit);
        if done.is_some() {
            self.machine.transition_complete(now);
        }

        let dt_sec = dt.as_secs_f32();
        for (i, visual) in self.visuals.iter_mut().enumerate() {
            visual.update(self.hovered == Some(i), dt_sec);
        }
        done
    }
}
