//! Top-level interaction state: which mode the gallery is in, which item is
//! selected, and the formation progress signal.
//!
//! The machine does not touch the camera. Selection changes return a
//! [`CameraCommand`] for the caller to hand to the transition controller, and
//! the caller reports back through [`ViewModeMachine::transition_complete`].

use crate::config::FormationParams;
use crate::formation::FormationTracker;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Overview,
    Transitioning,
    Focused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    FocusOn(usize),
    ReturnHome,
}

#[derive(Clone, Debug)]
pub struct ViewModeMachine {
    mode: ViewMode,
    selected: Option<usize>,
    item_count: usize,
    formation: FormationTracker,
}

impl ViewModeMachine {
    pub fn new(item_count: usize, formation: FormationParams, now: Instant) -> Self {
        Self {
            mode: ViewMode::Overview,
            selected: None,
            item_count,
            formation: FormationTracker::new(formation, now),
        }
    }

    #[inline]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn formation_progress(&self) -> f32 {
        self.formation.value()
    }

    /// Change how many items are selectable. Only honoured in a settled
    /// overview; returns whether the count was applied.
    pub fn set_item_count(&mut self, count: usize) -> bool {
        if self.mode != ViewMode::Overview || self.selected.is_some() {
            return false;
        }
        self.item_count = count;
        true
    }

    /// Focus `index`. Out-of-range indices and re-selecting the item that is
    /// already focused (or being focused) are no-ops.
    pub fn select(&mut self, index: usize) -> Option<CameraCommand> {
        if index >= self.item_count {
            log::warn!(
                "[select] item {} out of range (count={}); ignoring",
                index,
                self.item_count
            );
            return None;
        }
        if self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        self.mode = ViewMode::Transitioning;
        log::info!("[select] item {}", index);
        Some(CameraCommand::FocusOn(index))
    }

    /// Deselect and head back to the overview.
    pub fn close(&mut self) -> Option<CameraCommand> {
        self.selected?;
        self.selected = None;
        self.mode = ViewMode::Transitioning;
        log::info!("[select] none");
        Some(CameraCommand::ReturnHome)
    }

    /// Advance the selection by one, wrapping. No-op when nothing is selected.
    pub fn next(&mut self) -> Option<CameraCommand> {
        self.step(1)
    }

    /// Move the selection back by one, wrapping. No-op when nothing is selected.
    pub fn previous(&mut self) -> Option<CameraCommand> {
        self.step(self.item_count.saturating_sub(1))
    }

    fn step(&mut self, offset: usize) -> Option<CameraCommand> {
        let current = self.selected?;
        if self.item_count == 0 {
            return None;
        }
        self.select((current + offset) % self.item_count)
    }

    /// The camera finished its animation; settle into the matching mode.
    pub fn transition_complete(&mut self, now: Instant) {
        if self.mode != ViewMode::Transitioning {
            return;
        }
        if self.selected.is_some() {
            self.mode = ViewMode::Focused;
        } else {
            self.mode = ViewMode::Overview;
            // progress was frozen; the idle grace restarts from here
            self.formation.mark_activity(now);
            self.formation.reset_decay_clock();
        }
        log::debug!("[select] mode={:?}", self.mode);
    }

    /// Raw pointer movement in pixels. Only feeds formation in the overview.
    pub fn pointer_moved(&mut self, dx: f32, dy: f32, now: Instant) {
        if self.mode == ViewMode::Overview {
            self.formation.pointer_moved(Vec2::new(dx, dy), now);
        }
    }

    /// Orbit drag start/end. Resets the idle timer without moving progress.
    pub fn orbit_interaction(&mut self, now: Instant) {
        self.formation.mark_activity(now);
    }

    /// Fixed-interval idle decay; frozen outside the overview.
    pub fn advance(&mut self, dt: Duration, now: Instant) {
        if self.mode == ViewMode::Overview {
            self.formation.advance(dt, now);
        }
    }
}
