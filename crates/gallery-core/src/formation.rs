//! Scatter-to-sphere blending and the pointer-driven progress signal behind it.

use crate::config::FormationParams;
use glam::{Vec2, Vec3};
use instant::Instant;
use std::time::Duration;

/// Linear blend from a scatter position to its sphere position.
///
/// No easing here; any shaping belongs to how `progress` evolves.
#[inline]
pub fn interpolate(scatter: Vec3, sphere: Vec3, progress: f32) -> Vec3 {
    scatter + (sphere - scatter) * progress
}

/// Accumulates pointer travel into a [0, 1] progress value and decays it
/// back toward zero after a period without interaction.
///
/// Owned by the view-mode machine; callers decide when it may update.
#[derive(Clone, Debug)]
pub struct FormationTracker {
    params: FormationParams,
    value: f32,
    last_activity: Instant,
    decay_accum: Duration,
}

impl FormationTracker {
    pub fn new(params: FormationParams, now: Instant) -> Self {
        Self {
            params,
            value: 0.0,
            last_activity: now,
            decay_accum: Duration::ZERO,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Add the Euclidean length of a pointer delta (in pixels).
    ///
    /// Increments that are not a number (a non-finite delta, or a zero
    /// full distance with no movement) leave the value unchanged.
    pub fn pointer_moved(&mut self, delta: Vec2, now: Instant) {
        let distance = delta.length();
        if distance.is_finite() {
            self.step(distance / self.params.full_distance_px);
        }
        self.mark_activity(now);
    }

    fn step(&mut self, amount: f32) {
        let next = self.value + amount;
        if !next.is_nan() {
            self.value = next.clamp(0.0, 1.0);
        }
    }

    /// Restart the idle grace period without changing the value.
    pub fn mark_activity(&mut self, now: Instant) {
        self.last_activity = self.last_activity.max(now);
    }

    #[inline]
    pub fn is_idle(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_activity) > self.params.idle_grace
    }

    /// Run the fixed-interval decay for `dt` of elapsed time.
    ///
    /// Every whole `decay_interval` contained in the accumulated time is one
    /// decay tick, timestamped where it fell inside `dt`. A tick subtracts
    /// only if the idle grace had expired by its timestamp. A zero interval
    /// disables decay.
    pub fn advance(&mut self, dt: Duration, now: Instant) {
        let interval = self.params.decay_interval;
        if interval.is_zero() {
            return;
        }
        self.decay_accum += dt;
        while self.decay_accum >= interval {
            self.decay_accum -= interval;
            let at = now.checked_sub(self.decay_accum).unwrap_or(now);
            if self.is_idle(at) && self.value > 0.0 {
                self.step(-self.params.decay_step);
            }
        }
    }

    /// Drop any partially accumulated decay tick, e.g. after a freeze.
    pub fn reset_decay_clock(&mut self) {
        self.decay_accum = Duration::ZERO;
    }
}
