//! User-driven orbit rotation around a target point.

use crate::camera::Camera;
use crate::config::OrbitParams;
use crate::constants::ORBIT_MIN_POLAR;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// The contract the transition controller needs from whatever lets the user
/// rotate the camera. While disabled, `update` must not touch the camera.
pub trait OrbitController {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
    fn target(&self) -> Vec3;
    fn set_target(&mut self, target: Vec3);
    /// Apply pending rotation to the camera. Returns true if it was written.
    fn update(&mut self, camera: &mut Camera) -> bool;
}

/// Damped yaw/pitch orbit, zoom disabled.
///
/// Rotation is applied to the live camera offset from the target each
/// update, so handing the camera back after an animation needs no resync.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    enabled: bool,
    target: Vec3,
    params: OrbitParams,
    // pending rotation, radians
    delta_theta: f32,
    delta_phi: f32,
}

impl OrbitControls {
    pub fn new(params: OrbitParams) -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            params,
            delta_theta: 0.0,
            delta_phi: 0.0,
        }
    }

    /// Queue rotation for a pointer drag of `(dx, dy)` pixels.
    ///
    /// A drag across the full viewport height turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.enabled {
            return;
        }
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.params.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.params.rotate_speed;
    }

    /// True while queued rotation is still being eased out.
    pub fn is_settling(&self) -> bool {
        self.delta_theta.abs() > 1e-5 || self.delta_phi.abs() > 1e-5
    }

    fn clear_pending(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitParams::default())
    }
}

impl OrbitController for OrbitControls {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.clear_pending();
        }
        self.enabled = enabled;
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.enabled {
            return false;
        }
        let offset = camera.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }

        let damping = self.params.damping;
        let factor = if damping > 0.0 { damping } else { 1.0 };

        let theta = offset.x.atan2(offset.z) + self.delta_theta * factor;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.delta_phi * factor)
            .clamp(ORBIT_MIN_POLAR, PI - ORBIT_MIN_POLAR);

        camera.eye = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
        camera.target = self.target;

        if damping > 0.0 {
            self.delta_theta *= 1.0 - damping;
            self.delta_phi *= 1.0 - damping;
        } else {
            self.clear_pending();
        }
        true
    }
}
