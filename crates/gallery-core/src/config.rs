//! Scene configuration with defaults taken from [`crate::constants`].

use crate::constants::*;
use crate::layout::LayoutKind;
use glam::Vec3;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("gallery needs at least one item")]
    NoItems,
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("transition duration must be non-zero")]
    ZeroTransition,
    #[error("focus stand-off must be finite and non-negative, got {0}")]
    InvalidStandOff(f32),
    #[error("formation distance must be positive, got {0}")]
    InvalidFormationDistance(f32),
    #[error("formation decay interval must be non-zero")]
    ZeroDecayInterval,
    #[error("orbit damping must be within [0, 1], got {0}")]
    InvalidDamping(f32),
}

#[derive(Clone, Debug)]
pub struct CameraParams {
    pub home_eye: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            home_eye: HOME_EYE,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TransitionParams {
    pub duration: Duration,
    pub stand_off: f32,
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(TRANSITION_MS),
            stand_off: FOCUS_STAND_OFF,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormationParams {
    /// Pointer travel (px) that takes progress from 0 to 1.
    pub full_distance_px: f32,
    pub idle_grace: Duration,
    pub decay_interval: Duration,
    pub decay_step: f32,
}

impl Default for FormationParams {
    fn default() -> Self {
        Self {
            full_distance_px: FORMATION_FULL_DISTANCE_PX,
            idle_grace: Duration::from_millis(FORMATION_IDLE_GRACE_MS),
            decay_interval: Duration::from_millis(FORMATION_DECAY_INTERVAL_MS),
            decay_step: FORMATION_DECAY_STEP,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitParams {
    /// Fraction of the pending rotation dropped each update; 0 disables damping.
    pub damping: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub radius: f32,
    pub layout: LayoutKind,
    pub camera: CameraParams,
    pub transition: TransitionParams,
    pub formation: FormationParams,
    pub orbit: OrbitParams,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            radius: SPHERE_RADIUS,
            layout: LayoutKind::default(),
            camera: CameraParams::default(),
            transition: TransitionParams::default(),
            formation: FormationParams::default(),
            orbit: OrbitParams::default(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if self.transition.duration.is_zero() {
            return Err(ConfigError::ZeroTransition);
        }
        let stand_off = self.transition.stand_off;
        if !stand_off.is_finite() || stand_off < 0.0 {
            return Err(ConfigError::InvalidStandOff(stand_off));
        }
        let distance = self.formation.full_distance_px;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ConfigError::InvalidFormationDistance(distance));
        }
        if self.formation.decay_interval.is_zero() {
            return Err(ConfigError::ZeroDecayInterval);
        }
        if !(0.0..=1.0).contains(&self.orbit.damping) {
            return Err(ConfigError::InvalidDamping(self.orbit.damping));
        }
        Ok(())
    }
}
