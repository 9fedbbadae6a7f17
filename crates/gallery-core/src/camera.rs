//! Camera description, named poses and the easing curve used to move between them.

use crate::config::CameraParams;
use crate::constants::{DEFAULT_FOCUS_DIRECTION, VIEW_UP_FALLBACK, VIEW_UP_PARALLEL_COS};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
///
/// This is the live camera transform: the orbit controls and the transition
/// controller both write `eye`/`target`, never at the same time.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(params: &CameraParams, aspect: f32) -> Self {
        Self {
            eye: params.home_eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: params.fovy_radians,
            znear: params.znear,
            zfar: params.zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    ///
    /// Looking straight along `up` (an item on a pole) leaves the basis
    /// undefined, so [`VIEW_UP_FALLBACK`] is used there instead.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.effective_up())
    }

    fn effective_up(&self) -> Vec3 {
        let dir = (self.target - self.eye).normalize_or_zero();
        let up = self.up.normalize_or_zero();
        if up == Vec3::ZERO || dir.dot(up).abs() > VIEW_UP_PARALLEL_COS {
            VIEW_UP_FALLBACK
        } else {
            self.up
        }
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.eye,
            look_at: self.target,
        }
    }

    #[inline]
    pub fn apply(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraParams::default(), 1.0)
    }
}

/// Camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Pose that frames one item from just outside the sphere.
///
/// The camera sits on the ray from the origin through `item`, `stand_off`
/// beyond it, looking back at the item. An item on the origin has no outward
/// ray, so [`DEFAULT_FOCUS_DIRECTION`] is used instead.
pub fn focus_pose(item: Vec3, stand_off: f32) -> CameraPose {
    let distance = item.length();
    let direction = item.try_normalize().unwrap_or(DEFAULT_FOCUS_DIRECTION);
    CameraPose {
        position: direction * (distance + stand_off),
        look_at: item,
    }
}

/// Symmetric ease-in-out: quadratic acceleration, mirrored deceleration.
///
/// `t` is clamped to [0, 1]; `ease_in_out(t) == 1 - ease_in_out(1 - t)`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
