//! Time-based camera animation between the overview and a focused item.
//!
//! The controller owns the camera transform whenever it is not `Idle`: it
//! disables the orbit controls when an animation starts and only gives them
//! back once the camera has returned home.

use crate::camera::{ease_in_out, focus_pose, Camera, CameraPose};
use crate::config::TransitionParams;
use crate::orbit::OrbitController;
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Orbit controls own the camera.
    Idle,
    AnimatingIn,
    /// Parked at a focus pose; orbit stays disabled.
    Holding,
    AnimatingOut,
}

/// Emitted by [`CameraTransitionController::tick`] when an animation lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionComplete {
    pub direction: Direction,
}

/// One in-flight camera animation.
#[derive(Clone, Debug)]
pub struct Transition {
    pub direction: Direction,
    pub start: Vec3,
    pub end: Vec3,
    pub look_at: Vec3,
    pub started_at: Instant,
    pub duration: Duration,
}

impl Transition {
    /// Linear progress in [0, 1] from wall-clock time since `started_at`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn pose_at(&self, now: Instant) -> CameraPose {
        let eased = ease_in_out(self.progress(now));
        CameraPose {
            position: self.start.lerp(self.end, eased),
            look_at: self.look_at,
        }
    }

    #[inline]
    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[derive(Clone, Debug)]
pub struct CameraTransitionController {
    params: TransitionParams,
    phase: TransitionPhase,
    active: Option<Transition>,
    home: Option<CameraPose>,
}

impl CameraTransitionController {
    pub fn new(params: TransitionParams) -> Self {
        Self {
            params,
            phase: TransitionPhase::Idle,
            active: None,
            home: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn active(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// Pose captured when the current focus episode started.
    pub fn home(&self) -> Option<CameraPose> {
        self.home
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    /// Start (or restart) an animation toward the focus pose of `item`.
    ///
    /// Any in-flight animation is dropped without a completion event and the
    /// new one starts from the camera's live position.
    pub fn focus_on(
        &mut self,
        item: Vec3,
        camera: &Camera,
        orbit: &mut dyn OrbitController,
        now: Instant,
    ) {
        if self.home.is_none() {
            self.home = Some(camera.pose());
        }
        orbit.set_enabled(false);
        let pose = focus_pose(item, self.params.stand_off);
        self.start(Direction::In, camera.eye, pose.position, pose.look_at, now);
        log::info!(
            "[camera] focus -> ({:.2},{:.2},{:.2})",
            item.x,
            item.y,
            item.z
        );
    }

    /// Animate back to the captured home pose, looking at the origin.
    ///
    /// Does nothing when no focus episode is active.
    pub fn return_home(&mut self, camera: &Camera, orbit: &mut dyn OrbitController, now: Instant) {
        let Some(home) = self.home else {
            log::debug!("[camera] return_home with no home pose; ignoring");
            return;
        };
        orbit.set_enabled(false);
        self.start(Direction::Out, camera.eye, home.position, Vec3::ZERO, now);
        log::info!("[camera] returning home");
    }

    fn start(&mut self, direction: Direction, from: Vec3, to: Vec3, look_at: Vec3, now: Instant) {
        if self.active.is_some() {
            log::debug!("[camera] superseding in-flight transition");
        }
        self.active = Some(Transition {
            direction,
            start: from,
            end: to,
            look_at,
            started_at: now,
            duration: self.params.duration,
        });
        self.phase = match direction {
            Direction::In => TransitionPhase::AnimatingIn,
            Direction::Out => TransitionPhase::AnimatingOut,
        };
    }

    /// Advance the active animation and write the camera.
    ///
    /// Call once per frame with monotonically increasing `now`.
    pub fn tick(
        &mut self,
        now: Instant,
        camera: &mut Camera,
        orbit: &mut dyn OrbitController,
    ) -> Option<TransitionComplete> {
        let transition = self.active.as_ref()?;
        if !transition.is_finished(now) {
            camera.apply(transition.pose_at(now));
            return None;
        }
        camera.apply(CameraPose {
            position: transition.end,
            look_at: transition.look_at,
        });

        let direction = transition.direction;
        self.active = None;
        match direction {
            Direction::In => {
                self.phase = TransitionPhase::Holding;
            }
            Direction::Out => {
                self.phase = TransitionPhase::Idle;
                self.home = None;
                orbit.set_target(Vec3::ZERO);
                orbit.set_enabled(true);
            }
        }
        log::debug!("[camera] transition {:?} complete", direction);
        Some(TransitionComplete { direction })
    }
}
