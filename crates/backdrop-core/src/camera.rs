//! Parallax camera.
//!
//! The camera always looks at the origin. Its x/y chase a pointer-derived
//! target with a fixed per-frame low-pass; its z is set directly from scroll
//! progress.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera with a fixed look-at target.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// One smoothing step toward the pointer target. Frame-rate dependent:
    /// the step size is per call, not per second.
    pub fn follow_pointer(&mut self, pointer: Vec2) {
        let target = pointer_target(pointer);
        self.position.x += (target.x - self.position.x) * CAMERA_SMOOTHING;
        self.position.y += (target.y - self.position.y) * CAMERA_SMOOTHING;
    }

    pub fn apply_scroll(&mut self, progress: f32) {
        self.position.z = depth_for_progress(progress);
    }
}

/// Camera x/y the pointer asks for; screen-down pointer moves the camera down.
#[inline]
pub fn pointer_target(pointer: Vec2) -> Vec2 {
    Vec2::new(pointer.x * POINTER_TARGET_X, -pointer.y * POINTER_TARGET_Y)
}

#[inline]
pub fn depth_for_progress(progress: f32) -> f32 {
    CAMERA_BASE_Z + progress * CAMERA_SCROLL_DEPTH
}
