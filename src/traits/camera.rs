use glam::{Mat4, Vec3};

use crate::camera::{CameraSeed, NavigationMode};
use crate::core::{CanvasContext, InputEvent, InteractionKind};
use crate::error::Result;
use crate::math::Basis;

/// Contract every navigation model implements.
///
/// Each frame the host calls `update` once, then reads the position and
/// matrices. Input handlers may run between frames on the same thread.
pub trait Camera {
    fn mode(&self) -> NavigationMode;

    /// Eye position in world space
    fn position(&self) -> Vec3;

    /// Point the camera looks at
    fn target(&self) -> Vec3;

    fn basis(&self) -> Basis;

    /// Vertical field of view in radians
    fn fov(&self) -> f32;

    /// Advance time-driven state by `dt_millis`
    fn update(&mut self, dt_millis: f32);

    /// Teleport the eye, optionally with a new up hint, returning the new position
    fn move_to(&mut self, position: Vec3, up: Option<Vec3>) -> Result<Vec3>;

    /// Re-seat the camera on a new eye, target and up
    fn reset_view(&mut self, position: Vec3, target: Vec3, up: Vec3) -> Result<()>;

    fn handle_input(&mut self, event: &InputEvent, canvas: &dyn CanvasContext) -> Result<()>;

    /// Start a timed turn about `axis`. Returns false when the request was dropped.
    fn rotate_with_animation(&mut self, axis: Vec3, angle: f32, duration_ms: f32) -> Result<bool>;

    fn interaction_kind(&self) -> InteractionKind;

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target(), self.basis().up)
    }

    fn perspective_projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov(), aspect_ratio, near, far)
    }

    /// State a replacement camera starts from
    fn seed(&self) -> CameraSeed {
        CameraSeed {
            position: self.position(),
            target: self.target(),
            up: self.basis().up,
            fov: self.fov(),
        }
    }
}
