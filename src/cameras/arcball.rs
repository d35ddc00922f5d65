use glam::Vec3;

use crate::camera::{CameraSeed, NavigationMode};
use crate::core::hemisphere;
use crate::core::{
    Animation, CanvasContext, Dimensions, InputEvent, Interaction, InteractionKind, Orbit,
};
use crate::error::Result;
use crate::math::Basis;
use crate::traits::Camera;

/// Incremental drag state, hemisphere points in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcballDrag {
    pub last: Vec3,
    pub current: Vec3,
    /// Axis of the most recent step, zero before the first move
    pub axis: Vec3,
}

/// Virtual-sphere rotation about a fixed target.
///
/// Every pointer sample turns the camera by the arc between the previous
/// and current hemisphere points, both read through the current frame.
#[derive(Debug, Clone)]
pub struct ArcballCamera {
    orbit: Orbit,
    fov: f32,
    interaction: Interaction<ArcballDrag>,
    clock_ms: f64,
}

impl ArcballCamera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fov: f32) -> Result<Self> {
        Ok(Self {
            orbit: Orbit::new(position, target, up)?,
            fov,
            interaction: Interaction::Idle,
            clock_ms: 0.0,
        })
    }

    pub fn from_seed(seed: CameraSeed) -> Result<Self> {
        Self::new(seed.position, seed.target, seed.up, seed.fov)
    }

    pub fn interaction(&self) -> &Interaction<ArcballDrag> {
        &self.interaction
    }

    /// Turn eye and frame by `theta` about `axis` through the target
    pub fn rotate(&mut self, axis: Vec3, theta: f32) -> Result<()> {
        self.orbit.rotate(axis, theta)
    }

    /// Axis and angle between the last and current drag samples.
    ///
    /// Only meaningful mid-drag; any other state is a caller bug.
    pub fn drag_rotation(&self) -> Result<Option<(Vec3, f32)>> {
        match &self.interaction {
            Interaction::Rotating(drag) => Ok(hemisphere::drag_rotation(drag.last, drag.current)),
            other => Err(other.mismatch("drag_rotation", InteractionKind::Rotating)),
        }
    }

    fn hemisphere_point(&self, x: f32, y: f32, dims: Dimensions) -> Result<Vec3> {
        Ok(self.orbit.screen_to_world(hemisphere::project(x, y, dims)?))
    }

    fn pointer_down(&mut self, x: f32, y: f32, dims: Dimensions) -> Result<()> {
        let point = self.hemisphere_point(x, y, dims)?;
        self.interaction = Interaction::Rotating(ArcballDrag {
            last: point,
            current: point,
            axis: Vec3::ZERO,
        });
        Ok(())
    }

    fn pointer_move(&mut self, x: f32, y: f32, dims: Dimensions) -> Result<()> {
        if !matches!(self.interaction, Interaction::Rotating(_)) {
            return Ok(());
        }
        let current = self.hemisphere_point(x, y, dims)?;
        if let Interaction::Rotating(drag) = &mut self.interaction {
            drag.current = current;
        }

        if let Some((axis, angle)) = self.drag_rotation()? {
            self.rotate(axis, angle)?;
            // the frame moved, so the same pixel now maps to a new world point
            let last = self.hemisphere_point(x, y, dims)?;
            if let Interaction::Rotating(drag) = &mut self.interaction {
                drag.axis = axis;
                drag.last = last;
                drag.current = last;
            }
        }
        Ok(())
    }
}

impl Camera for ArcballCamera {
    fn mode(&self) -> NavigationMode {
        NavigationMode::Arcball
    }

    fn position(&self) -> Vec3 {
        self.orbit.position
    }

    fn target(&self) -> Vec3 {
        self.orbit.target
    }

    fn basis(&self) -> Basis {
        self.orbit.basis
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn update(&mut self, dt_millis: f32) {
        self.clock_ms += dt_millis as f64;
        if let Some((axis, angle)) = self.interaction.step_animation(self.clock_ms, dt_millis) {
            if let Err(e) = self.rotate(axis, angle) {
                log::error!("arcball animation step failed: {}", e);
            }
        }
    }

    fn move_to(&mut self, position: Vec3, up: Option<Vec3>) -> Result<Vec3> {
        let up = up.unwrap_or(self.orbit.basis.up);
        self.reset_view(position, self.orbit.target, up)?;
        Ok(self.orbit.position)
    }

    fn reset_view(&mut self, position: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        self.orbit = Orbit::new(position, target, up)?;
        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent, canvas: &dyn CanvasContext) -> Result<()> {
        match *event {
            InputEvent::FocusLost => self.interaction.cancel(),
            InputEvent::FocusGained => {}
            _ if !self.interaction.accepts_input(event.name()) => {}
            InputEvent::PointerDown { x, y, .. } => self.pointer_down(x, y, canvas.dimensions())?,
            InputEvent::PointerMove { x, y, .. } => self.pointer_move(x, y, canvas.dimensions())?,
            InputEvent::PointerUp { .. } => self.interaction.end_drag(),
            InputEvent::Wheel { .. } | InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {}
        }
        Ok(())
    }

    fn rotate_with_animation(&mut self, axis: Vec3, angle: f32, duration_ms: f32) -> Result<bool> {
        let animation = Animation::new(axis, angle, duration_ms, self.clock_ms)?;
        Ok(self.interaction.start_animation(animation))
    }

    fn interaction_kind(&self) -> InteractionKind {
        self.interaction.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CameraError;

    fn camera() -> ArcballCamera {
        ArcballCamera::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::Y, 0.8).unwrap()
    }

    #[test]
    fn test_drag_rotation_outside_drag_is_error() {
        let camera = camera();
        assert_eq!(
            camera.drag_rotation(),
            Err(CameraError::InteractionMismatch {
                operation: "drag_rotation",
                expected: "rotating",
                actual: "idle",
            })
        );
    }

    #[test]
    fn test_small_horizontal_drag_turns_about_up() {
        let mut camera = camera();
        let dims = Dimensions::new(200, 200);
        camera.handle_input(&InputEvent::PointerDown { x: 100.0, y: 100.0, shift: false }, &dims).unwrap();
        camera.handle_input(&InputEvent::PointerMove { x: 110.0, y: 100.0, shift: false }, &dims).unwrap();

        let Interaction::Rotating(drag) = camera.interaction() else {
            panic!("expected rotating, got {:?}", camera.interaction_kind());
        };
        assert!((drag.axis - Vec3::Y).length() < 1e-4, "axis {:?}", drag.axis);
        // scene follows the pointer, so the eye swings the other way
        assert!(camera.position().x < 0.0);
        assert!((camera.position().length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_canvas_rejected_on_pointer_down() {
        let mut camera = camera();
        let err = camera
            .handle_input(&InputEvent::PointerDown { x: 0.0, y: 0.0, shift: false }, &Dimensions::new(0, 0))
            .unwrap_err();
        assert_eq!(err, CameraError::InvalidDimensions { width: 0, height: 0 });
        assert_eq!(camera.interaction_kind(), InteractionKind::Idle);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut camera = camera();
        let dims = Dimensions::new(200, 200);
        camera.handle_input(&InputEvent::PointerMove { x: 10.0, y: 10.0, shift: false }, &dims).unwrap();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 4.0));
    }
}
