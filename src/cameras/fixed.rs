use glam::Vec3;

use crate::camera::{CameraSeed, NavigationMode};
use crate::core::{CanvasContext, InputEvent, InteractionKind};
use crate::error::Result;
use crate::math::Basis;
use crate::traits::Camera;

/// Timed position keyframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub time_ms: f32,
    pub position: Vec3,
}

impl Waypoint {
    pub const fn new(time_ms: f32, position: Vec3) -> Self {
        Self { time_ms, position }
    }
}

/// Piecewise-linear eye path for non-interactive playback
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPath {
    waypoints: Vec<Waypoint>,
    looping: bool,
    elapsed_ms: f32,
}

impl ScriptedPath {
    pub fn new(mut waypoints: Vec<Waypoint>, looping: bool) -> Self {
        waypoints.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));
        Self {
            waypoints,
            looping,
            elapsed_ms: 0.0,
        }
    }

    fn duration_ms(&self) -> f32 {
        self.waypoints.last().map_or(0.0, |w| w.time_ms)
    }

    pub fn is_finished(&self) -> bool {
        !self.looping && self.elapsed_ms >= self.duration_ms()
    }

    /// Advance playback and return the eye position for the new time
    pub fn advance(&mut self, dt_ms: f32) -> Option<Vec3> {
        let duration = self.duration_ms();
        self.elapsed_ms += dt_ms.max(0.0);
        if self.looping && duration > 0.0 {
            self.elapsed_ms = self.elapsed_ms.rem_euclid(duration);
        }
        self.sample(self.elapsed_ms)
    }

    pub fn sample(&self, time_ms: f32) -> Option<Vec3> {
        let first = self.waypoints.first()?;
        if time_ms <= first.time_ms {
            return Some(first.position);
        }
        for pair in self.waypoints.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if time_ms <= b.time_ms {
                let span = b.time_ms - a.time_ms;
                if span <= 0.0 {
                    return Some(b.position);
                }
                return Some(a.position.lerp(b.position, (time_ms - a.time_ms) / span));
            }
        }
        self.waypoints.last().map(|w| w.position)
    }
}

/// Camera with no interaction, moved only by `move_to` or a scripted path
#[derive(Debug, Clone)]
pub struct FixedCamera {
    position: Vec3,
    basis: Basis,
    fov: f32,
    path: Option<ScriptedPath>,
}

impl FixedCamera {
    /// Frame built from an explicit viewing direction, not a target
    pub fn new(position: Vec3, front: Vec3, up: Vec3, fov: f32) -> Result<Self> {
        Ok(Self {
            position,
            basis: Basis::from_front(front, up)?,
            fov,
            path: None,
        })
    }

    pub fn from_seed(seed: CameraSeed) -> Result<Self> {
        Ok(Self {
            position: seed.position,
            basis: Basis::look_at(seed.position, seed.target, seed.up)?,
            fov: seed.fov,
            path: None,
        })
    }

    pub fn with_path(mut self, path: ScriptedPath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn path(&self) -> Option<&ScriptedPath> {
        self.path.as_ref()
    }
}

impl Camera for FixedCamera {
    fn mode(&self) -> NavigationMode {
        NavigationMode::Fixed
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn target(&self) -> Vec3 {
        self.position + self.basis.front
    }

    fn basis(&self) -> Basis {
        self.basis
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn update(&mut self, dt_millis: f32) {
        if let Some(position) = self.path.as_mut().and_then(|path| path.advance(dt_millis)) {
            self.position = position;
        }
    }

    fn move_to(&mut self, position: Vec3, up: Option<Vec3>) -> Result<Vec3> {
        if let Some(up) = up {
            self.basis = Basis::from_front(self.basis.front, up)?;
        }
        self.position = position;
        Ok(self.position)
    }

    fn reset_view(&mut self, position: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        self.basis = Basis::look_at(position, target, up)?;
        self.position = position;
        Ok(())
    }

    fn handle_input(&mut self, _event: &InputEvent, _canvas: &dyn CanvasContext) -> Result<()> {
        Ok(())
    }

    fn rotate_with_animation(&mut self, _axis: Vec3, _angle: f32, _duration_ms: f32) -> Result<bool> {
        log::warn!("fixed camera does not animate, dropping rotation request");
        Ok(false)
    }

    fn interaction_kind(&self) -> InteractionKind {
        InteractionKind::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CameraError;

    fn camera() -> FixedCamera {
        FixedCamera::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z, Vec3::Y, 0.8).unwrap()
    }

    #[test]
    fn test_move_to_keeps_orientation() {
        let mut camera = camera();
        let before = camera.basis();
        let position = camera.move_to(Vec3::new(3.0, 3.0, 3.0), None).unwrap();
        assert_eq!(position, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(camera.basis(), before);
        assert_eq!(camera.target(), position + Vec3::NEG_Z);
    }

    #[test]
    fn test_move_to_with_up_rebuilds_basis() {
        let mut camera = camera();
        camera.move_to(Vec3::ZERO, Some(Vec3::X)).unwrap();
        assert!((camera.basis().up - Vec3::X).length() < 1e-6);
        assert!(camera.basis().is_orthonormal(1e-6));

        let err = camera.move_to(Vec3::ZERO, Some(Vec3::Z)).unwrap_err();
        assert!(matches!(err, CameraError::DegenerateBasis { .. }));
    }

    #[test]
    fn test_scripted_path_interpolates() {
        let path = ScriptedPath::new(
            vec![
                Waypoint::new(1000.0, Vec3::new(10.0, 0.0, 0.0)),
                Waypoint::new(0.0, Vec3::ZERO),
            ],
            false,
        );
        let mut camera = camera().with_path(path);

        camera.update(250.0);
        assert!((camera.position() - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-5);

        camera.update(5000.0);
        assert_eq!(camera.position(), Vec3::new(10.0, 0.0, 0.0));
        assert!(camera.path().unwrap().is_finished());
    }

    #[test]
    fn test_looping_path_wraps() {
        let mut path = ScriptedPath::new(
            vec![Waypoint::new(0.0, Vec3::ZERO), Waypoint::new(100.0, Vec3::X * 4.0)],
            true,
        );
        let position = path.advance(150.0).unwrap();
        assert!((position - Vec3::X * 2.0).length() < 1e-5);
        assert!(!path.is_finished());
    }

    #[test]
    fn test_input_and_animation_ignored() {
        let mut camera = camera();
        let dims = crate::core::Dimensions::new(100, 100);
        camera.handle_input(&InputEvent::Wheel { delta: 3.0 }, &dims).unwrap();
        assert_eq!(camera.rotate_with_animation(Vec3::Y, 1.0, 100.0), Ok(false));
        assert_eq!(camera.position(), Vec3::new(0.0, 1.0, 5.0));
    }
}
