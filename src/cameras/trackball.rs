use glam::{Quat, Vec2, Vec3};

use crate::camera::{CameraSeed, NavigationMode};
use crate::config::NavigationConfig;
use crate::core::hemisphere;
use crate::core::{
    Animation, CanvasContext, Dimensions, InputEvent, Interaction, InteractionKind, Key, Orbit,
};
use crate::error::Result;
use crate::math::{axis_angle, conjugate_point, Basis};
use crate::traits::Camera;

/// Rotation gesture anchored at pointer-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackballDrag {
    /// Hemisphere point at gesture start, screen frame
    pub start: Vec3,
    /// Latest hemisphere point, screen frame
    pub current: Vec3,
    /// World-space axis of the rotation since gesture start
    pub axis: Vec3,
    pub initial_orientation: Quat,
    pub initial_offset: Vec3,
}

/// Arcball superset with velocity keys, panning and clamped dolly.
///
/// A drag always measures from where it started, so returning the pointer
/// to its start restores the original view.
#[derive(Debug, Clone)]
pub struct TrackballCamera {
    orbit: Orbit,
    fov: f32,
    config: NavigationConfig,
    interaction: Interaction<TrackballDrag>,
    clock_ms: f64,
}

impl TrackballCamera {
    /// An eye closer than `min_distance` to the center is pushed back along
    /// the line of sight.
    pub fn new(position: Vec3, center: Vec3, up: Vec3, config: &NavigationConfig) -> Result<Self> {
        let mut orbit = Orbit::new(position, center, up)?;
        orbit.dolly_clamped(0.0, config.min_distance);
        Ok(Self {
            orbit,
            fov: config.fov(),
            config: config.clone(),
            interaction: Interaction::Idle,
            clock_ms: 0.0,
        })
    }

    pub fn from_seed(seed: CameraSeed, config: &NavigationConfig) -> Result<Self> {
        let mut camera = Self::new(seed.position, seed.target, seed.up, config)?;
        camera.fov = seed.fov;
        Ok(camera)
    }

    pub fn center(&self) -> Vec3 {
        self.orbit.target
    }

    pub fn min_distance(&self) -> f32 {
        self.config.min_distance
    }

    pub fn interaction(&self) -> &Interaction<TrackballDrag> {
        &self.interaction
    }

    pub fn rotate(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        self.orbit.rotate(axis, angle)
    }

    /// Move center and eye together across the view plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.orbit.pan(dx, dy);
    }

    /// Positive backs away; the eye stops `min_distance` in front of the center
    pub fn dolly(&mut self, amount: f32) {
        self.orbit.dolly_clamped(amount, self.config.min_distance);
    }

    /// World-space axis and angle of the current gesture, measured from its start
    pub fn drag_rotation(&self) -> Result<Option<(Vec3, f32)>> {
        match &self.interaction {
            Interaction::Rotating(drag) => Ok(hemisphere::drag_rotation(drag.start, drag.current)
                .map(|(axis, angle)| (drag.initial_orientation * axis, angle))),
            other => Err(other.mismatch("drag_rotation", InteractionKind::Rotating)),
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32, shift: bool, dims: Dimensions) -> Result<()> {
        if shift {
            self.interaction = Interaction::Panning {
                last: Vec2::new(x, y),
            };
            return Ok(());
        }
        let start = hemisphere::project(x, y, dims)?;
        self.interaction = Interaction::Rotating(TrackballDrag {
            start,
            current: start,
            axis: Vec3::ZERO,
            initial_orientation: self.orbit.orientation(),
            initial_offset: self.orbit.offset(),
        });
        Ok(())
    }

    fn pointer_move(&mut self, x: f32, y: f32, dims: Dimensions) -> Result<()> {
        let pointer = Vec2::new(x, y);
        match self.interaction {
            Interaction::Rotating(mut drag) => {
                drag.current = hemisphere::project(x, y, dims)?;
                self.interaction = Interaction::Rotating(drag);

                let (orientation, offset) = match self.drag_rotation()? {
                    Some((axis, angle)) => {
                        let q = axis_angle(axis, angle)?;
                        drag.axis = axis;
                        self.interaction = Interaction::Rotating(drag);
                        (
                            q.conjugate() * drag.initial_orientation,
                            conjugate_point(q, drag.initial_offset),
                        )
                    }
                    None => (drag.initial_orientation, drag.initial_offset),
                };
                self.orbit.set_pose(orientation, offset);
            }
            Interaction::Panning { last } => {
                let delta = pointer - last;
                self.interaction = Interaction::Panning { last: pointer };
                let speed = self.config.pan_speed;
                self.pan(-delta.x * speed, delta.y * speed);
            }
            Interaction::Idle
            | Interaction::RotatingVelocity { .. }
            | Interaction::PanningVelocity { .. }
            | Interaction::Animating(_) => {}
        }
        Ok(())
    }

    fn key_down(&mut self, key: Key) {
        let basis = self.orbit.basis;
        let turn = self.config.key_rotation_speed;
        let slide = self.config.key_pan_speed;
        let next = match key {
            Key::W => Interaction::RotatingVelocity { axis: basis.right, speed: turn },
            Key::S => Interaction::RotatingVelocity { axis: basis.right, speed: -turn },
            Key::A => Interaction::RotatingVelocity { axis: basis.up, speed: turn },
            Key::D => Interaction::RotatingVelocity { axis: basis.up, speed: -turn },
            Key::ArrowUp => Interaction::PanningVelocity { direction: basis.up, speed: slide },
            Key::ArrowDown => Interaction::PanningVelocity { direction: -basis.up, speed: slide },
            Key::ArrowLeft => Interaction::PanningVelocity { direction: -basis.right, speed: slide },
            Key::ArrowRight => Interaction::PanningVelocity { direction: basis.right, speed: slide },
            Key::Space | Key::Escape | Key::Digit(_) | Key::Other => return,
        };
        self.interaction = next;
    }
}

impl Camera for TrackballCamera {
    fn mode(&self) -> NavigationMode {
        NavigationMode::Trackball
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
        let seconds = dt_millis / 1000.0;
        match self.interaction {
            Interaction::RotatingVelocity { axis, speed } => {
                if let Err(e) = self.rotate(axis, speed * seconds) {
                    log::error!("trackball velocity rotation failed: {}", e);
                }
            }
            Interaction::PanningVelocity { direction, speed } => {
                self.orbit.translate(direction * speed * seconds);
            }
            Interaction::Animating(_) => {
                if let Some((axis, angle)) = self.interaction.step_animation(self.clock_ms, dt_millis) {
                    if let Err(e) = self.rotate(axis, angle) {
                        log::error!("trackball animation step failed: {}", e);
                    }
                }
            }
            Interaction::Idle | Interaction::Rotating(_) | Interaction::Panning { .. } => {}
        }
        log::trace!(
            "trackball {} position={:?}",
            self.interaction.kind().name(),
            self.orbit.position
        );
    }

    fn move_to(&mut self, position: Vec3, up: Option<Vec3>) -> Result<Vec3> {
        let up = up.unwrap_or(self.orbit.basis.up);
        self.reset_view(position, self.orbit.target, up)?;
        Ok(self.orbit.position)
    }

    fn reset_view(&mut self, position: Vec3, target: Vec3, up: Vec3) -> Result<()> {
        let mut orbit = Orbit::new(position, target, up)?;
        orbit.dolly_clamped(0.0, self.config.min_distance);
        self.orbit = orbit;
        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent, canvas: &dyn CanvasContext) -> Result<()> {
        match *event {
            InputEvent::FocusLost => self.interaction.cancel(),
            InputEvent::FocusGained => {}
            _ if !self.interaction.accepts_input(event.name()) => {}
            InputEvent::PointerDown { x, y, shift } => {
                self.pointer_down(x, y, shift, canvas.dimensions())?
            }
            InputEvent::PointerMove { x, y, .. } => self.pointer_move(x, y, canvas.dimensions())?,
            InputEvent::PointerUp { .. } => self.interaction.end_drag(),
            InputEvent::Wheel { delta } => self.dolly(delta * self.config.dolly_speed),
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(_) => self.interaction.end_velocity(),
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
