use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::camera::{CameraSeed, NavigationMode};
use crate::config::NavigationConfig;
use crate::core::{Animation, CanvasContext, InputEvent, Interaction, InteractionKind, Orbit};
use crate::error::Result;
use crate::math::{add_wrapped, cart2sph, sph2cart, Basis, SphericalCoordinate};
use crate::traits::Camera;

/// Orbit around a center point driven by azimuth/elevation deltas.
///
/// Pointer drags map pixel deltas to `(dtheta, dphi)`, shift-drags pan the
/// center and the wheel changes the radius. `phi` is not clamped, so the
/// camera can swing over a pole and come out upside down.
#[derive(Debug, Clone)]
pub struct SphericalCamera {
    orbit: Orbit,
    spherical: SphericalCoordinate,
    fov: f32,
    config: NavigationConfig,
    /// Rotating payload is the last pointer position in pixels
    interaction: Interaction<Vec2>,
    clock_ms: f64,
}

impl SphericalCamera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3, config: &NavigationConfig) -> Result<Self> {
        let orbit = Orbit::new(position, target, up)?;
        Ok(Self {
            spherical: cart2sph(orbit.offset()),
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

    pub fn spherical(&self) -> SphericalCoordinate {
        self.spherical
    }

    pub fn center(&self) -> Vec3 {
        self.orbit.target
    }

    pub fn interaction(&self) -> &Interaction<Vec2> {
        &self.interaction
    }

    /// Add to azimuth (wrapped into `(-π, π]`) and elevation (unwrapped)
    pub fn rotate(&mut self, dtheta: f32, dphi: f32) {
        self.spherical.theta = add_wrapped(self.spherical.theta, dtheta);
        self.spherical.phi += dphi;
        self.place_from_spherical();
    }

    /// Change the radius, never below the configured minimum
    pub fn dolly(&mut self, dr: f32) {
        self.spherical.r = (self.spherical.r + dr).max(self.config.min_radius);
        self.place_from_spherical();
    }

    /// Move the center across the view plane, radius unchanged
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.orbit.pan(dx, dy);
    }

    /// Turn the eye about the center by an arbitrary axis.
    ///
    /// `cart2sph` folds `phi` into `[-π/2, π/2]`; an upside-down frame is
    /// moved back onto the branch past the pole so later drags keep its roll.
    pub fn rotate_about(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        self.orbit.rotate(axis, angle)?;
        let mut spherical = cart2sph(self.orbit.offset());
        if self.orbit.basis.up.dot(spherical.up_tangent()) < 0.0 {
            spherical.phi = PI - spherical.phi;
            spherical.theta = add_wrapped(spherical.theta, PI);
        }
        self.spherical = spherical;
        Ok(())
    }

    fn place_from_spherical(&mut self) {
        self.orbit.position = self.orbit.target + sph2cart(self.spherical);
        let front = self.orbit.target - self.orbit.position;
        self.orbit.basis = Basis::from_front(front, self.spherical.up_tangent())
            .unwrap_or_else(|_| self.orbit.basis.reorthogonalized(front));
    }

    fn pointer_down(&mut self, x: f32, y: f32, shift: bool) {
        let last = Vec2::new(x, y);
        self.interaction = if shift {
            Interaction::Panning { last }
        } else {
            Interaction::Rotating(last)
        };
    }

    fn pointer_move(&mut self, x: f32, y: f32) {
        let current = Vec2::new(x, y);
        match self.interaction {
            Interaction::Rotating(last) => {
                let delta = current - last;
                self.interaction = Interaction::Rotating(current);
                let speed = self.config.rotate_speed;
                self.rotate(-delta.x * speed, delta.y * speed);
            }
            Interaction::Panning { last } => {
                let delta = current - last;
                self.interaction = Interaction::Panning { last: current };
                let speed = self.config.pan_speed;
                self.pan(-delta.x * speed, delta.y * speed);
            }
            Interaction::Idle
            | Interaction::RotatingVelocity { .. }
            | Interaction::PanningVelocity { .. }
            | Interaction::Animating(_) => {}
        }
    }
}

impl Camera for SphericalCamera {
    fn mode(&self) -> NavigationMode {
        NavigationMode::Spherical
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
            if let Err(e) = self.rotate_about(axis, angle) {
                log::error!("spherical animation step failed: {}", e);
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
        self.spherical = cart2sph(self.orbit.offset());
        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent, _canvas: &dyn CanvasContext) -> Result<()> {
        match *event {
            InputEvent::FocusLost => self.interaction.cancel(),
            InputEvent::FocusGained => {}
            _ if !self.interaction.accepts_input(event.name()) => {}
            InputEvent::PointerDown { x, y, shift } => self.pointer_down(x, y, shift),
            InputEvent::PointerMove { x, y, .. } => self.pointer_move(x, y),
            InputEvent::PointerUp { .. } => self.interaction.end_drag(),
            InputEvent::Wheel { delta } => self.dolly(delta * self.config.dolly_speed),
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {}
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
