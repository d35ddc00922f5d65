use glam::{Vec2, Vec3};

use crate::error::{CameraError, Result};

/// Tag of the active interaction, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Idle,
    Rotating,
    Panning,
    RotatingVelocity,
    PanningVelocity,
    Animating,
}

impl InteractionKind {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionKind::Idle => "idle",
            InteractionKind::Rotating => "rotating",
            InteractionKind::Panning => "panning",
            InteractionKind::RotatingVelocity => "rotating-velocity",
            InteractionKind::PanningVelocity => "panning-velocity",
            InteractionKind::Animating => "animating",
        }
    }
}

/// Per-camera interaction state.
///
/// `R` is the model-specific payload of a pointer rotation gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction<R> {
    Idle,
    Rotating(R),
    /// Last pointer position in pixels
    Panning { last: Vec2 },
    /// Radians per second about a fixed axis, until key-up
    RotatingVelocity { axis: Vec3, speed: f32 },
    /// Units per second along a fixed direction, until key-up
    PanningVelocity { direction: Vec3, speed: f32 },
    Animating(Animation),
}

impl<R> Default for Interaction<R> {
    fn default() -> Self {
        Interaction::Idle
    }
}

impl<R> Interaction<R> {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Interaction::Idle => InteractionKind::Idle,
            Interaction::Rotating(_) => InteractionKind::Rotating,
            Interaction::Panning { .. } => InteractionKind::Panning,
            Interaction::RotatingVelocity { .. } => InteractionKind::RotatingVelocity,
            Interaction::PanningVelocity { .. } => InteractionKind::PanningVelocity,
            Interaction::Animating(_) => InteractionKind::Animating,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Interaction::Animating(_))
    }

    pub fn animation(&self) -> Option<&Animation> {
        match self {
            Interaction::Animating(animation) => Some(animation),
            _ => None,
        }
    }

    /// Drops an input while an animation owns the camera.
    ///
    /// Returns true when the handler may act on `event_name`.
    pub fn accepts_input(&self, event_name: &str) -> bool {
        if self.is_animating() {
            log::debug!("ignoring {} while animating", event_name);
            return false;
        }
        true
    }

    /// Focus loss: everything except an animation falls back to idle
    pub fn cancel(&mut self) {
        if !self.is_animating() {
            *self = Interaction::Idle;
        }
    }

    /// Pointer-up: ends a drag gesture
    pub fn end_drag(&mut self) {
        if matches!(self, Interaction::Rotating(_) | Interaction::Panning { .. }) {
            *self = Interaction::Idle;
        }
    }

    /// Key-up: ends a velocity state
    pub fn end_velocity(&mut self) {
        if matches!(
            self,
            Interaction::RotatingVelocity { .. } | Interaction::PanningVelocity { .. }
        ) {
            *self = Interaction::Idle;
        }
    }

    /// Error for a helper that only makes sense inside `expected`
    pub fn mismatch(&self, operation: &'static str, expected: InteractionKind) -> CameraError {
        CameraError::InteractionMismatch {
            operation,
            expected: expected.name(),
            actual: self.kind().name(),
        }
    }

    /// Install an animation unless one is already running.
    ///
    /// Returns false when the request was dropped.
    pub fn start_animation(&mut self, animation: Animation) -> bool {
        if let Interaction::Animating(active) = self {
            log::warn!(
                "animation already running ({:.3} of {:.3} rad), dropping new request",
                active.current_angle(),
                active.target_angle()
            );
            return false;
        }
        *self = Interaction::Animating(animation);
        true
    }

    /// Advance an active animation by one frame.
    ///
    /// Returns the axis and angle to turn this frame. The state drops back
    /// to idle once the clock passes the deadline or the target angle is hit.
    pub fn step_animation(&mut self, now_ms: f64, dt_ms: f32) -> Option<(Vec3, f32)> {
        let Interaction::Animating(animation) = self else {
            return None;
        };
        let step = animation.advance(dt_ms);
        let axis = animation.axis();
        if animation.is_finished(now_ms) {
            log::debug!("animation finished at {:.3} rad", animation.current_angle());
            *self = Interaction::Idle;
        }
        Some((axis, step))
    }
}

/// Timed rotation at constant angular velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    start_ms: f64,
    duration_ms: f32,
    /// Radians per millisecond
    angular_velocity: f32,
    axis: Vec3,
    current_angle: f32,
    target_angle: f32,
}

impl Animation {
    /// Turn `angle` radians about `axis` over `duration_ms`, starting at `now_ms`.
    ///
    /// A negative angle becomes a positive one about the flipped axis.
    pub fn new(axis: Vec3, angle: f32, duration_ms: f32, now_ms: f64) -> Result<Self> {
        if !(duration_ms > 0.0) {
            return Err(CameraError::InvalidDuration(duration_ms));
        }
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return Err(CameraError::ZeroAxis);
        }
        let (axis, target_angle) = if angle < 0.0 { (-axis, -angle) } else { (axis, angle) };

        Ok(Self {
            start_ms: now_ms,
            duration_ms,
            angular_velocity: target_angle / duration_ms,
            axis,
            current_angle: 0.0,
            target_angle,
        })
    }

    /// Angle for a frame of `dt_ms`, clamped so the total never overshoots
    fn advance(&mut self, dt_ms: f32) -> f32 {
        let remaining = (self.target_angle - self.current_angle).max(0.0);
        let step = (self.angular_velocity * dt_ms.max(0.0)).min(remaining);
        self.current_angle += step;
        step
    }

    fn is_finished(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.duration_ms as f64 || self.current_angle >= self.target_angle
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }
}
