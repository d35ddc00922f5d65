use glam::{Mat3, Mat4, Quat, Vec3};

use crate::error::Result;
use crate::math::{axis_angle, conjugate_point, Basis};

/// Eye, look-at point and the frame between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub position: Vec3,
    pub target: Vec3,
    pub basis: Basis,
}

impl Orbit {
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        Ok(Self {
            position,
            target,
            basis: Basis::look_at(position, target, up)?,
        })
    }

    /// Eye relative to the target
    pub fn offset(&self) -> Vec3 {
        self.position - self.target
    }

    pub fn distance(&self) -> f32 {
        self.offset().length()
    }

    /// Turn eye and frame about the target by `q⁻¹ p q`, then rebuild the frame
    /// from the new line of sight.
    pub fn rotate(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        let q = axis_angle(axis, angle)?;
        self.position = self.target + conjugate_point(q, self.offset());

        let turned = Basis {
            front: conjugate_point(q, self.basis.front),
            up: conjugate_point(q, self.basis.up),
            right: conjugate_point(q, self.basis.right),
        };
        self.basis = turned.reorthogonalized(self.target - self.position);
        Ok(())
    }

    /// Frame as a rotation of the canonical (X right, Y up, -Z front) axes
    pub fn orientation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(
            self.basis.right,
            self.basis.up,
            -self.basis.front,
        ))
        .normalize()
    }

    /// Place the eye at `target + offset` with the frame given by `orientation`
    pub fn set_pose(&mut self, orientation: Quat, offset: Vec3) {
        self.position = self.target + offset;
        let turned = Basis {
            front: orientation * Vec3::NEG_Z,
            up: orientation * Vec3::Y,
            right: orientation * Vec3::X,
        };
        self.basis = turned.reorthogonalized(self.target - self.position);
    }

    /// Move eye and target together
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Translate across the view plane
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.translate(self.basis.right * dx + self.basis.up * dy);
    }

    /// Move along the line of sight, positive backs away from the target.
    ///
    /// The eye never gets closer than `min_distance` to the target, measured
    /// along `front`.
    pub fn dolly_clamped(&mut self, amount: f32, min_distance: f32) {
        self.position -= self.basis.front * amount;
        let standoff = (self.target - self.position).dot(self.basis.front);
        if standoff < min_distance {
            self.position = self.target - self.basis.front * min_distance;
        }
    }

    /// Screen-frame vector (x right, y up, z towards viewer) in world space
    pub fn screen_to_world(&self, v: Vec3) -> Vec3 {
        self.basis.right * v.x + self.basis.up * v.y - self.basis.front * v.z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.basis.up)
    }
}
