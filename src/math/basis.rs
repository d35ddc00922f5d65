use glam::Vec3;

use crate::error::{CameraError, Result};

/// Below this length a cross product is treated as zero
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Right-handed orthonormal camera frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Basis {
    /// Frame looking from `position` towards `target`
    pub fn look_at(position: Vec3, target: Vec3, up_hint: Vec3) -> Result<Self> {
        let offset = target - position;
        if offset.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            return Err(CameraError::CoincidentTarget { position });
        }
        Self::from_front(offset, up_hint)
    }

    /// Frame with an explicit viewing direction.
    ///
    /// `right = front × up_hint` and `up = right × front`, so the returned `up`
    /// is the component of `up_hint` orthogonal to `front`.
    pub fn from_front(front: Vec3, up_hint: Vec3) -> Result<Self> {
        let front = front.normalize_or_zero();
        if front == Vec3::ZERO {
            return Err(CameraError::DegenerateBasis {
                front,
                up: up_hint,
            });
        }

        let right = front.cross(up_hint);
        if right.length() < DEGENERATE_EPSILON {
            return Err(CameraError::DegenerateBasis {
                front,
                up: up_hint,
            });
        }
        let right = right.normalize();
        let up = right.cross(front).normalize();

        Ok(Self { front, up, right })
    }

    /// Rebuild the frame around a new front, using the current up as hint.
    ///
    /// Keeps the previous frame if the new front is unusable, so a rotation
    /// can never leave NaN in the basis.
    pub fn reorthogonalized(self, front: Vec3) -> Self {
        Self::from_front(front, self.up)
            .or_else(|_| Self::from_front(front, -self.front))
            .unwrap_or(self)
    }

    /// Unit length and pairwise orthogonal within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.front)
            && unit(self.up)
            && unit(self.right)
            && self.front.dot(self.up).abs() <= tolerance
            && self.front.dot(self.right).abs() <= tolerance
            && self.up.dot(self.right).abs() <= tolerance
    }
}
