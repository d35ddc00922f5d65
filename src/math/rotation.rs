use glam::{Quat, Vec3};

use crate::error::{CameraError, Result};

/// Unit quaternion `(sin(θ/2)·axis, cos(θ/2))`
pub fn axis_angle(axis: Vec3, angle: f32) -> Result<Quat> {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO {
        return Err(CameraError::ZeroAxis);
    }
    let (sin_half, cos_half) = (angle * 0.5).sin_cos();
    let v = axis * sin_half;
    Ok(Quat::from_xyzw(v.x, v.y, v.z, cos_half))
}

/// Conjugate `p` as a pure quaternion: `q⁻¹ (p, 0) q`.
///
/// Turns `p` by `-θ` about the axis, which makes the scene appear to follow
/// the pointer when applied to the eye.
pub fn conjugate_point(q: Quat, p: Vec3) -> Vec3 {
    let pure = Quat::from_xyzw(p.x, p.y, p.z, 0.0);
    let turned = q.conjugate() * pure * q;
    Vec3::new(turned.x, turned.y, turned.z)
}

pub fn rotate_point(point: Vec3, axis: Vec3, angle: f32) -> Result<Vec3> {
    Ok(conjugate_point(axis_angle(axis, angle)?, point))
}
