use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Offset from a look-at point as azimuth, elevation and radius.
///
/// `theta` is measured from +Z towards +X, `phi` from the XZ plane towards +Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalCoordinate {
    pub theta: f32,
    pub phi: f32,
    pub r: f32,
}

impl SphericalCoordinate {
    pub const fn new(theta: f32, phi: f32, r: f32) -> Self {
        Self { theta, phi, r }
    }

    /// Unit direction of increasing `phi`, always orthogonal to the offset.
    /// Points downwards once `phi` passes a pole.
    pub fn up_tangent(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(-sin_phi * sin_theta, cos_phi, -sin_phi * cos_theta)
    }
}

pub fn cart2sph(offset: Vec3) -> SphericalCoordinate {
    SphericalCoordinate {
        theta: offset.x.atan2(offset.z),
        phi: offset.y.atan2((offset.x * offset.x + offset.z * offset.z).sqrt()),
        r: offset.length(),
    }
}

pub fn sph2cart(coord: SphericalCoordinate) -> Vec3 {
    let (sin_theta, cos_theta) = coord.theta.sin_cos();
    let (sin_phi, cos_phi) = coord.phi.sin_cos();
    Vec3::new(
        coord.r * cos_phi * sin_theta,
        coord.r * sin_phi,
        coord.r * cos_phi * cos_theta,
    )
}

/// Map an angle into `(-π, π]`
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

pub fn add_wrapped(angle: f32, delta: f32) -> f32 {
    wrap_angle(angle + delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_stays_in_range() {
        for i in -40..40 {
            let angle = i as f32 * 0.37;
            let wrapped = wrap_angle(angle);
            assert!(wrapped > -PI && wrapped <= PI, "{} wrapped to {}", angle, wrapped);
        }
    }

    #[test]
    fn test_wrap_minus_pi_maps_to_pi() {
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_add_wrapped_crosses_pi() {
        let result = add_wrapped(3.0, 1.0);
        assert!((result - (4.0 - TAU)).abs() < 1e-5);
    }

    #[test]
    fn test_up_tangent_orthogonal_to_offset() {
        let coord = SphericalCoordinate::new(0.9, 1.2, 3.0);
        let tangent = coord.up_tangent();
        assert!(tangent.dot(sph2cart(coord)).abs() < 1e-5);
        assert!((tangent.length() - 1.0).abs() < 1e-6);

        let past_pole = SphericalCoordinate::new(0.0, 2.0, 1.0);
        assert!(past_pole.up_tangent().y < 0.0);
    }

    #[test]
    fn test_axis_offsets() {
        let coord = cart2sph(Vec3::new(0.0, 0.0, 4.0));
        assert!(coord.theta.abs() < 1e-6);
        assert!(coord.phi.abs() < 1e-6);
        assert!((coord.r - 4.0).abs() < 1e-6);

        let up = cart2sph(Vec3::new(0.0, 2.0, 0.0));
        assert!((up.phi - PI / 2.0).abs() < 1e-6);
    }
}
