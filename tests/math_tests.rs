use glam::Vec3;
use scene_nav::core::Orbit;
use scene_nav::math::{cart2sph, sph2cart, wrap_angle, Basis, SphericalCoordinate};
use std::f32::consts::TAU;

const TOLERANCE: f32 = 1e-4;

fn assert_orthonormal(basis: &Basis, step: usize) {
    assert!(
        basis.is_orthonormal(TOLERANCE),
        "basis drifted after step {}: {:?}",
        step,
        basis
    );
}

#[cfg(test)]
mod basis_tests {
    use super::*;

    #[test]
    fn test_long_rotation_sequence_stays_orthonormal() {
        let mut orbit = Orbit::new(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::Y).unwrap();
        let axes = [
            Vec3::X,
            Vec3::new(0.3, 0.8, -0.5).normalize(),
            Vec3::Y,
            Vec3::new(-0.7, 0.1, 0.7).normalize(),
            Vec3::Z,
        ];

        for step in 0..2000 {
            let axis = axes[step % axes.len()];
            let angle = 0.013 * (step % 17) as f32 - 0.1;
            orbit.rotate(axis, angle).unwrap();
            assert_orthonormal(&orbit.basis, step);
        }
        assert!((orbit.distance() - 4.0).abs() < 1e-2);
    }

    #[test]
    fn test_front_points_at_target_after_rotation() {
        let target = Vec3::new(2.0, -1.0, 3.0);
        let mut orbit = Orbit::new(Vec3::new(2.0, 4.0, 10.0), target, Vec3::Y).unwrap();
        orbit.rotate(Vec3::new(1.0, 1.0, 1.0), 1.1).unwrap();

        let expected = (target - orbit.position).normalize();
        assert!((orbit.basis.front - expected).length() < 1e-5);
    }

    #[test]
    fn test_right_handed() {
        let basis = Basis::look_at(Vec3::new(5.0, 2.0, -3.0), Vec3::ZERO, Vec3::Y).unwrap();
        assert!((basis.right.cross(basis.up) + basis.front).length() < 1e-5);
    }
}

#[cfg(test)]
mod spherical_tests {
    use super::*;

    #[test]
    fn test_spherical_round_trip() {
        let samples = [
            SphericalCoordinate::new(0.0, 0.0, 1.0),
            SphericalCoordinate::new(3.0, 0.4, 3.0),
            SphericalCoordinate::new(-2.5, -1.2, 0.5),
            SphericalCoordinate::new(1.3, 1.5, 12.0),
        ];

        for coord in samples {
            let back = cart2sph(sph2cart(coord));
            assert!((back.theta - coord.theta).abs() < TOLERANCE, "{:?} -> {:?}", coord, back);
            assert!((back.phi - coord.phi).abs() < TOLERANCE, "{:?} -> {:?}", coord, back);
            assert!((back.r - coord.r).abs() < TOLERANCE, "{:?} -> {:?}", coord, back);
        }
    }

    #[test]
    fn test_wrap_is_periodic() {
        for i in -20..20 {
            let theta = i as f32 * 0.29;
            assert!((wrap_angle(theta + TAU) - wrap_angle(theta)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_wrap_past_pi() {
        assert!((wrap_angle(3.0 + 1.0) - (4.0 - TAU)).abs() < 1e-5);
        assert!((wrap_angle(3.0 + TAU) - 3.0).abs() < 1e-5);
    }
}
