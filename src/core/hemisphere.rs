use glam::Vec3;

use super::window::Dimensions;
use crate::error::Result;

/// Squared radius where the sphere hands over to the hyperbolic sheet
const SHEET_THRESHOLD: f32 = 0.5;
/// Below this the pointer did not move far enough to define an axis
const MIN_AXIS_LENGTH: f32 = 1e-6;

/// Project a pixel onto the virtual hemisphere facing the viewer.
///
/// The result is in screen frame (x right, y up, z towards the viewer) and
/// unit length. Inside radius √0.5 the point lies on the sphere, outside it
/// on the sheet `z = 0.5 / d`, which meets the sphere without a seam.
pub fn project(x: f32, y: f32, dims: Dimensions) -> Result<Vec3> {
    let radius = dims.hemisphere_radius()?;
    let (cx, cy) = dims.center();
    let px = (x - cx) / radius;
    let py = (cy - y) / radius;

    let d2 = px * px + py * py;
    let pz = if d2 <= SHEET_THRESHOLD {
        (1.0 - d2).sqrt()
    } else {
        SHEET_THRESHOLD / d2.sqrt()
    };
    Ok(Vec3::new(px, py, pz).normalize())
}

/// Axis and angle carrying `from` onto `to`, `None` for a degenerate drag
pub fn drag_rotation(from: Vec3, to: Vec3) -> Option<(Vec3, f32)> {
    let axis = from.cross(to);
    if axis.length() < MIN_AXIS_LENGTH {
        return None;
    }
    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    Some((axis.normalize(), angle))
}
