mod basis;
mod rotation;
mod spherical;

pub use basis::Basis;
pub use rotation::{axis_angle, conjugate_point, rotate_point};
pub use spherical::{add_wrapped, cart2sph, sph2cart, wrap_angle, SphericalCoordinate};
