mod arcball;
mod fixed;
mod spherical;
mod trackball;

pub use arcball::{ArcballCamera, ArcballDrag};
pub use fixed::{FixedCamera, ScriptedPath, Waypoint};
pub use spherical::SphericalCamera;
pub use trackball::{TrackballCamera, TrackballDrag};
