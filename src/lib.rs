pub mod camera;
pub mod cameras;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod traits;
pub mod types;

pub use camera::{build_camera, CameraSeed, NavigationMode, Navigator};
pub use config::NavigationConfig;
pub use error::CameraError;
pub use traits::Camera;
