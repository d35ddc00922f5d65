// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::camera::NavigationMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-nav")]
#[command(about = "Interactive 3D viewpoint navigation", long_about = None)]
pub struct Cli {
    /// Navigation model to start with
    #[arg(long, value_enum, default_value = "trackball")]
    pub mode: NavigationMode,

    /// JSON file with navigation tuning
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Vertical field of view in degrees, overrides the config file
    #[arg(long)]
    pub fov: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["scene-nav"]);
        assert_eq!(cli.mode, NavigationMode::Trackball);
        assert!(cli.config.is_none());
        assert!(cli.fov.is_none());
    }

    #[test]
    fn test_mode_and_fov() {
        let cli = Cli::parse_from(["scene-nav", "--mode", "spherical", "--fov", "60"]);
        assert_eq!(cli.mode, NavigationMode::Spherical);
        assert_eq!(cli.fov, Some(60.0));
    }
}
