use glam::Vec3;

use crate::cameras::{ArcballCamera, FixedCamera, SphericalCamera, TrackballCamera};
use crate::config::NavigationConfig;
use crate::core::{CanvasContext, InputEvent};
use crate::error::Result;
use crate::traits::Camera;
use crate::types::CameraUniform;

/// The closed set of navigation models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum NavigationMode {
    Fixed,
    Spherical,
    Arcball,
    Trackball,
}

impl NavigationMode {
    pub const ALL: [NavigationMode; 4] = [
        NavigationMode::Fixed,
        NavigationMode::Spherical,
        NavigationMode::Arcball,
        NavigationMode::Trackball,
    ];

    /// Number-row shortcut, 1-based
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(digit).checked_sub(1)?).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            NavigationMode::Fixed => "fixed",
            NavigationMode::Spherical => "spherical",
            NavigationMode::Arcball => "arcball",
            NavigationMode::Trackball => "trackball",
        }
    }
}

/// What a new camera inherits from the one it replaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSeed {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
}

impl CameraSeed {
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fov: f32) -> Self {
        Self {
            position,
            target,
            up,
            fov,
        }
    }
}

pub fn build_camera(
    mode: NavigationMode,
    seed: CameraSeed,
    config: &NavigationConfig,
) -> Result<Box<dyn Camera>> {
    Ok(match mode {
        NavigationMode::Fixed => Box::new(FixedCamera::from_seed(seed)?),
        NavigationMode::Spherical => Box::new(SphericalCamera::from_seed(seed, config)?),
        NavigationMode::Arcball => Box::new(ArcballCamera::from_seed(seed)?),
        NavigationMode::Trackball => Box::new(TrackballCamera::from_seed(seed, config)?),
    })
}

/// Owns the live camera and swaps models on request
pub struct Navigator {
    camera: Box<dyn Camera>,
    config: NavigationConfig,
}

impl Navigator {
    pub fn new(mode: NavigationMode, seed: CameraSeed, config: NavigationConfig) -> Result<Self> {
        Ok(Self {
            camera: build_camera(mode, seed, &config)?,
            config,
        })
    }

    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.camera.as_mut()
    }

    pub fn mode(&self) -> NavigationMode {
        self.camera.mode()
    }

    /// Replace the camera with a fresh one of `mode`, seeded from the current one
    pub fn switch_mode(&mut self, mode: NavigationMode) -> Result<()> {
        if mode == self.camera.mode() {
            return Ok(());
        }
        let seed = self.camera.seed();
        self.camera = build_camera(mode, seed, &self.config)?;
        log::debug!("switched navigation to {} at {:?}", mode.name(), seed.position);
        Ok(())
    }

    pub fn handle_input(&mut self, event: &InputEvent, canvas: &dyn CanvasContext) -> Result<()> {
        self.camera.handle_input(event, canvas)
    }

    /// Advance the camera, then read its matrices for this frame
    pub fn frame(&mut self, dt_millis: f32, canvas: &dyn CanvasContext) -> Result<CameraUniform> {
        self.camera.update(dt_millis);
        let aspect_ratio = canvas.dimensions().aspect_ratio()?;
        let projection = self.camera.perspective_projection_matrix(
            aspect_ratio,
            self.config.near,
            self.config.far,
        );
        Ok(CameraUniform {
            view: self.camera.view_matrix().to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            position: self.camera.position().to_array(),
            fov: self.camera.fov(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_digit() {
        assert_eq!(NavigationMode::from_digit(1), Some(NavigationMode::Fixed));
        assert_eq!(NavigationMode::from_digit(4), Some(NavigationMode::Trackball));
        assert_eq!(NavigationMode::from_digit(0), None);
        assert_eq!(NavigationMode::from_digit(5), None);
    }

    #[test]
    fn test_build_every_mode_from_seed() {
        let seed = CameraSeed::new(Vec3::new(1.0, 2.0, 8.0), Vec3::new(1.0, 0.0, 0.0), Vec3::Y, 0.9);
        for mode in NavigationMode::ALL {
            let camera = build_camera(mode, seed, &NavigationConfig::default()).unwrap();
            assert_eq!(camera.mode(), mode);
            assert_eq!(camera.position(), seed.position);
            assert_eq!(camera.fov(), 0.9);
            assert!(camera.basis().is_orthonormal(1e-5));
        }
    }
}
