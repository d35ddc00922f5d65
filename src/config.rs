use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning shared by all navigation models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Vertical field of view
    pub fov_degrees: f32,
    /// Radians per dragged pixel (spherical model)
    pub rotate_speed: f32,
    /// World units per dragged pixel
    pub pan_speed: f32,
    /// World units per wheel step
    pub dolly_speed: f32,
    /// Radians per second while a rotate key is held
    pub key_rotation_speed: f32,
    /// World units per second while a pan key is held
    pub key_pan_speed: f32,
    /// Closest the trackball eye may get to its target
    pub min_distance: f32,
    /// Smallest spherical radius
    pub min_radius: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            rotate_speed: 0.01,
            pan_speed: 0.01,
            dolly_speed: 0.5,
            key_rotation_speed: 1.0,
            key_pan_speed: 2.0,
            min_distance: 5.0,
            min_radius: 0.01,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl NavigationConfig {
    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse navigation config")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read navigation config: {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = NavigationConfig::from_json_str(r#"{ "min_distance": 2.5, "fov_degrees": 60 }"#).unwrap();
        assert_eq!(config.min_distance, 2.5);
        assert_eq!(config.fov_degrees, 60.0);
        assert_eq!(config.pan_speed, NavigationConfig::default().pan_speed);
    }

    #[test]
    fn test_fov_in_radians() {
        let config = NavigationConfig::default();
        assert!((config.fov() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_json_reports_context() {
        let err = NavigationConfig::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("navigation config"));
    }

    #[test]
    fn test_missing_file() {
        let err = NavigationConfig::from_json_file("/nonexistent/nav.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/nav.json"));
    }
}
