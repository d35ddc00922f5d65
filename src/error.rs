use glam::Vec3;
use thiserror::Error;

/// Errors raised by camera operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    /// Canvas has a zero side, so aspect ratio and hemisphere radius are undefined
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Front is parallel to the up hint, right cannot be derived
    #[error("degenerate basis: front {front:?} is parallel to up {up:?}")]
    DegenerateBasis { front: Vec3, up: Vec3 },

    /// Eye and look-at point coincide, front cannot be derived
    #[error("camera position {position:?} coincides with its target")]
    CoincidentTarget { position: Vec3 },

    #[error("rotation axis must be non-zero")]
    ZeroAxis,

    #[error("animation duration must be positive, got {0} ms")]
    InvalidDuration(f32),

    /// A gesture-relative helper was called outside its owning interaction
    #[error("{operation} requires the {expected} interaction, camera is {actual}")]
    InteractionMismatch {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CameraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CameraError::InvalidDimensions { width: 0, height: 600 };
        assert_eq!(err.to_string(), "invalid canvas dimensions 0x600");

        let err = CameraError::InteractionMismatch {
            operation: "drag_rotation",
            expected: "rotating",
            actual: "idle",
        };
        assert_eq!(
            err.to_string(),
            "drag_rotation requires the rotating interaction, camera is idle"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CameraError::ZeroAxis, CameraError::ZeroAxis);
        assert_ne!(
            CameraError::InvalidDuration(0.0),
            CameraError::InvalidDuration(-1.0)
        );
    }
}
