use crate::error::{CameraError, Result};

/// Canvas dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn validated(&self) -> Result<(f32, f32)> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok((self.width as f32, self.height as f32))
    }

    pub fn aspect_ratio(&self) -> Result<f32> {
        let (width, height) = self.validated()?;
        Ok(width / height)
    }

    /// Half the smaller side, the pixel radius of the virtual hemisphere
    pub fn hemisphere_radius(&self) -> Result<f32> {
        let (width, height) = self.validated()?;
        Ok(width.min(height) * 0.5)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

/// Host surface that reports its size on demand
pub trait CanvasContext {
    fn dimensions(&self) -> Dimensions;
}

impl CanvasContext for Dimensions {
    fn dimensions(&self) -> Dimensions {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_new() {
        let dims = Dimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_aspect_ratio() {
        let dims = Dimensions::new(800, 600);
        assert!((dims.aspect_ratio().unwrap() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_hemisphere_radius_uses_smaller_side() {
        assert_eq!(Dimensions::new(800, 600).hemisphere_radius(), Ok(300.0));
        assert_eq!(Dimensions::new(200, 1000).hemisphere_radius(), Ok(100.0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let test_cases = [(0, 0), (0, 480), (640, 0)];

        for (width, height) in test_cases {
            let dims = Dimensions::new(width, height);
            let expected = Err(CameraError::InvalidDimensions { width, height });
            assert_eq!(dims.aspect_ratio(), expected);
            assert_eq!(dims.hemisphere_radius(), expected);
        }
    }

    struct MockCanvas {
        dims: std::cell::Cell<Dimensions>,
    }

    impl CanvasContext for MockCanvas {
        fn dimensions(&self) -> Dimensions {
            self.dims.get()
        }
    }

    #[test]
    fn test_canvas_queried_on_demand() {
        let canvas = MockCanvas {
            dims: std::cell::Cell::new(Dimensions::new(640, 480)),
        };
        assert_eq!(canvas.dimensions().width, 640);

        canvas.dims.set(Dimensions::new(1024, 768));
        assert_eq!(canvas.dimensions(), Dimensions::new(1024, 768));
    }
}
