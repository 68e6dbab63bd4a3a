use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelSizeError {
    #[error("pixel grid size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of a pixel grid. Both axes are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSize {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelSizeError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(PixelSizeError::InvalidSize { width, height }),
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width.get()
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height.get()
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width()) / f64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_new_valid() {
        let size = PixelSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
    }

    #[test]
    fn test_pixel_size_must_be_positive() {
        assert_eq!(
            PixelSize::new(0, 10),
            Err(PixelSizeError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            PixelSize::new(10, 0),
            Err(PixelSizeError::InvalidSize {
                width: 10,
                height: 0
            })
        );
        assert!(PixelSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(PixelSize::new(800, 400).unwrap().aspect_ratio(), 2.0);
        assert_eq!(PixelSize::new(300, 600).unwrap().aspect_ratio(), 0.5);
    }
}
