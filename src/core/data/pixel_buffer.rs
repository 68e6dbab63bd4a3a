use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_size_to_buffer_size(size: PixelSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} buffer",
        .pixel.x, .pixel.y, .size.width(), .size.height()
    )]
    PixelOutsideBounds { pixel: Point, size: PixelSize },
    #[error("pixel size {expected_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major packed RGB raster, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: PixelSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            buffer: vec![0; pixel_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: PixelSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = pixel_size_to_buffer_size(size);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.size.width() as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.size.width()
            && (pixel.y as u32) < self.size.height();

        if !inside {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let row_start = pixel.y as usize * self.row_stride();
        Ok(row_start + pixel.x as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
