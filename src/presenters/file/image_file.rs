use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes frames with the `image` crate in a fixed format.
#[derive(Debug, Clone, Copy)]
pub struct ImageFilePresenter {
    format: ImageFormat,
}

impl ImageFilePresenter {
    #[must_use]
    pub fn new(format: ImageFormat) -> Self {
        Self { format }
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
            self.format,
        )?;

        Ok(())
    }
}
