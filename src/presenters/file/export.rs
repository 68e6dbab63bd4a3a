use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::export_format::ExportFormat;
use crate::presenters::file::image_file::ImageFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

#[must_use]
pub fn file_presenter_factory(format: ExportFormat) -> Box<dyn FilePresenterPort> {
    match format {
        ExportFormat::Png => Box::new(ImageFilePresenter::new(ImageFormat::Png)),
        ExportFormat::Jpeg => Box::new(ImageFilePresenter::new(ImageFormat::Jpeg)),
        ExportFormat::Bmp => Box::new(ImageFilePresenter::new(ImageFormat::Bmp)),
        ExportFormat::Ppm => Box::new(PpmFilePresenter),
    }
}

/// Saves `buffer` as `<directory>/fractal.<ext>` and returns the path written.
pub fn export_image(
    buffer: &PixelBuffer,
    directory: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let path = format.export_path(directory);

    file_presenter_factory(format).present(buffer, &path)?;
    tracing::info!(path = %path.display(), %format, "image exported");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;

    #[test]
    fn exports_every_format_to_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = PixelBuffer::new(PixelSize::new(4, 4).unwrap());

        for &format in ExportFormat::ALL {
            let path = export_image(&buffer, dir.path(), format).unwrap();

            assert_eq!(path, dir.path().join(format!("fractal.{format}")));
            assert!(path.is_file(), "{}", path.display());
        }
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = PixelBuffer::new(PixelSize::new(2, 2).unwrap());

        let result = export_image(&buffer, &dir.path().join("nope"), ExportFormat::Ppm);

        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
