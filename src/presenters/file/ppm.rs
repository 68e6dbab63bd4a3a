use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Binary (P6) portable pixmap writer.
#[derive(Debug, Default)]
pub struct PpmFilePresenter;

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        let mut file = BufWriter::new(File::create(filepath)?);

        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(())
    }
}
