use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Base name of every exported image.
pub const EXPORT_FILE_STEM: &str = "fractal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
    Ppm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported export format `{0}` (expected one of: png, jpeg, bmp, ppm)")]
pub struct ExportFormatParseError(pub String);

impl ExportFormat {
    pub const ALL: &'static [Self] = &[Self::Png, Self::Jpeg, Self::Bmp, Self::Ppm];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
            Self::Ppm => "ppm",
        }
    }

    /// `<directory>/fractal.<ext>`
    #[must_use]
    pub fn export_path(self, directory: &Path) -> PathBuf {
        directory.join(format!("{EXPORT_FILE_STEM}.{}", self.extension()))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('.');

        if wanted.eq_ignore_ascii_case("jpg") {
            return Ok(Self::Jpeg);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExportFormatParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_is_fractal_dot_extension() {
        let dir = Path::new("out");

        assert_eq!(ExportFormat::Png.export_path(dir), dir.join("fractal.png"));
        assert_eq!(
            ExportFormat::Jpeg.export_path(dir),
            dir.join("fractal.jpeg")
        );
        assert_eq!(ExportFormat::Bmp.export_path(dir), dir.join("fractal.bmp"));
        assert_eq!(ExportFormat::Ppm.export_path(dir), dir.join("fractal.ppm"));
    }

    #[test]
    fn parses_extensions_case_insensitively() {
        assert_eq!("PNG".parse::<ExportFormat>(), Ok(ExportFormat::Png));
        assert_eq!(".bmp".parse::<ExportFormat>(), Ok(ExportFormat::Bmp));
        assert_eq!("jpg".parse::<ExportFormat>(), Ok(ExportFormat::Jpeg));
        assert_eq!("ppm".parse::<ExportFormat>(), Ok(ExportFormat::Ppm));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert_eq!(
            "gif".parse::<ExportFormat>(),
            Err(ExportFormatParseError("gif".to_owned()))
        );
    }
}
