use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::core::data::pixel_size::{PixelSize, PixelSizeError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, MandelbrotConfig,
};
use crate::core::viewport::zoom_mode::ZoomMode;
use crate::input::gesture::Gesture;
use crate::presenters::file::export_format::ExportFormat;

/// Render the Mandelbrot set, optionally replaying explorer gestures first,
/// and save the final frame as `fractal.<ext>`.
#[derive(Debug, Parser)]
#[command(name = "fractal-viewer", version)]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Colour scheme: default, blue-gradient, warm-tones or grayscale
    #[arg(short, long, default_value = "default")]
    pub scheme: ColourScheme,

    /// Output format: png, jpeg, bmp or ppm
    #[arg(short, long, default_value = "png")]
    pub format: ExportFormat,

    /// Directory the image is written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Iteration cap for the escape-time kernel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Render workers (defaults to the number of available processors)
    #[arg(short, long)]
    pub workers: Option<NonZeroUsize>,

    /// Zoom anchoring: keep-cursor-fixed or centre-on-cursor
    #[arg(long, default_value = "keep-cursor-fixed")]
    pub zoom_mode: ZoomMode,

    /// Gesture to replay before saving, repeatable. One of zoom-in:X,Y
    /// zoom-out:X,Y press:X,Y drag:X,Y release resize:W,H reset hover:X,Y
    /// scheme:NAME
    #[arg(long = "step", value_name = "GESTURE")]
    pub steps: Vec<Gesture>,

    /// Seconds to wait for any single frame
    #[arg(long, default_value_t = 300)]
    pub timeout_secs: u64,
}

impl Args {
    pub fn config(&self) -> Result<MandelbrotConfig, PixelSizeError> {
        Ok(MandelbrotConfig {
            size: PixelSize::new(self.width, self.height)?,
            max_iterations: self.max_iterations,
            colour_scheme: self.scheme,
            zoom_mode: self.zoom_mode,
            workers: self.workers,
            ..MandelbrotConfig::default()
        })
    }
}
