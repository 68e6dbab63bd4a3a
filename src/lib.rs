pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::interactive::{
    InteractiveController, RenderEvent, SlotState, SubmitPolicy, Submission,
};
pub use core::actions::render::renderer::Renderer;
pub use core::data::pixel_buffer::PixelBuffer;
pub use core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
pub use core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use core::viewport::viewport::Viewport;
pub use input::cli::args::Args;
pub use input::cli::run::run;
pub use input::gesture::Gesture;
pub use input::session::Session;
pub use presenters::file::export::export_image;
pub use presenters::file::export_format::ExportFormat;
