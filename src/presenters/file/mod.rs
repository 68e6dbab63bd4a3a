pub mod export;
pub mod export_format;
pub mod image_file;
pub mod ppm;
