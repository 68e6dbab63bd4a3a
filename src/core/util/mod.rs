pub mod available_workers;
pub mod hsb_to_rgb;
pub mod partition_rows;
pub mod pixel_to_complex_coords;
