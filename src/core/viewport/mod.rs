pub mod errors;
pub mod viewport;
pub mod zoom_mode;
