pub mod controller_error;
pub mod frame_error;
