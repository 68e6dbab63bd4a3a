pub mod frame_renderer;
pub mod presenter_port;
