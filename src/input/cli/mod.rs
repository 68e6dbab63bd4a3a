pub mod args;
pub mod errors;
pub mod latest_frame;
pub mod run;
