//! Input adapters: gestures from a pointer-driven explorer, the state they
//! act on, and the command line that scripts them.

pub mod cli;
pub mod gesture;
pub mod session;
pub mod ui_state;
