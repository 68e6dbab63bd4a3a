//! Background rendering for interactive exploration.
//!
//! Requests go in through [`InteractiveController::submit_request`], are
//! serialised by a single render slot, and come out as [`RenderEvent`]s on the
//! presenter port.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod render_slot;

pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use render_slot::{SlotState, Submission, SubmitPolicy};
