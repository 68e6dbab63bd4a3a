use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives the outcome of every render the controller finishes.
///
/// Called from the render worker thread. The slot stays busy until `present`
/// returns, so implementations should hand the frame off rather than do
/// heavy work inline.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
