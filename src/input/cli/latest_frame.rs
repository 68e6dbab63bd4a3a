use std::sync::{Mutex, PoisonError};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::frame_error::FrameError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;

/// Keeps only the newest render outcome.
#[derive(Debug, Default)]
pub struct LatestFramePresenter {
    latest: Mutex<Option<RenderEvent>>,
}

impl LatestFramePresenter {
    /// Takes the newest outcome, leaving nothing behind.
    pub fn take(&self) -> Option<Result<FrameData, FrameError>> {
        let event = self
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;

        Some(match event {
            RenderEvent::Frame(frame) => Ok(frame),
            RenderEvent::Error(error) => Err(error),
        })
    }
}

impl InteractiveControllerPresenterPort for LatestFramePresenter {
    fn present(&self, event: RenderEvent) {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);

        let is_newer = latest
            .as_ref()
            .is_none_or(|current| event.generation() > current.generation());
        if is_newer {
            *latest = Some(event);
        }
    }
}
