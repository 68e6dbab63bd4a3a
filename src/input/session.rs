use std::time::Duration;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::render_slot::{Submission, SubmitPolicy};
use crate::core::viewport::errors::ViewportError;
use crate::input::gesture::Gesture;
use crate::input::ui_state::UiState;

/// Ties the UI state to the background renderer: gestures edit the
/// viewport and the resulting frames are requested from the controller.
pub struct Session {
    ui_state: UiState,
    controller: InteractiveController,
}

impl Session {
    #[must_use]
    pub fn new(ui_state: UiState, controller: InteractiveController) -> Self {
        Self {
            ui_state,
            controller,
        }
    }

    #[must_use]
    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    #[must_use]
    pub fn controller(&self) -> &InteractiveController {
        &self.controller
    }

    /// Requests the first frame.
    pub fn start(&self) -> Submission {
        let request = self.ui_state.render_request();
        self.controller.submit_request(request, SubmitPolicy::Queue)
    }

    /// Applies `gesture` and requests a redraw if it changed the picture.
    ///
    /// Returns `None` when no render was needed. A gesture whose render
    /// would be dropped because the renderer is busy is discarded before it
    /// touches the viewport, and `Some(Submission::Dropped)` is returned.
    pub fn handle(&mut self, gesture: Gesture) -> Result<Option<Submission>, ViewportError> {
        let policy = gesture.submit_policy();

        if policy == Some(SubmitPolicy::Drop) && !self.controller.state().is_idle() {
            tracing::debug!(?gesture, "renderer busy, gesture discarded");
            return Ok(Some(Submission::Dropped));
        }

        let needs_render = self.ui_state.apply(gesture).inspect_err(|error| {
            tracing::warn!(?gesture, %error, "gesture rejected");
        })?;

        if let Some(readout) = self.ui_state.coordinate_readout() {
            tracing::trace!("{readout}");
        }

        match (needs_render, policy) {
            (true, Some(policy)) => {
                let request = self.ui_state.render_request();
                Ok(Some(self.controller.submit_request(request, policy)))
            }
            _ => Ok(None),
        }
    }

    pub fn wait_until_idle(&self, timeout: Duration) -> bool {
        self.controller.wait_until_idle(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::{Arc, Mutex};

    use crate::controllers::interactive::RenderEvent;
    use crate::controllers::interactive::ports::frame_renderer::FrameRenderer;
    use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
    use crate::core::actions::render::renderer::Renderer;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Blocks each frame until released, so the slot can be held busy.
    struct HeldPresenterPort {
        frames: Mutex<Vec<(u64, ColourScheme)>>,
        gate: Mutex<Receiver<()>>,
    }

    impl InteractiveControllerPresenterPort for HeldPresenterPort {
        fn present(&self, event: RenderEvent) {
            if let RenderEvent::Frame(frame) = event {
                self.frames
                    .lock()
                    .unwrap()
                    .push((frame.generation, frame.colour_scheme));
            }
            let _ = self.gate.lock().unwrap().recv_timeout(TIMEOUT);
        }
    }

    fn session() -> (Session, Arc<HeldPresenterPort>, Sender<()>) {
        let config = MandelbrotConfig {
            size: PixelSize::new(40, 40).unwrap(),
            max_iterations: 50,
            ..MandelbrotConfig::default()
        };
        let (release, gate) = mpsc::channel();
        let presenter_port = Arc::new(HeldPresenterPort {
            frames: Mutex::new(Vec::new()),
            gate: Mutex::new(gate),
        });
        let renderer: Arc<dyn FrameRenderer> =
            Arc::new(Renderer::with_workers(50, NonZeroUsize::new(2).unwrap()).unwrap());
        let controller = InteractiveController::new(
            renderer,
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>,
        )
        .unwrap();
        let ui_state = UiState::new(config.build_viewport(), config.colour_scheme);

        (Session::new(ui_state, controller), presenter_port, release)
    }

    #[test]
    fn test_wheel_while_busy_leaves_viewport_unchanged() {
        let (mut session, _presenter_port, release) = session();
        assert_eq!(session.start(), Submission::Started(1));
        let before = session.ui_state().viewport().clone();

        let cursor = Point { x: 20, y: 20 };
        let outcome = session.handle(Gesture::WheelUp(cursor)).unwrap();

        assert_eq!(outcome, Some(Submission::Dropped));
        assert_eq!(session.ui_state().viewport(), &before);

        release.send(()).unwrap();
        assert!(session.wait_until_idle(TIMEOUT));
    }

    #[test]
    fn test_wheel_when_idle_zooms_and_renders() {
        let (mut session, _presenter_port, release) = session();
        release.send(()).unwrap();
        session.start();
        assert!(session.wait_until_idle(TIMEOUT));

        release.send(()).unwrap();
        let cursor = Point { x: 20, y: 20 };
        let outcome = session.handle(Gesture::WheelUp(cursor)).unwrap();

        assert_eq!(outcome, Some(Submission::Started(2)));
        let width = session.ui_state().viewport().region().width();
        assert!((width - 1.5).abs() < 1e-12);
        assert!(session.wait_until_idle(TIMEOUT));
    }

    #[test]
    fn test_busy_edits_are_queued_and_coalesced() {
        let (mut session, presenter_port, release) = session();
        session.start();

        let origin = Point { x: 0, y: 0 };
        session.handle(Gesture::DragStart(origin)).unwrap();
        let first = session.handle(Gesture::DragTo(Point { x: 4, y: 0 }));
        let second = session.handle(Gesture::SelectScheme(ColourScheme::Grayscale));

        assert_eq!(first, Ok(Some(Submission::Queued(2))));
        assert_eq!(second, Ok(Some(Submission::Queued(3))));

        release.send(()).unwrap();
        release.send(()).unwrap();
        assert!(session.wait_until_idle(TIMEOUT));

        let frames = presenter_port.frames.lock().unwrap().clone();
        assert_eq!(
            frames,
            vec![(1, ColourScheme::Default), (3, ColourScheme::Grayscale)]
        );
    }

    #[test]
    fn test_hover_needs_no_render() {
        let (mut session, _presenter_port, release) = session();
        release.send(()).unwrap();

        let hover = Gesture::Hover(Point { x: 3, y: 3 });
        assert_eq!(session.handle(hover), Ok(None));
        assert!(session.ui_state().coordinate_readout().is_some());
    }
}
