use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::controller_error::ControllerError;
use crate::controllers::interactive::errors::frame_error::FrameError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_renderer::FrameRenderer;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::controllers::interactive::render_slot::{
    RenderSlot, SlotState, Submission, SubmitPolicy,
};
use crate::core::data::pixel_buffer::PixelBuffer;

struct SharedState {
    slot: Mutex<RenderSlot<RenderRequest>>,
    wake: Condvar,
    shutdown: AtomicBool,
    last_completed_generation: AtomicU64,
    renderer: Arc<dyn FrameRenderer>,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn lock_slot(&self) -> MutexGuard<'_, RenderSlot<RenderRequest>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs renders on a background thread, one at a time.
///
/// Every finished render, successful or not, is handed to the presenter
/// port. The slot only returns to idle after the presenter has taken the
/// frame, so a frame is never overwritten while it is being shown.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        renderer: Arc<dyn FrameRenderer>,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Result<Self, ControllerError> {
        let shared = Arc::new(SharedState {
            slot: Mutex::new(RenderSlot::default()),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            last_completed_generation: AtomicU64::new(0),
            renderer,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("render-controller".to_owned())
            .spawn(move || Self::worker_loop(&worker_shared))?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    pub fn submit_request(&self, request: RenderRequest, policy: SubmitPolicy) -> Submission {
        let submission = self.shared.lock_slot().submit(request, policy);

        match submission {
            Submission::Dropped => tracing::debug!(?policy, "render busy, request dropped"),
            _ => self.shared.wake.notify_all(),
        }

        submission
    }

    #[must_use]
    pub fn state(&self) -> SlotState {
        self.shared.lock_slot().state()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// Blocks until the slot is idle with nothing pending. Returns `false` if
    /// `timeout` ran out first.
    pub fn wait_until_idle(&self, timeout: Duration) -> bool {
        let slot = self.shared.lock_slot();
        let (slot, _) = self
            .shared
            .wake
            .wait_timeout_while(slot, timeout, |slot| !slot.is_idle())
            .unwrap_or_else(PoisonError::into_inner);

        slot.is_idle()
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                tracing::warn!("render controller thread panicked");
            }
        }
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let (generation, request) = {
                let mut slot = shared.lock_slot();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(ready) = slot.take_ready() {
                        break ready;
                    }

                    slot = shared
                        .wake
                        .wait(slot)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let event = Self::render_request(shared.renderer.as_ref(), generation, request);
            shared.presenter_port.present(event);

            shared
                .last_completed_generation
                .store(generation, Ordering::Release);
            shared.lock_slot().complete(generation);
            shared.wake.notify_all();
        }
    }

    fn render_request(
        renderer: &dyn FrameRenderer,
        generation: u64,
        request: RenderRequest,
    ) -> RenderEvent {
        let RenderRequest {
            viewport,
            colour_scheme,
        } = request;
        let mut pixel_buffer = PixelBuffer::new(viewport.size());

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            renderer.render_frame(&viewport, colour_scheme, &mut pixel_buffer)
        }));
        let render_duration = start.elapsed();

        let message = match outcome {
            Ok(Ok(())) => {
                tracing::info!(
                    generation,
                    width = viewport.width(),
                    height = viewport.height(),
                    scheme = %colour_scheme,
                    ?render_duration,
                    "frame rendered"
                );

                return RenderEvent::Frame(FrameData {
                    generation,
                    pixel_buffer,
                    region: viewport.region(),
                    colour_scheme,
                    render_duration,
                });
            }
            Ok(Err(error)) => error.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        tracing::warn!(generation, %message, "render failed");
        RenderEvent::Error(FrameError {
            generation,
            message,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("render worker panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("render worker panicked: {message}")
    } else {
        "render worker panicked".to_owned()
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
