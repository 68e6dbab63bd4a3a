use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::input::cli::args::Args;
use crate::input::cli::errors::CliError;
use crate::input::cli::latest_frame::LatestFramePresenter;
use crate::input::session::Session;
use crate::input::ui_state::UiState;
use crate::presenters::file::export::export_image;

/// Renders the opening view, replays every scripted gesture in order and
/// exports the last frame. Returns the path of the written image.
pub fn run(args: &Args) -> Result<PathBuf, CliError> {
    let config = args.config()?;
    let renderer = config.build_renderer()?;
    let timeout = Duration::from_secs(args.timeout_secs);

    tracing::info!(
        width = config.size.width(),
        height = config.size.height(),
        workers = renderer.workers().get(),
        max_iterations = config.max_iterations,
        scheme = %config.colour_scheme,
        zoom_mode = %config.zoom_mode,
        "starting render"
    );

    let presenter = Arc::new(LatestFramePresenter::default());
    let controller = InteractiveController::new(
        Arc::new(renderer),
        Arc::clone(&presenter) as Arc<dyn InteractiveControllerPresenterPort>,
    )?;
    let mut session = Session::new(
        UiState::new(config.build_viewport(), config.colour_scheme),
        controller,
    );

    session.start();

    for (index, &gesture) in args.steps.iter().enumerate() {
        // each step waits for the previous frame so wheel steps are never dropped
        if !session.wait_until_idle(timeout) {
            return Err(CliError::Timeout(args.timeout_secs));
        }

        let step = index + 1;
        session
            .handle(gesture)
            .map_err(|source| CliError::Step { step, source })?;

        if let Some(readout) = session.ui_state().coordinate_readout() {
            tracing::info!(step, ?gesture, "{readout}");
        }
    }

    if !session.wait_until_idle(timeout) {
        return Err(CliError::Timeout(args.timeout_secs));
    }

    let frame = presenter.take().ok_or(CliError::NoFrame)??;
    tracing::info!(
        generation = frame.generation,
        render_duration = ?frame.render_duration,
        min_x = frame.region.min_x(),
        max_x = frame.region.max_x(),
        min_y = frame.region.min_y(),
        max_y = frame.region.max_y(),
        scheme = %frame.colour_scheme,
        "final frame ready"
    );

    let path = export_image(&frame.pixel_buffer, &args.out_dir, args.format)?;
    Ok(path)
}
