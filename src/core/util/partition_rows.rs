use crate::core::data::render_job::RenderJob;
use std::num::NonZeroUsize;

/// Splits `[0, height)` into `workers` contiguous bands.
///
/// Band `t` covers `[t * height / workers, (t + 1) * height / workers)` with
/// integer division, so band sizes differ by at most one row. With more
/// workers than rows some bands are empty; callers skip those.
#[must_use]
pub fn partition_rows(height: u32, workers: NonZeroUsize) -> Vec<RenderJob> {
    let height = u64::from(height);
    let workers = workers.get() as u64;

    (0..workers)
        .map(|t| RenderJob {
            start_row: (t * height / workers) as u32,
            end_row: ((t + 1) * height / workers) as u32,
        })
        .collect()
}
