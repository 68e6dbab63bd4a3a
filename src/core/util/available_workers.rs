use std::num::NonZeroUsize;

/// Number of parallel execution units, falling back to one when the platform
/// cannot say.
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
