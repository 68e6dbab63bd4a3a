use std::num::NonZeroUsize;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::render::errors::{RenderError, RendererBuildError};
use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::data::render_job::RenderJob;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::available_workers::available_workers;
use crate::core::util::partition_rows::partition_rows;
use crate::core::viewport::viewport::Viewport;

/// Parallel escape-time renderer.
///
/// Owns a fixed-size worker pool that is reused across frames. Each render
/// splits the grid into one static band of rows per worker, so the output is
/// identical whatever the worker count.
#[derive(Debug)]
pub struct Renderer {
    pool: ThreadPool,
    workers: NonZeroUsize,
    max_iterations: u32,
}

impl Renderer {
    /// Builds a renderer with one worker per available processor.
    pub fn new(max_iterations: u32) -> Result<Self, RendererBuildError> {
        Self::with_workers(max_iterations, available_workers())
    }

    pub fn with_workers(
        max_iterations: u32,
        workers: NonZeroUsize,
    ) -> Result<Self, RendererBuildError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations.into());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|index| format!("render-worker-{index}"))
            .build()?;

        tracing::debug!(workers = workers.get(), max_iterations, "renderer ready");

        Ok(Self {
            pool,
            workers,
            max_iterations,
        })
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Overwrites every cell of `buffer` with the colour of its pixel in
    /// `viewport`.
    ///
    /// The buffer must match the viewport's grid; otherwise it is left
    /// untouched and [`RenderError::DimensionMismatch`] is returned. A panic
    /// in a worker propagates to the caller.
    pub fn render(
        &self,
        viewport: &Viewport,
        scheme: ColourScheme,
        buffer: &mut PixelBuffer,
    ) -> Result<(), RenderError> {
        if buffer.size() != viewport.size() {
            return Err(RenderError::DimensionMismatch {
                viewport: viewport.size(),
                buffer: buffer.size(),
            });
        }

        let algorithm =
            MandelbrotAlgorithm::new(viewport.size(), viewport.region(), self.max_iterations)?;
        let colour_map = mandelbrot_colour_map_factory(scheme, self.max_iterations);

        self.render_with(&algorithm, &colour_map, buffer);
        Ok(())
    }

    /// Runs `algorithm` over every pixel of `buffer` on the worker pool and
    /// stores the mapped colours.
    pub fn render_with<A, M>(&self, algorithm: &A, colour_map: &M, buffer: &mut PixelBuffer)
    where
        A: FractalAlgorithm<Output = u32>,
        M: ColourMap,
    {
        let started = Instant::now();
        let jobs = partition_rows(buffer.height(), self.workers);
        let job_count = jobs.len();
        let stride = buffer.row_stride();

        let mut rest = buffer.buffer_mut();
        let mut bands = Vec::with_capacity(job_count);
        for job in jobs {
            let (band, tail) =
                std::mem::take(&mut rest).split_at_mut(job.row_count() as usize * stride);
            bands.push((job, band));
            rest = tail;
        }

        self.pool.install(|| {
            bands
                .into_par_iter()
                .filter(|(job, _)| !job.is_empty())
                .for_each(|(job, band)| fill_band(algorithm, colour_map, job, stride, band));
        });

        tracing::debug!(
            workers = self.workers.get(),
            jobs = job_count,
            elapsed = ?started.elapsed(),
            "frame rendered"
        );
    }
}

fn fill_band<A, M>(algorithm: &A, colour_map: &M, job: RenderJob, stride: usize, band: &mut [u8])
where
    A: FractalAlgorithm<Output = u32>,
    M: ColourMap,
{
    for (row, y) in band.chunks_exact_mut(stride).zip(job.rows()) {
        for (cell, x) in row.chunks_exact_mut(BYTES_PER_PIXEL).zip(0_i32..) {
            let colour = colour_map.map(algorithm.compute(Point { x, y: y as i32 }));
            cell.copy_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }
}
