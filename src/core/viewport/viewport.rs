use std::collections::VecDeque;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::zoom_mode::ZoomMode;

/// Accumulated drag distance, in whole pixels, since the base rectangle was
/// last rebuilt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
struct PanOffset {
    dx: i64,
    dy: i64,
}

const ZOOM_HISTORY_LIMIT: usize = 256;

/// A zoom that a reciprocal zoom at the same pixel can undo exactly.
#[derive(Debug, Copy, Clone, PartialEq)]
struct ZoomStep {
    factor: f64,
    pixel: Point,
    base_before: ComplexRect,
    pan_before: PanOffset,
    base_after: ComplexRect,
}

/// The visible part of the complex plane and the pixel grid it is drawn on.
///
/// Bounds are derived from a base rectangle plus an integer pan offset.
/// Panning only ever touches the integer offset, so any sequence of drags
/// that returns to its starting pixel restores the bounds bit for bit.
/// Zoom and resize fold the offset into a fresh base rectangle.
///
/// Zooms are remembered until the next resize or reset. A zoom by `1/f` at
/// the pixel of the last remembered zoom by `f` restores the exact bounds
/// from before it, provided any drags since then have cancelled out.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    default_region: ComplexRect,
    base: ComplexRect,
    pan: PanOffset,
    region: ComplexRect,
    size: PixelSize,
    zoom_mode: ZoomMode,
    zoom_history: VecDeque<ZoomStep>,
}

impl Viewport {
    #[must_use]
    pub fn new(default_region: ComplexRect, size: PixelSize) -> Self {
        Self {
            default_region,
            base: default_region,
            pan: PanOffset::default(),
            region: default_region,
            size,
            zoom_mode: ZoomMode::default(),
            zoom_history: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn with_zoom_mode(mut self, zoom_mode: ZoomMode) -> Self {
        self.zoom_mode = zoom_mode;
        self
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn default_region(&self) -> ComplexRect {
        self.default_region
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.zoom_mode
    }

    /// Complex-plane units per pixel along each axis.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (
            self.region.width() / f64::from(self.size.width()),
            self.region.height() / f64::from(self.size.height()),
        )
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        pixel_to_complex_coords(pixel, self.size, self.region)
    }

    /// Scales both spans by `factor` around the point under `pixel`.
    ///
    /// Fails without touching the viewport if the factor is not a finite
    /// positive number or if the result would be narrower than `f64` can
    /// represent at this position.
    pub fn zoom(&mut self, factor: f64, pixel: Point) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        if self.undo_zoom(factor, pixel) {
            return Ok(());
        }

        let anchor = self.pixel_to_complex(pixel);
        let new_width = self.region.width() * factor;
        let new_height = self.region.height() * factor;

        let (min_x, min_y) = match self.zoom_mode {
            ZoomMode::KeepCursorFixed => {
                let fraction_x = f64::from(pixel.x) / f64::from(self.size.width());
                let fraction_y = f64::from(pixel.y) / f64::from(self.size.height());

                (
                    anchor.real - fraction_x * new_width,
                    anchor.imag - fraction_y * new_height,
                )
            }
            ZoomMode::CentreOnCursor => (
                anchor.real - new_width / 2.0,
                anchor.imag - new_height / 2.0,
            ),
        };

        let zoomed = ComplexRect::from_bounds(
            min_x,
            min_x + new_width,
            min_y,
            min_y + new_height,
        )?;

        if self.zoom_history.len() == ZOOM_HISTORY_LIMIT {
            self.zoom_history.pop_front();
        }
        self.zoom_history.push_back(ZoomStep {
            factor,
            pixel,
            base_before: self.base,
            pan_before: self.pan,
            base_after: zoomed,
        });

        self.base = zoomed;
        self.pan = PanOffset::default();
        self.region = zoomed;
        Ok(())
    }

    fn undo_zoom(&mut self, factor: f64, pixel: Point) -> bool {
        let Some(&step) = self.zoom_history.back() else {
            return false;
        };

        let reciprocal = factor * step.factor == 1.0;
        let unmoved = self.base == step.base_after && self.pan == PanOffset::default();
        if !(reciprocal && unmoved && step.pixel == pixel) {
            return false;
        }

        let Ok(region) = Self::derive_region(step.base_before, step.pan_before, self.size) else {
            return false;
        };

        self.zoom_history.pop_back();
        self.base = step.base_before;
        self.pan = step.pan_before;
        self.region = region;
        true
    }

    /// Moves the view by a drag of `(dx, dy)` pixels. The picture follows
    /// the cursor, so the bounds shift the opposite way.
    pub fn pan_by_pixel_delta(&mut self, dx: i32, dy: i32) -> Result<(), ViewportError> {
        let pan = PanOffset {
            dx: self.pan.dx.saturating_add(i64::from(dx)),
            dy: self.pan.dy.saturating_add(i64::from(dy)),
        };

        self.region = Self::derive_region(self.base, pan, self.size)?;
        self.pan = pan;
        Ok(())
    }

    /// Adopts a new grid size, keeping the horizontal bounds and the vertical
    /// centre and refitting the vertical span to the new aspect ratio.
    pub fn resize(&mut self, size: PixelSize) -> Result<(), ViewportError> {
        let span_x = self.region.max_x() - self.region.min_x();
        let span_y = span_x / size.aspect_ratio();
        let centre_y = self.region.centre().imag;

        let resized = ComplexRect::from_bounds(
            self.region.min_x(),
            self.region.max_x(),
            centre_y - span_y / 2.0,
            centre_y + span_y / 2.0,
        )?;

        self.size = size;
        self.rebase(resized);
        Ok(())
    }

    /// Restores the default bounds. The grid size is left alone.
    pub fn reset(&mut self) {
        self.rebase(self.default_region);
    }

    fn rebase(&mut self, region: ComplexRect) {
        self.base = region;
        self.pan = PanOffset::default();
        self.region = region;
        self.zoom_history.clear();
    }

    fn derive_region(
        base: ComplexRect,
        pan: PanOffset,
        size: PixelSize,
    ) -> Result<ComplexRect, ViewportError> {
        let shift_x = pan.dx as f64 * base.width() / f64::from(size.width());
        let shift_y = pan.dy as f64 * base.height() / f64::from(size.height());

        ComplexRect::from_bounds(
            base.min_x() - shift_x,
            base.max_x() - shift_x,
            base.min_y() - shift_y,
            base.max_y() - shift_y,
        )
        .map_err(ViewportError::from)
    }
}
