use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::viewport::Viewport;
use crate::input::gesture::Gesture;

pub const ZOOM_IN_FACTOR: f64 = 0.5;
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

#[must_use]
pub fn format_coordinates(point: Complex) -> String {
    format!("Mouse Coordinates: ({:.5}, {:.5})", point.real, point.imag)
}

/// What the explorer window would hold: the live viewport, the selected
/// colour scheme and the pointer state between events.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    viewport: Viewport,
    colour_scheme: ColourScheme,
    drag_anchor: Option<Point>,
    cursor: Option<Point>,
}

impl UiState {
    #[must_use]
    pub fn new(viewport: Viewport, colour_scheme: ColourScheme) -> Self {
        Self {
            viewport,
            colour_scheme,
            drag_anchor: None,
            cursor: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourScheme {
        self.colour_scheme
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::new(&self.viewport, self.colour_scheme)
    }

    /// Readout for the last known cursor position.
    #[must_use]
    pub fn coordinate_readout(&self) -> Option<String> {
        let cursor = self.cursor?;
        Some(format_coordinates(self.viewport.pixel_to_complex(cursor)))
    }

    /// Applies `gesture` and reports whether the picture needs redrawing.
    ///
    /// A rejected viewport edit leaves the state as it was.
    pub fn apply(&mut self, gesture: Gesture) -> Result<bool, ViewportError> {
        match gesture {
            Gesture::WheelUp(point) => {
                self.cursor = Some(point);
                self.viewport.zoom(ZOOM_IN_FACTOR, point)?;
                Ok(true)
            }
            Gesture::WheelDown(point) => {
                self.cursor = Some(point);
                self.viewport.zoom(ZOOM_OUT_FACTOR, point)?;
                Ok(true)
            }
            Gesture::DragStart(point) => {
                self.cursor = Some(point);
                self.drag_anchor = Some(point);
                Ok(false)
            }
            Gesture::DragTo(point) => {
                self.cursor = Some(point);
                let Some(anchor) = self.drag_anchor else {
                    return Ok(false);
                };

                self.viewport.pan_by_pixel_delta(
                    point.x.saturating_sub(anchor.x),
                    point.y.saturating_sub(anchor.y),
                )?;
                self.drag_anchor = Some(point);
                Ok(true)
            }
            Gesture::DragEnd => {
                self.drag_anchor = None;
                Ok(false)
            }
            Gesture::Resize(size) => {
                self.viewport.resize(size)?;
                Ok(true)
            }
            Gesture::Reset => {
                self.viewport.reset();
                Ok(true)
            }
            Gesture::Hover(point) => {
                self.cursor = Some(point);
                Ok(false)
            }
            Gesture::SelectScheme(scheme) => {
                self.colour_scheme = scheme;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

    fn ui_state() -> UiState {
        let config = MandelbrotConfig::default();
        UiState::new(config.build_viewport(), config.colour_scheme)
    }

    #[test]
    fn test_readout_formats_five_decimals() {
        let mut state = ui_state();
        assert_eq!(state.coordinate_readout(), None);

        state.apply(Gesture::Hover(Point { x: 0, y: 0 })).unwrap();
        assert_eq!(
            state.coordinate_readout().as_deref(),
            Some("Mouse Coordinates: (-2.00000, -1.50000)")
        );

        let centre = Point { x: 400, y: 400 };
        state.apply(Gesture::Hover(centre)).unwrap();
        assert_eq!(
            state.coordinate_readout().as_deref(),
            Some("Mouse Coordinates: (-0.50000, 0.00000)")
        );
    }

    #[test]
    fn test_hover_does_not_request_render() {
        let mut state = ui_state();
        let before = state.viewport().clone();

        assert!(!state.apply(Gesture::Hover(Point { x: 5, y: 5 })).unwrap());
        assert_eq!(state.viewport(), &before);
    }

    #[test]
    fn test_drag_pans_by_delta_since_last_event() {
        let mut state = ui_state();
        let anchor = Point { x: 100, y: 100 };
        let moved = Point { x: 110, y: 100 };

        assert!(!state.apply(Gesture::DragStart(anchor)).unwrap());
        assert!(state.apply(Gesture::DragTo(moved)).unwrap());
        let expected_min_x = -2.0 - 10.0 * 3.0 / 800.0;
        assert_eq!(state.viewport().region().min_x(), expected_min_x);

        assert!(state.apply(Gesture::DragTo(anchor)).unwrap());
        assert_eq!(state.viewport().region().min_x(), -2.0);
        assert_eq!(state.viewport().region().max_x(), 1.0);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut state = ui_state();
        let before = state.viewport().clone();

        let target = Point { x: 50, y: 50 };
        assert!(!state.apply(Gesture::DragTo(target)).unwrap());
        assert_eq!(state.viewport(), &before);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut state = ui_state();
        let press = Point { x: 1, y: 1 };
        state.apply(Gesture::DragStart(press)).unwrap();
        assert!(state.is_dragging());

        state.apply(Gesture::DragEnd).unwrap();

        assert!(!state.is_dragging());
        assert!(!state.apply(Gesture::DragTo(Point { x: 9, y: 9 })).unwrap());
    }

    #[test]
    fn test_wheel_zooms_by_half_and_double() {
        let mut state = ui_state();
        let centre = Point { x: 400, y: 400 };

        state.apply(Gesture::WheelUp(centre)).unwrap();
        assert!((state.viewport().region().width() - 1.5).abs() < 1e-12);

        state.apply(Gesture::WheelDown(centre)).unwrap();
        assert!((state.viewport().region().width() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejected_zoom_leaves_viewport_alone() {
        let mut state = ui_state();
        let cursor = Point { x: 400, y: 400 };

        for _ in 0..200 {
            let before = state.clone();

            if state.apply(Gesture::WheelUp(cursor)).is_err() {
                assert_eq!(state.viewport(), before.viewport());
                assert!(state.viewport().region().width() > 0.0);
                return;
            }
        }

        panic!("zooming in 200 times never hit the precision floor");
    }

    #[test]
    fn test_reset_and_resize_request_render() {
        let mut state = ui_state();
        let cursor = Point { x: 10, y: 10 };
        state.apply(Gesture::WheelUp(cursor)).unwrap();

        assert!(state.apply(Gesture::Reset).unwrap());
        assert_eq!(state.viewport().region(), state.viewport().default_region());

        let size = PixelSize::new(1000, 500).unwrap();
        assert!(state.apply(Gesture::Resize(size)).unwrap());
        assert_eq!(state.viewport().size(), size);
        assert_eq!(state.render_request().viewport.size(), size);
    }

    #[test]
    fn test_scheme_selection_changes_request() {
        let mut state = ui_state();

        let grayscale = ColourScheme::Grayscale;

        assert!(state.apply(Gesture::SelectScheme(grayscale)).unwrap());

        assert_eq!(state.colour_scheme(), grayscale);
        assert_eq!(state.render_request().colour_scheme, grayscale);
    }
}
