use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};

pub const DEFAULT_BOTTOM_LEFT: Complex = Complex::new(-2.0, -1.0);
pub const DEFAULT_TOP_RIGHT: Complex = Complex::new(1.0, 1.0);

/// The visible rectangle of the plane plus the bookkeeping the zoom engine
/// needs between ticks.
///
/// Corners are raw points that the zoom engine mutates in place. `bounds()`
/// validates them into a [`ComplexRect`] for renderers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub bottom_left: Complex,
    pub top_right: Complex,
    /// Cumulative magnification since the last reset.
    pub zoom_factor: f64,
    pub last_tick_millis: u64,
}

impl Viewport {
    #[must_use]
    pub fn new(now_millis: u64) -> Self {
        Self {
            bottom_left: DEFAULT_BOTTOM_LEFT,
            top_right: DEFAULT_TOP_RIGHT,
            zoom_factor: 1.0,
            last_tick_millis: now_millis,
        }
    }

    /// Restores the default bounds and zoom factor exactly. The tick
    /// timestamp is left alone so the next advance measures real elapsed time.
    pub fn reset(&mut self) {
        self.bottom_left = DEFAULT_BOTTOM_LEFT;
        self.top_right = DEFAULT_TOP_RIGHT;
        self.zoom_factor = 1.0;
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.top_right.real - self.bottom_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_right.imag - self.bottom_left.imag
    }

    pub fn bounds(&self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::new(self.bottom_left, self.top_right)
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.bottom_left == DEFAULT_BOTTOM_LEFT
            && self.top_right == DEFAULT_TOP_RIGHT
            && self.zoom_factor == 1.0
    }
}
