use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// An axis-aligned region of the complex plane, imaginary axis pointing up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    bottom_left: Complex,
    top_right: Complex,
}

impl ComplexRect {
    pub fn new(bottom_left: Complex, top_right: Complex) -> Result<Self, ComplexRectError> {
        let width = top_right.real - bottom_left.real;
        let height = top_right.imag - bottom_left.imag;

        // Negated comparison so NaN extents are rejected too.
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        self.bottom_left
    }

    #[must_use]
    pub fn top_right(&self) -> Complex {
        self.top_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.top_right.real - self.bottom_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top_right.imag - self.bottom_left.imag
    }
}
