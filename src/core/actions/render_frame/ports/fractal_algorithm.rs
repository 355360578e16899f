use crate::core::data::resolution::Resolution;

/// An escape-time fractal evaluated per pixel.
pub trait FractalAlgorithm {
    fn resolution(&self) -> Resolution;

    fn max_iterations(&self) -> u32;

    /// Iterations before escape for pixel `(x, y)`, row 0 at the top.
    /// Returns `max_iterations()` for points that never escape.
    fn compute(&self, x: u32, y: u32) -> u32;
}
