use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    resolution: Resolution,
    region: ComplexRect,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        resolution: Resolution,
        region: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            resolution,
            region,
            max_iterations,
        })
    }

    /// Plane coordinate at the centre of pixel `(x, y)`. The imaginary axis
    /// points up, so row 0 maps to the top edge of the region.
    #[must_use]
    pub fn pixel_to_plane(&self, x: u32, y: u32) -> Complex {
        let fx = (f64::from(x) + 0.5) / f64::from(self.resolution.width());
        let fy = (f64::from(y) + 0.5) / f64::from(self.resolution.height());

        Complex {
            real: self.region.bottom_left().real + fx * self.region.width(),
            imag: self.region.top_right().imag - fy * self.region.height(),
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute(&self, x: u32, y: u32) -> u32 {
        let c = self.pixel_to_plane(x, y);
        let mut z = Complex::default();

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
            z = z * z + c;
        }

        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_region() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap()
    }

    fn algorithm(width: u32, height: u32, max_iterations: u32) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(
            Resolution::new(width, height).unwrap(),
            default_region(),
            max_iterations,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let result = MandelbrotAlgorithm::new(Resolution::new(4, 4).unwrap(), default_region(), 0);

        assert_eq!(result, Err(MandelbrotError::ZeroMaxIterations));
    }

    #[test]
    fn test_pixel_centres_map_inside_region_with_y_up() {
        let algorithm = algorithm(3, 2, 10);

        let top_left = algorithm.pixel_to_plane(0, 0);
        let bottom_right = algorithm.pixel_to_plane(2, 1);

        assert!((top_left.real - -1.5).abs() < 1e-12);
        assert!((top_left.imag - 0.5).abs() < 1e-12);
        assert!((bottom_right.real - 0.5).abs() < 1e-12);
        assert!((bottom_right.imag - -0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cardioid_point_never_escapes() {
        // 3x2 over [-2, 1] x [-1, 1]: the centre of pixel (1, 0) is (-0.5, 0.5),
        // which is inside the main cardioid.
        let algorithm = algorithm(3, 2, 50);

        assert_eq!(algorithm.compute(1, 0), 50);
    }

    #[test]
    fn test_far_point_escapes_quickly() {
        let region = ComplexRect::new(Complex::new(10.0, 10.0), Complex::new(12.0, 12.0)).unwrap();
        let algorithm =
            MandelbrotAlgorithm::new(Resolution::new(2, 2).unwrap(), region, 50).unwrap();

        assert!(algorithm.compute(0, 0) <= 2);
    }
}
