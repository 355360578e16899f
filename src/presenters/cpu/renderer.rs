use crate::controllers::session::errors::RenderError;
use crate::controllers::session::ports::FrameRenderer;
use crate::core::actions::render_frame::render_frame_rayon;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::MandelbrotAlgorithm;

/// Opaque green, shown when a frame cannot be rendered.
pub const ERROR_INDICATOR: [u8; BYTES_PER_PIXEL] = [0, 255, 0, 255];

/// Escape-time Mandelbrot renderer running on the rayon thread pool.
#[derive(Debug)]
pub struct CpuRenderer {
    frame: PixelBuffer,
    max_iterations: u32,
}

impl CpuRenderer {
    #[must_use]
    pub fn new(resolution: Resolution, max_iterations: u32) -> Self {
        Self {
            frame: PixelBuffer::new(resolution),
            max_iterations,
        }
    }
}

impl FrameRenderer for CpuRenderer {
    fn resolution(&self) -> Resolution {
        self.frame.resolution()
    }

    fn render(&mut self, region: &ComplexRect) -> Result<(), RenderError> {
        let algorithm = MandelbrotAlgorithm::new(self.frame.resolution(), *region, self.max_iterations)
            .map_err(|err| RenderError::new(err.to_string()))?;

        render_frame_rayon(&algorithm, &mut self.frame).map_err(|err| RenderError::new(err.to_string()))
    }

    fn render_error_indicator(&mut self) {
        self.frame.fill(ERROR_INDICATOR);
    }

    fn frame(&self) -> &[u8] {
        self.frame.buffer()
    }
}
