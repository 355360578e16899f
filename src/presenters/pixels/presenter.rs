use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::core::data::resolution::Resolution;

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("frame is {actual} bytes, surface expects {expected}")]
    FrameSize { expected: usize, actual: usize },

    #[error(transparent)]
    Pixels(#[from] pixels::Error),

    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Copies finished RGBA frames onto the window's `pixels` surface.
///
/// The framebuffer keeps the render resolution; `pixels` scales it to
/// whatever size the window surface has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, resolution: Resolution) -> Result<Self, PresentError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)?;

        Ok(Self { pixels })
    }

    pub fn present(&mut self, frame: &[u8]) -> Result<(), PresentError> {
        let dest = self.pixels.frame_mut();
        if dest.len() != frame.len() {
            return Err(PresentError::FrameSize {
                expected: dest.len(),
                actual: frame.len(),
            });
        }

        dest.copy_from_slice(frame);
        self.pixels.render()?;

        Ok(())
    }

    /// Ignores zero sizes, which minimized windows report.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), PresentError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }
}
