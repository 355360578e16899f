use crate::controllers::session::errors::RenderError;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;

pub trait FrameRenderer {
    fn resolution(&self) -> Resolution;

    /// Renders `region` into the renderer's current frame.
    fn render(&mut self, region: &ComplexRect) -> Result<(), RenderError>;

    /// Replaces the current frame with the error-indicator image.
    fn render_error_indicator(&mut self);

    /// Read-back of the current frame, RGBA8, tightly packed rows.
    fn frame(&self) -> &[u8];
}
