pub mod complex;
pub mod complex_rect;
pub mod pixel_buffer;
pub mod resolution;
pub mod viewport;

pub use complex::Complex;
pub use complex_rect::{ComplexRect, ComplexRectError};
pub use pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use resolution::{Resolution, ResolutionError};
pub use viewport::Viewport;
