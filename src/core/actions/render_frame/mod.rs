pub mod ports;
pub mod render_frame_rayon;

pub use ports::fractal_algorithm::FractalAlgorithm;
pub use render_frame_rayon::{RenderFrameError, grey_level, render_frame_rayon};
