use rayon::prelude::*;

use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::resolution::Resolution;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderFrameError {
    #[error("frame is {buffer:?} but the algorithm renders {algorithm:?}")]
    ResolutionMismatch {
        buffer: Resolution,
        algorithm: Resolution,
    },
}

/// Maps an iteration count onto an opaque grey. Points that never escaped
/// are black.
#[must_use]
pub fn grey_level(iterations: u32, max_iterations: u32) -> [u8; BYTES_PER_PIXEL] {
    if iterations >= max_iterations {
        return [0, 0, 0, 255];
    }

    let level = (u64::from(iterations) * 255 / u64::from(max_iterations.max(1))) as u8;
    [level, level, level, 255]
}

/// Renders a whole frame into `buffer`, one rayon task per row.
pub fn render_frame_rayon<Alg>(algorithm: &Alg, buffer: &mut PixelBuffer) -> Result<(), RenderFrameError>
where
    Alg: FractalAlgorithm + Sync,
{
    let resolution = algorithm.resolution();
    if buffer.resolution() != resolution {
        return Err(RenderFrameError::ResolutionMismatch {
            buffer: buffer.resolution(),
            algorithm: resolution,
        });
    }

    let row_pitch = buffer.row_pitch();
    let max_iterations = algorithm.max_iterations();

    buffer
        .buffer_mut()
        .par_chunks_mut(row_pitch)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let iterations = algorithm.compute(x as u32, y as u32);
                pixel.copy_from_slice(&grey_level(iterations, max_iterations));
            }
        });

    Ok(())
}
