use crate::core::data::resolution::Resolution;

/// RGBA8, matching the `pixels` surface format.
pub const BYTES_PER_PIXEL: usize = 4;

#[must_use]
pub fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes per row; rows are tightly packed.
    #[must_use]
    pub fn row_pitch(&self) -> usize {
        self.resolution.width() as usize * BYTES_PER_PIXEL
    }

    pub fn fill(&mut self, rgba: [u8; BYTES_PER_PIXEL]) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }
}
