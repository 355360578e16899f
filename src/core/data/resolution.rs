#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("resolution must be at least 2x2 pixels: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Output size of a rendered frame in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width < 2 || height < 2 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    /// Compile-time constructor for known sizes. Panics (at compile time
    /// when used in a `const`) below 2x2.
    #[must_use]
    pub const fn new_const(width: u32, height: u32) -> Self {
        assert!(width >= 2 && height >= 2, "resolution must be at least 2x2 pixels");

        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
