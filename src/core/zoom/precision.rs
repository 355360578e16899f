use std::fmt;
use std::str::FromStr;

/// Numeric width the fractal is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecisionMode {
    Single,
    #[default]
    Double,
}

impl PrecisionMode {
    #[must_use]
    pub fn epsilon(self) -> f64 {
        match self {
            Self::Single => f64::from(f32::EPSILON),
            Self::Double => f64::EPSILON,
        }
    }

    /// Narrowest useful view width for a frame `pixel_width` pixels wide.
    ///
    /// Near |c| ≈ 1 neighbouring pixels collapse onto the same representable
    /// coordinate once one pixel spans less than an epsilon.
    #[must_use]
    pub fn min_width(self, pixel_width: u32) -> f64 {
        self.epsilon() * f64::from(pixel_width)
    }
}

impl fmt::Display for PrecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown precision mode '{0}', expected 'single' or 'double'")]
pub struct ParsePrecisionError(String);

impl FromStr for PrecisionMode {
    type Err = ParsePrecisionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" | "float" | "f32" => Ok(Self::Single),
            "double" | "f64" => Ok(Self::Double),
            other => Err(ParsePrecisionError(other.to_string())),
        }
    }
}
