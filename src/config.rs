//! Command-line surface and the validated configuration it resolves to.

use std::path::PathBuf;

use clap::Parser;

use crate::controllers::session::SessionSettings;
use crate::controllers::session::settings::{DEFAULT_SPEED, DEFAULT_TARGET};
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::zoom::{PrecisionMode, TimingMode};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_RESOLUTION: Resolution = Resolution::new_const(DEFAULT_WIDTH, DEFAULT_HEIGHT);
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_RECORD_PATH: &str = "capture.raw";

/// Open interval the initial target's real part must fall in.
pub const TARGET_X_RANGE: (f64, f64) = (-2.0, 1.0);
/// Open interval the initial target's imaginary part must fall in.
pub const TARGET_Y_RANGE: (f64, f64) = (-1.0, 1.0);

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fractal_zoom",
    version,
    about = "Continuously zooming Mandelbrot viewer with raw frame capture"
)]
pub struct Cli {
    /// Frame width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Real part of the initial zoom target, in (-2, 1).
    #[arg(short = 'x', long, value_name = "REAL", allow_negative_numbers = true)]
    pub target_x: Option<f64>,

    /// Imaginary part of the initial zoom target, in (-1, 1).
    #[arg(short = 'y', long, value_name = "IMAG", allow_negative_numbers = true)]
    pub target_y: Option<f64>,

    /// Initial zoom speed (>= 0; the engine clamps to 1-60).
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Use a borderless fullscreen window (GUI only).
    #[arg(short = 'f', long)]
    pub fullscreen: bool,

    /// Record every frame as raw RGBA to PATH. Switches zoom timing to fixed
    /// steps so the recording is reproducible.
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_RECORD_PATH
    )]
    pub record: Option<PathBuf>,

    /// Numeric precision the zoom limit is derived from: `single` or `double`.
    #[arg(short = 'p', long, default_value_t = PrecisionMode::Double)]
    pub precision: PrecisionMode,

    /// Stop after this many frames.
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,

    /// Escape-time iteration cap for the CPU renderer.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

/// A rejected option value. The default is used in its place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("invalid resolution {width}x{height}, using the default")]
    InvalidResolution { width: u32, height: u32 },

    #[error("{axis} target {value} outside ({min}, {max}), using {default}")]
    TargetOutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
        default: f64,
    },

    #[error("speed {0} must be >= 0, using the default")]
    NegativeSpeed(f64),

    #[error("max iterations must be > 0, using the default")]
    ZeroIterations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub resolution: Resolution,
    pub target: Complex,
    pub speed: f64,
    pub fullscreen: bool,
    pub record: Option<PathBuf>,
    pub precision: PrecisionMode,
    pub frame_limit: Option<u64>,
    pub max_iterations: u32,
    pub warnings: Vec<ConfigWarning>,
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validates option values, replacing out-of-domain numbers with their
    /// defaults and logging a warning for each.
    #[must_use]
    pub fn resolve(&self) -> SessionConfig {
        let mut warnings = Vec::new();

        let resolution = Resolution::new(self.width, self.height).unwrap_or_else(|_| {
            warnings.push(ConfigWarning::InvalidResolution {
                width: self.width,
                height: self.height,
            });
            DEFAULT_RESOLUTION
        });

        let target = Complex {
            real: checked_target("x", self.target_x, TARGET_X_RANGE, DEFAULT_TARGET.real, &mut warnings),
            imag: checked_target("y", self.target_y, TARGET_Y_RANGE, DEFAULT_TARGET.imag, &mut warnings),
        };

        let speed = match self.speed {
            Some(speed) if speed >= 0.0 => speed,
            Some(speed) => {
                warnings.push(ConfigWarning::NegativeSpeed(speed));
                DEFAULT_SPEED
            }
            None => DEFAULT_SPEED,
        };

        let max_iterations = if self.max_iterations == 0 {
            warnings.push(ConfigWarning::ZeroIterations);
            DEFAULT_MAX_ITERATIONS
        } else {
            self.max_iterations
        };

        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        SessionConfig {
            resolution,
            target,
            speed,
            fullscreen: self.fullscreen,
            record: self.record.clone(),
            precision: self.precision,
            frame_limit: self.frames,
            max_iterations,
            warnings,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.record.is_some()
    }

    #[must_use]
    pub fn timing(&self) -> TimingMode {
        if self.is_recording() {
            TimingMode::FixedStep
        } else {
            TimingMode::FrameRateIndependent
        }
    }

    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            target: self.target,
            speed: self.speed,
            timing: self.timing(),
            min_width: Some(self.precision.min_width(self.resolution.width())),
            frame_limit: self.frame_limit,
            ..SessionSettings::default()
        }
    }
}

fn checked_target(
    axis: &'static str,
    value: Option<f64>,
    (min, max): (f64, f64),
    default: f64,
    warnings: &mut Vec<ConfigWarning>,
) -> f64 {
    match value {
        Some(value) if value > min && value < max => value,
        Some(value) => {
            warnings.push(ConfigWarning::TargetOutOfRange {
                axis,
                value,
                min,
                max,
                default,
            });
            default
        }
        None => default,
    }
}
