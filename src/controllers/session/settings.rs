use crate::core::data::complex::Complex;
use crate::core::zoom::{TimingMode, ZoomLimits};

pub const DEFAULT_TARGET: Complex = Complex::new(-1.1623416001, 0.2923689343);
pub const DEFAULT_SPEED: f64 = 10.0;
/// Plane distance one arrow key press moves the target at zoom factor 1.
pub const PAN_STEP: f64 = 0.06;
pub const SPEED_STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub target: Complex,
    /// Requested speed; the zoom engine clamps it.
    pub speed: f64,
    pub timing: TimingMode,
    pub min_width: Option<f64>,
    /// End the session after this many rendered frames.
    pub frame_limit: Option<u64>,
    pub pan_step: f64,
    pub speed_step: f64,
    pub zoom_limits: ZoomLimits,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            speed: DEFAULT_SPEED,
            timing: TimingMode::FrameRateIndependent,
            min_width: None,
            frame_limit: None,
            pan_step: PAN_STEP,
            speed_step: SPEED_STEP,
            zoom_limits: ZoomLimits::default(),
        }
    }
}
