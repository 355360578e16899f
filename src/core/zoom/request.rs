use crate::core::data::complex::Complex;

/// How elapsed wall time feeds into each zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingMode {
    /// Speed is scaled by elapsed time so the visual rate holds steady across
    /// frame rates. Hitting the precision limit resets the view in place.
    #[default]
    FrameRateIndependent,
    /// Every tick is one constant step regardless of host speed, so recorded
    /// output is reproducible. Hitting the precision limit is reported to the
    /// caller instead.
    FixedStep,
}

/// Per-tick zoom parameters supplied by the session loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    pub target: Complex,
    /// Unclamped; the engine clamps before use.
    pub speed: f64,
    pub timing: TimingMode,
    /// Width at or below which zooming stops. `None` disables the check.
    pub min_width: Option<f64>,
}
