use crate::core::data::viewport::Viewport;
use crate::core::zoom::limits::ZoomLimits;
use crate::core::zoom::request::{TimingMode, ZoomRequest};

/// What happened to the viewport during one advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// The rectangle moved toward the target and is still above the limit.
    Zooming,
    /// The precision limit was reached in frame-rate-independent mode and
    /// the viewport was restored to its defaults.
    Reset,
    /// The precision limit was reached in fixed-step mode. The viewport is
    /// left as-is so the caller can finish cleanly.
    LimitReached,
}

impl ZoomOutcome {
    #[must_use]
    pub fn limit_hit(self) -> bool {
        !matches!(self, Self::Zooming)
    }
}

/// Fraction of the remaining corner-to-target distance kept after one step.
///
/// Always in `(0, 1]` for a non-negative speed: the denominator is at least
/// `speed_scale`.
#[must_use]
pub fn normalized_speed(speed: f64, limits: &ZoomLimits) -> f64 {
    limits.speed_scale / (limits.speed_scale + speed)
}

/// Effective per-tick speed after clamping and, in frame-rate-independent
/// mode, scaling by the time since the previous tick.
#[must_use]
pub fn effective_speed(speed: f64, timing: TimingMode, elapsed_millis: u64, limits: &ZoomLimits) -> f64 {
    let clamped = limits.clamp_speed(speed);

    match timing {
        TimingMode::FrameRateIndependent => {
            clamped * (elapsed_millis as f64 / limits.frame_millis)
        }
        TimingMode::FixedStep => clamped,
    }
}

/// Moves both viewport corners geometrically toward `request.target` and
/// applies the precision-limit policy for the request's timing mode.
///
/// `last_tick_millis` is always updated to `now_millis`, including when the
/// view is reset.
pub fn advance(
    viewport: &mut Viewport,
    request: &ZoomRequest,
    now_millis: u64,
    limits: &ZoomLimits,
) -> ZoomOutcome {
    let elapsed_millis = now_millis.saturating_sub(viewport.last_tick_millis);
    let speed = effective_speed(request.speed, request.timing, elapsed_millis, limits);
    let keep = normalized_speed(speed, limits);

    let target = request.target;
    viewport.bottom_left = target - (target - viewport.bottom_left) * keep;
    viewport.top_right = target - (target - viewport.top_right) * keep;
    viewport.zoom_factor /= keep;

    let outcome = match request.min_width {
        // Negated comparison so a NaN width from collapsed corners trips the
        // limit as well.
        Some(min_width) if !(viewport.width() > min_width) => match request.timing {
            TimingMode::FrameRateIndependent => {
                viewport.reset();
                ZoomOutcome::Reset
            }
            TimingMode::FixedStep => ZoomOutcome::LimitReached,
        },
        _ => ZoomOutcome::Zooming,
    };

    viewport.last_tick_millis = now_millis;
    outcome
}
