#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    /// Below this the rectangle barely converges.
    pub min_speed: f64,
    /// Above this the view visibly jitters and overshoots.
    pub max_speed: f64,
    /// Reference frame duration that frame-rate-independent scaling
    /// normalises against (one 60 Hz frame, rounded).
    pub frame_millis: f64,
    /// Larger values make each unit of speed a smaller step.
    pub speed_scale: f64,
}

impl ZoomLimits {
    /// Clamps a requested speed into `[min_speed, max_speed]`. NaN counts as
    /// the slowest speed.
    #[must_use]
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if speed.is_nan() {
            return self.min_speed;
        }
        speed.clamp(self.min_speed, self.max_speed)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_speed: 1.0,
            max_speed: 60.0,
            frame_millis: 17.0,
            speed_scale: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn test_default_limits_are_finite_and_consistent() {
        let limits = ZoomLimits::default();

        assert!(limits.min_speed > 0.0);
        assert!(limits.max_speed >= limits.min_speed);
        assert!(limits.frame_millis > 0.0);
        assert!(limits.speed_scale > 0.0);
    }

    #[test]
    fn test_clamp_speed_keeps_values_in_range() {
        let limits = ZoomLimits::default();

        for speed in [-100.0, -1.0, 0.0, 0.5, 1.0, 10.0, 59.9, 60.0, 61.0, 1e9] {
            let clamped = limits.clamp_speed(speed);
            assert!((1.0..=60.0).contains(&clamped), "speed={speed} clamped={clamped}");
        }

        assert_eq!(limits.clamp_speed(0.0), 1.0);
        assert_eq!(limits.clamp_speed(25.0), 25.0);
        assert_eq!(limits.clamp_speed(f64::INFINITY), 60.0);
        assert_eq!(limits.clamp_speed(f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_clamp_speed_treats_nan_as_slowest() {
        assert_eq!(ZoomLimits::default().clamp_speed(f64::NAN), 1.0);
    }
}
