//! Wires a resolved configuration into a runnable session.

use std::error::Error;

use crate::config::SessionConfig;
use crate::controllers::capture::{CaptureError, CapturePipeline};
use crate::controllers::session::{InputSource, Session, SessionSummary};
use crate::core::clock::Clock;
use crate::presenters::cpu::CpuRenderer;

/// Frame cap for headless runs that neither record nor set `--frames`.
pub const HEADLESS_FRAME_LIMIT: u64 = 600;

/// Start-up failures.
#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    #[error("renderer unavailable")]
    Renderer(#[source] Box<dyn Error + Send + Sync>),

    #[error("capture output cannot be opened")]
    Capture(#[from] CaptureError),
}

/// Opens the recording the configuration asks for.
///
/// An output that cannot be opened is not fatal: the diagnostic is logged,
/// `config.record` is cleared and the session runs without recording.
pub fn start_capture(config: &mut SessionConfig) -> Option<CapturePipeline> {
    let path = config.record.as_ref()?;

    match CapturePipeline::start(path, config.resolution).map_err(InitializationError::from) {
        Ok(pipeline) => Some(pipeline),
        Err(err) => {
            tracing::warn!(
                error = %err,
                cause = %err.source_chain(),
                "recording disabled, continuing without capture"
            );
            config.record = None;
            None
        }
    }
}

/// Builds a CPU-rendered session, attaching `capture` when given.
///
/// Fails when `capture` was started for a different resolution than
/// `config` renders at.
pub fn build_session<I, C>(
    config: &SessionConfig,
    capture: Option<CapturePipeline>,
    input: I,
    clock: C,
) -> Result<Session<CpuRenderer, I, C>, InitializationError>
where
    I: InputSource,
    C: Clock,
{
    let renderer = CpuRenderer::new(config.resolution, config.max_iterations);
    let session = Session::new(renderer, input, clock, config.session_settings());

    tracing::info!(
        width = config.resolution.width(),
        height = config.resolution.height(),
        target_x = config.target.real,
        target_y = config.target.imag,
        speed = config.speed,
        precision = %config.precision,
        timing = ?config.timing(),
        "session configured"
    );

    match capture {
        Some(pipeline) => Ok(session.with_capture(pipeline)?),
        None => Ok(session),
    }
}

impl InitializationError {
    fn source_chain(&self) -> String {
        let mut chain = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            chain.push(err.to_string());
            source = err.source();
        }
        chain.join(": ")
    }
}

/// Headless runs without a recording or frame cap would never end on their
/// own, so they get [`HEADLESS_FRAME_LIMIT`].
#[must_use]
pub fn headless_config(mut config: SessionConfig) -> SessionConfig {
    if config.fullscreen {
        tracing::debug!("fullscreen ignored without a window");
    }

    if config.frame_limit.is_none() && !config.is_recording() {
        tracing::info!(frames = HEADLESS_FRAME_LIMIT, "no --record or --frames given, capping run");
        config.frame_limit = Some(HEADLESS_FRAME_LIMIT);
    }

    config
}

pub fn log_summary(summary: &SessionSummary) {
    tracing::info!(
        outcome = ?summary.outcome,
        frames = summary.frames_rendered,
        "session finished"
    );

    if let Some(report) = &summary.capture {
        match &report.failure {
            Some(failure) => tracing::warn!(
                frames_written = report.frames_written,
                failure = %failure,
                "recording ended early"
            ),
            None => tracing::info!(
                frames_written = report.frames_written,
                frames_dropped = report.frames_dropped(),
                bytes = report.bytes_written,
                "recording complete"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use crate::controllers::session::SessionOutcome;
    use crate::core::clock::ManualClock;
    use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
    use crate::core::data::resolution::Resolution;
    use crate::core::zoom::TimingMode;
    use crate::input::ScriptedInput;
    use clap::Parser;

    fn config(args: &[&str]) -> SessionConfig {
        Cli::try_parse_from(std::iter::once("fractal_zoom").chain(args.iter().copied()))
            .unwrap()
            .resolve()
    }

    #[test]
    fn test_headless_run_without_limit_is_capped() {
        let resolved = headless_config(config(&[]));

        assert_eq!(resolved.frame_limit, Some(HEADLESS_FRAME_LIMIT));
    }

    #[test]
    fn test_explicit_frame_limit_is_kept() {
        let resolved = headless_config(config(&["--frames", "7"]));

        assert_eq!(resolved.frame_limit, Some(7));
    }

    #[test]
    fn test_recording_run_is_not_capped() {
        let resolved = headless_config(config(&["--record", "zoom.raw"]));

        assert_eq!(resolved.frame_limit, None);
    }

    #[test]
    fn test_builds_session_that_runs_to_frame_limit() {
        let resolved = config(&["--width", "16", "--height", "12", "--frames", "3", "--max-iterations", "32"]);
        let session =
            build_session(&resolved, None, ScriptedInput::default(), ManualClock::new(0)).unwrap();

        let summary = session.run();

        assert_eq!(summary.outcome, SessionOutcome::FrameLimit);
        assert_eq!(summary.frames_rendered, 3);
        assert!(summary.capture.is_none());
    }

    #[test]
    fn test_builds_recording_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoom.raw");
        let path_arg = path.to_str().unwrap();
        let mut resolved = config(&["--width", "8", "--height", "6", "--frames", "2", "--record", path_arg]);

        let capture = start_capture(&mut resolved);
        assert!(capture.is_some());
        let session = build_session(&resolved, capture, ScriptedInput::default(), ManualClock::new(0))
            .unwrap();
        assert!(session.is_recording());
        let summary = session.run();

        let report = summary.capture.unwrap();
        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len, report.bytes_written);
        assert_eq!(len % (8 * 6 * BYTES_PER_PIXEL) as u64, 0);
    }

    #[test]
    fn test_capture_started_for_another_resolution_fails_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoom.raw");
        let path_arg = path.to_str().unwrap();
        let mut resolved = config(&["--width", "8", "--height", "8", "--record", path_arg]);
        let capture = start_capture(&mut resolved);
        resolved.resolution = Resolution::new(4, 4).unwrap();

        let result =
            build_session(&resolved, capture, ScriptedInput::default(), ManualClock::new(0));

        assert!(matches!(
            result,
            Err(InitializationError::Capture(CaptureError::FrameSize {
                expected: 256,
                actual: 64
            }))
        ));
    }

    #[test]
    fn test_unwritable_record_path_falls_back_to_no_recording() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("zoom.raw");
        let path_arg = path.to_str().unwrap();
        let mut resolved = config(&["--record", path_arg]);

        let capture = start_capture(&mut resolved);

        assert!(capture.is_none());
        assert!(!resolved.is_recording());
        assert_eq!(resolved.timing(), TimingMode::FrameRateIndependent);
    }

    #[test]
    fn test_no_record_option_starts_nothing() {
        let mut resolved = config(&[]);

        assert!(start_capture(&mut resolved).is_none());
    }
}
