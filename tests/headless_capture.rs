use fractal_zoom::controllers::session::{FrameRenderer, Session, SessionOutcome, SessionSettings, StepOutcome};
use fractal_zoom::core::clock::ManualClock;
use fractal_zoom::core::data::{BYTES_PER_PIXEL, Resolution};
use fractal_zoom::core::zoom::{PrecisionMode, TimingMode};
use fractal_zoom::input::ScriptedInput;
use fractal_zoom::presenters::cpu::CpuRenderer;
use fractal_zoom::CapturePipeline;

#[test]
fn test_recording_until_precision_limit_writes_whole_frames() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoom.raw");
    let resolution = Resolution::new(16, 12).unwrap();
    let frame_len = (16 * 12 * BYTES_PER_PIXEL) as u64;

    let settings = SessionSettings {
        speed: 60.0,
        timing: TimingMode::FixedStep,
        min_width: Some(PrecisionMode::Single.min_width(resolution.width())),
        frame_limit: Some(10_000),
        ..SessionSettings::default()
    };
    let pipeline = CapturePipeline::start(&path, resolution).unwrap();
    let session = Session::new(
        CpuRenderer::new(resolution, 32),
        ScriptedInput::default(),
        ManualClock::new(0),
        settings,
    )
    .with_capture(pipeline)
    .unwrap();

    let summary = session.run();

    assert_eq!(summary.outcome, SessionOutcome::PrecisionLimit);
    let report = summary.capture.unwrap();
    assert!(report.failure.is_none());
    assert!(report.frames_written >= 1);
    assert!(report.frames_written <= summary.frames_rendered);

    let len = std::fs::metadata(&path).unwrap().len();
    assert_eq!(len, report.bytes_written);
    assert_eq!(len % frame_len, 0);
    assert_eq!(len / frame_len, report.frames_written);
}

#[test]
fn test_frame_limited_recording_keeps_the_last_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.raw");
    let resolution = Resolution::new(8, 8).unwrap();
    let frame_len = 8 * 8 * BYTES_PER_PIXEL;

    let settings = SessionSettings {
        timing: TimingMode::FixedStep,
        frame_limit: Some(5),
        ..SessionSettings::default()
    };
    let pipeline = CapturePipeline::start(&path, resolution).unwrap();
    let mut session = Session::new(
        CpuRenderer::new(resolution, 32),
        ScriptedInput::default(),
        ManualClock::new(0),
        settings,
    )
    .with_capture(pipeline)
    .unwrap();

    let mut last_frame: Vec<u8>;
    loop {
        let step = session.step();
        last_frame = session.renderer().frame().to_vec();
        if let StepOutcome::Finished(outcome) = step {
            let summary = session.finish(outcome);
            assert_eq!(summary.outcome, SessionOutcome::FrameLimit);
            break;
        }
    }

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len() % frame_len, 0);
    assert_eq!(&written[written.len() - frame_len..], last_frame.as_slice());
}
