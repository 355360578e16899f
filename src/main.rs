use fractal_zoom::core::clock::MonotonicClock;
use fractal_zoom::input::ScriptedInput;
use fractal_zoom::launcher::{build_session, headless_config, log_summary, start_capture};
use fractal_zoom::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = fractal_zoom::Cli::parse_args();
    init_tracing();

    let mut config = cli.resolve();
    let capture = start_capture(&mut config);
    let config = headless_config(config);

    let session = build_session(&config, capture, ScriptedInput::default(), MonotonicClock::new())?;
    let summary = session.run();

    log_summary(&summary);

    Ok(())
}
