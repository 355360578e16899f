use fractal_zoom::launcher::log_summary;
use fractal_zoom::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = fractal_zoom::Cli::parse_args();
    init_tracing();

    let summary = fractal_zoom::run_gui(&cli.resolve())?;

    log_summary(&summary);

    Ok(())
}
