use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. Filtering follows `RUST_LOG`,
/// falling back to `info`. Output goes to stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
