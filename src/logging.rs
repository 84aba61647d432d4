use tracing_subscriber::EnvFilter;

/// Error lines go to stderr with file and line. Lambda stamps each line, so
/// timestamps and colors are off.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}
