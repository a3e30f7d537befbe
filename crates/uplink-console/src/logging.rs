//! tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over `fallback`; `verbosity` (from `-v`) raises the
/// fallback to `info` or `debug`. Calling twice is harmless.
pub fn init(fallback: &str, verbosity: u8) {
    let fallback = match verbosity {
        0 => fallback.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
