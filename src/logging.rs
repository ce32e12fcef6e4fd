// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Default filter for the number of `-v` flags.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
///
/// Records emitted through the `log` facade by the engine are forwarded too.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
