//! Diagnostic logging for the binary.
//!
//! Library code emits `tracing` events; this installs a stderr `fmt`
//! subscriber so they can be seen. `--verbose` forces `debug`, otherwise
//! `AES256_LOG` is read as an `EnvFilter` directive, defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "AES256_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("aes256=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
