//! Tracing setup for the command-line binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise `warn`, or `debug` for this crate
/// when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_directive = if verbose {
            "expense_tracker=debug"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
