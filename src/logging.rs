//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FORAGE_LOG";

/// Filter used when `FORAGE_LOG` is unset or invalid.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "forage=debug"
    } else {
        "forage=warn"
    }
}

/// Initialize logging to stderr.
///
/// Reads `FORAGE_LOG` for filter directives, e.g. `FORAGE_LOG=forage=trace`.
/// Falls back to `forage=warn`, or `forage=debug` when `verbose` is set.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // A subscriber installed by the host process wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
