//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize contentscore logging.
///
/// Reads `CONTENTSCORE_LOG` for per-module log levels, e.g.
/// `CONTENTSCORE_LOG=contentscore_analysis::novelty=debug,contentscore_analysis=info`.
/// Falls back to `contentscore=info` if unset or invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// A subscriber already installed by the host is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CONTENTSCORE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("contentscore=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
