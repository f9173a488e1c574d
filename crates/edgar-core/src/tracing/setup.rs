//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "EDGAR_LOG";

/// Filter used when `EDGAR_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "edgar=info";

/// Build the log filter from `EDGAR_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the tracing/logging system.
///
/// Reads `EDGAR_LOG` for per-module log levels, e.g.
/// `EDGAR_LOG=edgar_localstore=debug,edgar_core=warn`.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(build_filter())
            .try_init();
    });
}
