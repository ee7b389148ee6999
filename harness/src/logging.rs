//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "COSTAR_LOG";

const DEFAULT_FILTER: &str = "warn,costar_harness=info";

/// Install the global subscriber.
///
/// Reads `COSTAR_LOG` (e.g. `COSTAR_LOG=costar_search=debug`), falling back
/// to `warn,costar_harness=info`. Events go to stderr so stdout carries only
/// results. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
