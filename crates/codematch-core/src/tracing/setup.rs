//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the codematch tracing/logging system.
///
/// Reads the `CODEMATCH_LOG` environment variable as an `EnvFilter`, e.g.
/// `CODEMATCH_LOG=codematch_confidence=debug,codematch_ranking=info`.
///
/// Falls back to `codematch=info` if `CODEMATCH_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CODEMATCH_LOG")
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string (for embedding hosts).
/// Has no effect if tracing was already initialized.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // A host may already own the global subscriber; keep theirs.
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
}
