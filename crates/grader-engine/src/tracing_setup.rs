//! Tracing initialisation for hosts embedding the grader.

use std::sync::Once;

use grader_core::config::defaults::DEFAULT_LOG_FILTER;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a structured subscriber filtered by `GRADER_LOG`.
///
/// Format: `GRADER_LOG=grader_relevance=debug,grader_oracle=warn`.
/// Falls back to `grader=info` when unset or invalid. Idempotent, and leaves
/// an already-installed global subscriber in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GRADER_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

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

/// Install a JSON subscriber with an explicit filter. A no-op if a
/// subscriber is already installed.
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .try_init();
    });
}
