//! Diagnostics of the logger itself.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for internal events (config loaded,
//!   reload failures, sink write errors)
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Writes to stderr so diagnostics never mix with log lines on stdout
//! - Filter configurable via `RUST_LOG`, defaulting to warnings only

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "leveled_log=warn";

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "leveled_log=debug"
    } else {
        DEFAULT_FILTER
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
