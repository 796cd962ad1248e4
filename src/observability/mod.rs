//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader / watcher / logger sink errors
//!     → tracing events
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;

pub use logging::init_tracing;
