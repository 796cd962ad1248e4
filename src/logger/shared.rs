//! Process-wide logger instance.
//!
//! The instance is created on first access with default settings, or installed
//! once at startup with [`init_shared`]. It lives until the process exits.
//! Code that needs isolation (tests, libraries) should hold its own [`Logger`].

use std::sync::OnceLock;

use thiserror::Error;

use crate::logger::Logger;

static SHARED_LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Error)]
pub enum SharedLoggerError {
    /// The shared logger was already created, either by `init_shared` or by `shared()`.
    #[error("shared logger already initialized")]
    AlreadyInitialized,
}

/// The shared logger, created with default settings if nothing was installed.
pub fn shared() -> &'static Logger {
    SHARED_LOGGER.get_or_init(Logger::default)
}

/// Install `logger` as the shared instance.
pub fn init_shared(logger: Logger) -> Result<&'static Logger, SharedLoggerError> {
    SHARED_LOGGER
        .set(logger)
        .map_err(|_| SharedLoggerError::AlreadyInitialized)?;
    Ok(shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{LogLevel, MemorySink, Settings};

    #[test]
    fn test_shared_is_single_instance() {
        let first = shared();
        let second = shared();
        assert!(std::ptr::eq(first, second));

        let late = Logger::with_sink(Settings::default(), MemorySink::new());
        assert!(matches!(
            init_shared(late),
            Err(SharedLoggerError::AlreadyInitialized)
        ));
        // Mutations are visible through every handle.
        let before = first.level();
        first.set_level(LogLevel::Warning);
        assert_eq!(second.level(), LogLevel::Warning);
        first.set_level(before);
    }
}
