//! Shared utilities for integration tests.

use leveled_log::{
    BuildMode, CallSite, DisplayConfig, LineFormat, LogLevel, Logger, MemorySink, Settings,
};

/// Call site used by the property tests.
pub const SITE: CallSite<'static> = CallSite::new("a/b/C.swift", "f()", 10);

/// A logger writing into memory, with the given threshold, mode and display flags.
#[allow(dead_code)]
pub fn capture_logger(
    level: LogLevel,
    build_mode: BuildMode,
    display: DisplayConfig,
) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let settings = Settings {
        level,
        build_mode,
        format: LineFormat {
            display,
            ..LineFormat::default()
        },
        ..Settings::default()
    };
    (Logger::with_sink(settings, sink.clone()), sink)
}

/// Emit one call through the convenience method matching `level`.
#[allow(dead_code)]
pub fn emit_convenience(logger: &Logger, level: LogLevel, item: &str) {
    match level {
        LogLevel::Info => logger.info(&[&item], &SITE),
        LogLevel::Debug => logger.debug(&[&item], &SITE),
        LogLevel::Warning => logger.warning(&[&item], &SITE),
        LogLevel::Error => logger.error(&[&item], &SITE),
    }
}
