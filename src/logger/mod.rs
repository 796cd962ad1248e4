//! Leveled console logger.
//!
//! # Data Flow
//! ```text
//! caller (items + CallSite)
//!     → Logger::{info,debug,warning,error,log}
//!         build-mode gate (info/debug/warning only)
//!         threshold gate  (error bypasses it)
//!     → format.rs (render one line from the current Settings snapshot)
//!     → sink.rs (single write, stdout by default)
//! ```
//!
//! # Design Decisions
//! - Settings are an immutable snapshot swapped atomically (arc-swap); a call reads
//!   exactly one snapshot, setters publish a new one
//! - Logging never fails: bad items degrade to a placeholder, write errors are dropped
//! - Error severity always reaches the sink

pub mod call_site;
pub mod format;
pub mod level;
pub mod shared;
pub mod sink;

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::Local;

use crate::config::schema::LoggerConfig;

pub use call_site::{short_file_name, CallSite};
pub use format::{DisplayConfig, LabelStyle, LineFormat, DEFAULT_TIMESTAMP_FORMAT, UNRENDERABLE};
pub use level::{BuildMode, LogLevel, ParseBuildModeError, ParseLevelError};
pub use shared::{init_shared, shared, SharedLoggerError};
pub use sink::{LogSink, MemorySink, StdoutSink};

/// Mutable state of a [`Logger`], published as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Minimum severity emitted (error is emitted regardless).
    pub level: LogLevel,
    pub build_mode: BuildMode,
    /// Default item separator.
    pub separator: String,
    /// Default line terminator.
    pub terminator: String,
    pub format: LineFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            build_mode: BuildMode::from_env(),
            separator: " ".to_string(),
            terminator: "\n".to_string(),
            format: LineFormat::default(),
        }
    }
}

impl From<&LoggerConfig> for Settings {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            level: config.level,
            build_mode: config.build_mode.unwrap_or_else(BuildMode::from_env),
            separator: config.separator.clone(),
            terminator: config.terminator.clone(),
            format: LineFormat {
                display: config.display,
                label_style: config.label_style,
                timestamp_format: config.timestamp_format.clone(),
            },
        }
    }
}

/// A leveled logger writing one formatted line per emitted call.
pub struct Logger {
    settings: ArcSwap<Settings>,
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Logger writing to standard output.
    pub fn new(settings: Settings) -> Self {
        Self::with_sink(settings, StdoutSink)
    }

    /// Logger writing to `sink`.
    pub fn with_sink(settings: Settings, sink: impl LogSink + 'static) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
            sink: Box::new(sink),
        }
    }

    /// Logger writing to standard output, configured from a loaded config.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(Settings::from(config))
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    pub fn level(&self) -> LogLevel {
        self.settings.load().level
    }

    /// Set the minimum emitted severity.
    pub fn set_level(&self, level: LogLevel) {
        self.update(|s| s.level = level);
    }

    pub fn display(&self) -> DisplayConfig {
        self.settings.load().format.display
    }

    /// Replace the display flags.
    pub fn set_display(&self, display: DisplayConfig) {
        self.update(|s| s.format.display = display);
    }

    pub fn build_mode(&self) -> BuildMode {
        self.settings.load().build_mode
    }

    pub fn set_build_mode(&self, mode: BuildMode) {
        self.update(|s| s.build_mode = mode);
    }

    pub fn set_label_style(&self, style: LabelStyle) {
        self.update(|s| s.format.label_style = style);
    }

    /// Publish settings derived from a (re)loaded config in one swap.
    pub fn apply_config(&self, config: &LoggerConfig) {
        let settings = Settings::from(config);
        tracing::debug!(
            level = %settings.level,
            build_mode = %settings.build_mode,
            "Logger settings applied"
        );
        self.settings.store(Arc::new(settings));
    }

    fn update(&self, f: impl Fn(&mut Settings)) {
        self.settings.rcu(|current| {
            let mut next = Settings::clone(current);
            f(&mut next);
            next
        });
    }

    /// Whether a call at `level` passes the threshold. Error always does.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        passes_threshold(level, self.settings.load().level)
    }

    /// Log `items` at `level` with the configured separator and terminator.
    ///
    /// Threshold-checked, except that error is always emitted. The build mode is not
    /// consulted here; see [`Logger::info`] and friends.
    pub fn log(&self, level: LogLevel, items: &[&dyn fmt::Display], site: &CallSite<'_>) {
        let settings = self.settings.load();
        if passes_threshold(level, settings.level) {
            self.emit(&settings, level, items, &settings.separator, &settings.terminator, site);
        }
    }

    /// Like [`Logger::log`] with an explicit separator and terminator.
    pub fn log_with(
        &self,
        level: LogLevel,
        items: &[&dyn fmt::Display],
        separator: &str,
        terminator: &str,
        site: &CallSite<'_>,
    ) {
        let settings = self.settings.load();
        if passes_threshold(level, settings.level) {
            self.emit(&settings, level, items, separator, terminator, site);
        }
    }

    /// Info line; dropped in release builds.
    pub fn info(&self, items: &[&dyn fmt::Display], site: &CallSite<'_>) {
        self.gated(LogLevel::Info, items, None, site);
    }

    /// Debug line; dropped in release builds.
    pub fn debug(&self, items: &[&dyn fmt::Display], site: &CallSite<'_>) {
        self.gated(LogLevel::Debug, items, None, site);
    }

    /// Warning line; dropped in release builds.
    pub fn warning(&self, items: &[&dyn fmt::Display], site: &CallSite<'_>) {
        self.gated(LogLevel::Warning, items, None, site);
    }

    /// Error line; emitted in every build mode at every threshold.
    pub fn error(&self, items: &[&dyn fmt::Display], site: &CallSite<'_>) {
        self.always(items, None, site);
    }

    /// [`Logger::info`] with an explicit separator and terminator.
    pub fn info_with(
        &self,
        items: &[&dyn fmt::Display],
        separator: &str,
        terminator: &str,
        site: &CallSite<'_>,
    ) {
        self.gated(LogLevel::Info, items, Some((separator, terminator)), site);
    }

    /// [`Logger::debug`] with an explicit separator and terminator.
    pub fn debug_with(
        &self,
        items: &[&dyn fmt::Display],
        separator: &str,
        terminator: &str,
        site: &CallSite<'_>,
    ) {
        self.gated(LogLevel::Debug, items, Some((separator, terminator)), site);
    }

    /// [`Logger::warning`] with an explicit separator and terminator.
    pub fn warning_with(
        &self,
        items: &[&dyn fmt::Display],
        separator: &str,
        terminator: &str,
        site: &CallSite<'_>,
    ) {
        self.gated(LogLevel::Warning, items, Some((separator, terminator)), site);
    }

    /// [`Logger::error`] with an explicit separator and terminator.
    pub fn error_with(
        &self,
        items: &[&dyn fmt::Display],
        separator: &str,
        terminator: &str,
        site: &CallSite<'_>,
    ) {
        self.always(items, Some((separator, terminator)), site);
    }

    fn gated(
        &self,
        level: LogLevel,
        items: &[&dyn fmt::Display],
        delimiters: Option<(&str, &str)>,
        site: &CallSite<'_>,
    ) {
        let settings = self.settings.load();
        if settings.build_mode.is_debug() && settings.level <= level {
            let (separator, terminator) =
                delimiters.unwrap_or((settings.separator.as_str(), settings.terminator.as_str()));
            self.emit(&settings, level, items, separator, terminator, site);
        }
    }

    fn always(
        &self,
        items: &[&dyn fmt::Display],
        delimiters: Option<(&str, &str)>,
        site: &CallSite<'_>,
    ) {
        let settings = self.settings.load();
        let (separator, terminator) =
            delimiters.unwrap_or((settings.separator.as_str(), settings.terminator.as_str()));
        self.emit(&settings, LogLevel::Error, items, separator, terminator, site);
    }

    fn emit(
        &self,
        settings: &Settings,
        level: LogLevel,
        items: &[&dyn fmt::Display],
        separator: &str,
        terminator: &str,
        site: &CallSite<'_>,
    ) {
        let mut line = settings
            .format
            .render(level, items, separator, site, Local::now());
        line.push_str(terminator);

        if let Err(e) = self.sink.write_line(&line) {
            tracing::warn!(error = %e, "Failed to write log line");
        }
    }
}

fn passes_threshold(level: LogLevel, threshold: LogLevel) -> bool {
    level == LogLevel::Error || level >= threshold
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings.load_full())
            .finish_non_exhaustive()
    }
}
