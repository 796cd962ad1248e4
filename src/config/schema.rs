//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::logger::{BuildMode, DisplayConfig, LabelStyle, LogLevel, DEFAULT_TIMESTAMP_FORMAT};

/// Root configuration for a logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity emitted.
    pub level: LogLevel,

    /// Build mode. When absent, taken from `LEVELED_LOG_BUILD_MODE` or the
    /// compile profile.
    pub build_mode: Option<BuildMode>,

    /// Separator placed between items.
    pub separator: String,

    /// Appended to every line.
    pub terminator: String,

    /// Plain or emoji-decorated severity labels.
    pub label_style: LabelStyle,

    /// chrono strftime pattern for the timestamp segment.
    pub timestamp_format: String,

    /// Optional line segments.
    pub display: DisplayConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            build_mode: None,
            separator: " ".to_string(),
            terminator: "\n".to_string(),
            label_style: LabelStyle::Plain,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            display: DisplayConfig::default(),
        }
    }
}
