//! Severity levels and build modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log call. Lower rank is more verbose.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Info = 1,
    Debug = 2,
    Warning = 3,
    Error = 4,
}

impl LogLevel {
    /// All levels in rank order.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Numeric rank (Info=1 .. Error=4).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Fixed label printed in every emitted line.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Label with the colored-heart decoration.
    pub fn emoji_label(self) -> &'static str {
        match self {
            LogLevel::Info => "💚 INFO",
            LogLevel::Debug => "💙 DEBUG",
            LogLevel::Warning => "💛 WARNING",
            LogLevel::Error => "❤️ ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0:?} (expected info, debug, warning or error)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Whether the host runs a development or a production build.
///
/// In `Release`, the `info`, `debug` and `warning` convenience calls are dropped
/// before the threshold is even consulted. `error` is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Environment variable consulted by [`BuildMode::from_env`].
    pub const ENV_VAR: &'static str = "LEVELED_LOG_BUILD_MODE";

    /// Mode matching how this crate itself was compiled.
    pub fn compiled() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    /// Read the mode from `LEVELED_LOG_BUILD_MODE`, falling back to [`BuildMode::compiled`].
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|e: ParseBuildModeError| {
                tracing::warn!(error = %e, "Ignoring {}", Self::ENV_VAR);
                Self::compiled()
            }),
            Err(_) => Self::compiled(),
        }
    }

    pub fn is_debug(self) -> bool {
        self == BuildMode::Debug
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        BuildMode::compiled()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Debug => f.write_str("debug"),
            BuildMode::Release => f.write_str("release"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown build mode: {0:?} (expected debug or release)")]
pub struct ParseBuildModeError(pub String);

impl FromStr for BuildMode {
    type Err = ParseBuildModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "dev" | "development" => Ok(BuildMode::Debug),
            "release" | "prod" | "production" => Ok(BuildMode::Release),
            _ => Err(ParseBuildModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_rank() {
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);

        for a in LogLevel::ALL {
            for b in LogLevel::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Info.label(), "INFO");
        assert_eq!(LogLevel::Debug.label(), "DEBUG");
        assert_eq!(LogLevel::Warning.label(), "WARNING");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
        assert!(LogLevel::Warning.emoji_label().ends_with("WARNING"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!(" warn ".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_parse_build_mode() {
        assert_eq!("RELEASE".parse::<BuildMode>(), Ok(BuildMode::Release));
        assert_eq!("dev".parse::<BuildMode>(), Ok(BuildMode::Debug));
        assert!("staging".parse::<BuildMode>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
            mode: BuildMode,
        }

        let w: Wrapper = toml::from_str("level = \"warning\"\nmode = \"release\"").unwrap();
        assert_eq!(w.level, LogLevel::Warning);
        assert_eq!(w.mode, BuildMode::Release);
    }
}
