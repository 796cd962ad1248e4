//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::logger::{BuildMode, LogLevel};

/// Overrides `level` when set.
pub const LEVEL_ENV_VAR: &str = "LEVELED_LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value in {var}: {message}")]
    Env { var: &'static str, message: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, apply environment overrides and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, |var| std::env::var(var).ok())?;

    tracing::info!(
        path = %path.display(),
        level = %config.level,
        "Logger configuration loaded"
    );
    Ok(config)
}

/// Parse TOML text, apply overrides from `env`, validate.
pub fn parse_config<F>(content: &str, env: F) -> Result<LoggerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: LoggerConfig = toml::from_str(content)?;
    apply_env_overrides(&mut config, env)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply `LEVELED_LOG_LEVEL` and `LEVELED_LOG_BUILD_MODE` on top of a parsed config.
pub fn apply_env_overrides<F>(config: &mut LoggerConfig, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(LEVEL_ENV_VAR) {
        config.level = value.parse::<LogLevel>().map_err(|e| ConfigError::Env {
            var: LEVEL_ENV_VAR,
            message: e.to_string(),
        })?;
    }

    if let Some(value) = env(BuildMode::ENV_VAR) {
        let mode = value.parse::<BuildMode>().map_err(|e| ConfigError::Env {
            var: BuildMode::ENV_VAR,
            message: e.to_string(),
        })?;
        config.build_mode = Some(mode);
    }

    Ok(())
}
