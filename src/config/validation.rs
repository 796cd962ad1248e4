//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the timestamp pattern is something chrono can render
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::logger::format::is_valid_timestamp_format;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("timestamp_format {0:?} is not a valid strftime pattern")]
    InvalidTimestampFormat(String),

    #[error("timestamp_format is empty while display.show_timestamp is enabled")]
    EmptyTimestampFormat,

    #[error("separator must not contain a line break")]
    SeparatorLineBreak,
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timestamp_format.is_empty() {
        if config.display.show_timestamp {
            errors.push(ValidationError::EmptyTimestampFormat);
        }
    } else if !is_valid_timestamp_format(&config.timestamp_format) {
        errors.push(ValidationError::InvalidTimestampFormat(
            config.timestamp_format.clone(),
        ));
    }

    if config.separator.contains(['\n', '\r']) {
        errors.push(ValidationError::SeparatorLineBreak);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = LoggerConfig {
            timestamp_format: "%Y %Q".to_string(),
            separator: "\n".to_string(),
            ..LoggerConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::SeparatorLineBreak));
        assert!(matches!(errors[0], ValidationError::InvalidTimestampFormat(_)));
    }

    #[test]
    fn test_empty_timestamp_format_only_matters_when_shown() {
        let mut config = LoggerConfig {
            timestamp_format: String::new(),
            ..LoggerConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyTimestampFormat])
        );

        config.display.show_timestamp = false;
        assert!(validate_config(&config).is_ok());
    }
}
