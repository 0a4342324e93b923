//! Configuration validation module.
//!
//! Validates configuration values up front and reports every problem at
//! once rather than failing on the first.

use crate::AppConfig;
use deyal_core::telemetry::LoggingConfig;
use deyal_domain::ReputationPolicy;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Application name is empty.
    EmptyAppName,
    /// A log filter directive names an unknown level.
    InvalidLogLevel { value: String },
    /// A reputation weight is negative or not finite.
    InvalidWeight { name: String, value: f64 },
    /// Both reputation weights are zero.
    NoReputationWeight,
    /// Seed path is set but empty.
    EmptySeedPath,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAppName => write!(f, "Application name cannot be empty"),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error, off)",
                    value
                )
            }
            Self::InvalidWeight { name, value } => {
                write!(f, "Reputation weight '{}' must be finite and non-negative, got {}", name, value)
            }
            Self::NoReputationWeight => {
                write!(f, "At least one reputation weight must be positive")
            }
            Self::EmptySeedPath => write!(f, "store.seed_path is set but empty"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error", "off"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.app.name.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyAppName);
        }
        Self::validate_logging(&config.logging, &mut errors);
        Self::validate_reputation(&config.reputation, &mut errors);
        if config.store.seed_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            errors.push(ConfigValidationError::EmptySeedPath);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks each `target=level` or bare `level` directive.
    fn validate_logging(config: &LoggingConfig, errors: &mut Vec<ConfigValidationError>) {
        for directive in config.level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let level = directive.rsplit('=').next().unwrap_or(directive);
            if !Self::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                errors.push(ConfigValidationError::InvalidLogLevel {
                    value: directive.to_string(),
                });
            }
        }
    }

    fn validate_reputation(policy: &ReputationPolicy, errors: &mut Vec<ConfigValidationError>) {
        let weights = [
            ("client_weight", policy.client_weight),
            ("contractor_weight", policy.contractor_weight),
        ];

        let mut any_invalid = false;
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                any_invalid = true;
                errors.push(ConfigValidationError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if !any_invalid && policy.client_weight == 0.0 && policy.contractor_weight == 0.0 {
            errors.push(ConfigValidationError::NoReputationWeight);
        }
    }
}
