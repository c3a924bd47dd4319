//! Toggle configuration.
//!
//! Covers everything about a toggle except its reducer, which is code and
//! is always supplied programmatically. Configs deserialize from TOML:
//!
//! ```toml
//! initial_on = true
//! history_limit = 32
//! record_history = true
//! ```
//!
//! Validation collects every problem in one pass using
//! `stillwater::Validation` instead of stopping at the first.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found while validating a [`ToggleConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("history_limit must be at least 1 (set record_history = false to disable history)")]
    ZeroHistoryLimit,

    #[error("history_limit is set but record_history is false")]
    LimitWithoutHistory,
}

/// Errors from loading or validating configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Invalid config: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Settings for a toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Whether the switch starts on
    pub initial_on: bool,

    /// Maximum retained transitions; unbounded when absent
    pub history_limit: Option<usize>,

    /// Whether transitions are recorded at all
    pub record_history: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            initial_on: false,
            history_limit: None,
            record_history: true,
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded toggle config");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let limit_check = if self.history_limit == Some(0) {
            Validation::fail(ConfigViolation::ZeroHistoryLimit)
        } else {
            Validation::success(())
        };

        let recording_check = if self.history_limit.is_some() && !self.record_history {
            Validation::fail(ConfigViolation::LimitWithoutHistory)
        } else {
            Validation::success(())
        };

        Validation::all_vec(vec![limit_check, recording_check]).map(|_| ())
    }

    /// Return the config if valid, or every violation as one error.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
