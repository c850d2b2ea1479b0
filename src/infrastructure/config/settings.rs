//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! (`CLOUDSHIFT_SEED`, `CLOUDSHIFT_PROJECTS`, `CLOUDSHIFT_OUTPUT_DIR`). Every
//! field has a default, so an empty document is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use cloudshift::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("cloudshift.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::application::generator::settings::{
    parse_reference_time, GeneratorSettings, DEFAULT_PROJECT_COUNT, DEFAULT_SEED,
};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `[generator] seed`.
pub const ENV_SEED: &str = "CLOUDSHIFT_SEED";
/// Environment variable overriding `[generator] projects`.
pub const ENV_PROJECTS: &str = "CLOUDSHIFT_PROJECTS";
/// Environment variable overriding `[output] directory`.
pub const ENV_OUTPUT_DIR: &str = "CLOUDSHIFT_OUTPUT_DIR";

/// Directory artifacts are written to when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// `[generator]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the random stream.
    pub seed: u64,
    /// Number of migration projects to generate.
    pub projects: usize,
    /// Pinned "now" (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`).
    ///
    /// Unset means the local clock at generation time.
    pub reference_time: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            projects: DEFAULT_PROJECT_COUNT,
            reference_time: None,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the CSV and JSON artifacts.
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Seed, project count and reference time.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Artifact destination.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - An environment override does not parse
    /// - Validation fails
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with overrides read through `env`.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_toml(content)?;
        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialize TOML content without overrides or validation.
    ///
    /// Callers layering further overrides on top must call
    /// [`Config::validate`] once they are done.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Parse and validate TOML content exactly as written, ignoring the
    /// environment.
    pub fn parse_document(content: &str) -> Result<Self> {
        let config = Self::from_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply `CLOUDSHIFT_*` overrides read through `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the variable when a
    /// numeric override does not parse.
    pub fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(ENV_SEED) {
            self.generator.seed = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: ENV_SEED,
                reason: format!("{e}"),
            })?;
        }
        if let Some(raw) = env(ENV_PROJECTS) {
            self.generator.projects =
                raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                    field: ENV_PROJECTS,
                    reason: format!("{e}"),
                })?;
        }
        if let Some(raw) = env(ENV_OUTPUT_DIR) {
            self.output.directory = raw;
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges. Runs once, after
    /// every override layer has been applied.
    pub fn validate(&self) -> Result<()> {
        if self.generator.projects == 0 {
            return Err(ConfigError::InvalidValue {
                field: "projects",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(ref raw) = self.generator.reference_time {
            parse_reference_time(raw).map_err(|reason| ConfigError::InvalidValue {
                field: "reference_time",
                reason,
            })?;
        }
        if self.output.directory.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "directory" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if !self.logging.level_is_valid() {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!("'{}' is not a valid log filter", self.logging.level),
            }
            .into());
        }
        Ok(())
    }

    /// Build generator settings from the `[generator]` section.
    pub fn generator_settings(&self) -> Result<GeneratorSettings> {
        let reference_time = match self.generator.reference_time {
            Some(ref raw) => {
                Some(
                    parse_reference_time(raw).map_err(|reason| ConfigError::InvalidValue {
                        field: "reference_time",
                        reason,
                    })?,
                )
            }
            None => None,
        };
        Ok(GeneratorSettings::new(
            self.generator.seed,
            self.generator.projects,
            reference_time,
        )?)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
