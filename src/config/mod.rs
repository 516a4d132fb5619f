//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_SHERPA` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use ahp_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Consistency threshold {}", config.consistency.threshold);
//! ```

mod consistency;
mod error;
mod logging;
mod output;
mod solver;

pub use consistency::ConsistencyConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use solver::{SolverConfig, MAX_PRECISION};

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::handlers::EvaluationSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Priority derivation (method, tolerance, iteration cap, precision)
    #[serde(default)]
    pub solver: SolverConfig,

    /// Consistency gate (threshold, reject or warn)
    #[serde(default)]
    pub consistency: ConsistencyConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report format
    #[serde(default)]
    pub output: OutputConfig,

    /// Hierarchy definition file (YAML or JSON). Built-in presets when unset.
    #[serde(default)]
    pub hierarchy_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_SHERPA__SOLVER__MAX_ITERATIONS=500` -> `solver.max_iterations = 500`
    /// - `AHP_SHERPA__CONSISTENCY__POLICY=warn` -> `consistency.policy = warn`
    /// - `AHP_SHERPA__HIERARCHY_PATH=./kpi.yaml` -> `hierarchy_path = ./kpi.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solver.validate()?;
        self.consistency.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Settings handed to the evaluation handler
    pub fn evaluation_settings(&self) -> EvaluationSettings {
        EvaluationSettings {
            solver: self.solver.settings(),
            consistency_threshold: self.consistency.threshold,
            policy: self.consistency.policy,
            precision: self.solver.precision,
        }
    }
}
