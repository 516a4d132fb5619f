//! Solver configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{PriorityMethod, SolverSettings, DEFAULT_PRECISION};

/// Maximum decimal places a report may request.
pub const MAX_PRECISION: u32 = 12;

/// Priority derivation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Eigenvector (default) or geometric mean
    #[serde(default)]
    pub method: PriorityMethod,

    /// Convergence tolerance on the max-abs change between iterates
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration cap before reporting non-convergence
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Decimal places in reports
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl SolverConfig {
    /// Solver settings for the domain layer
    pub fn settings(&self) -> SolverSettings {
        SolverSettings {
            method: self.method,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    /// Validate solver configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ValidationError::InvalidTolerance);
        }
        if self.max_iterations == 0 {
            return Err(ValidationError::InvalidMaxIterations);
        }
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge);
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: PriorityMethod::default(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            precision: default_precision(),
        }
    }
}

fn default_tolerance() -> f64 {
    crate::domain::ahp::DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    crate::domain::ahp::DEFAULT_MAX_ITERATIONS
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.method, PriorityMethod::Eigenvector);
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.precision, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_settings_carry_method_and_limits() {
        let config = SolverConfig {
            method: PriorityMethod::GeometricMean,
            max_iterations: 50,
            ..Default::default()
        };
        let settings = config.settings();
        assert_eq!(settings.method, PriorityMethod::GeometricMean);
        assert_eq!(settings.max_iterations, 50);
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        let config = SolverConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance));

        let config = SolverConfig {
            tolerance: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let config = SolverConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxIterations));
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let config = SolverConfig {
            precision: 13,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::PrecisionTooLarge));
    }
}
