//! Consistency gate configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{ConsistencyPolicy, CONSISTENCY_THRESHOLD};

/// Consistency configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConsistencyConfig {
    /// Largest acceptable consistency ratio
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// What to do with comparisons above the threshold
    #[serde(default)]
    pub policy: ConsistencyPolicy,
}

impl ConsistencyConfig {
    /// Validate consistency configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ValidationError::InvalidThreshold);
        }
        Ok(())
    }
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            policy: ConsistencyPolicy::default(),
        }
    }
}

fn default_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}
