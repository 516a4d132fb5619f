//! Consistency Checker - Saaty consistency index and ratio.

use serde::{Deserialize, Serialize};

use super::{AhpError, ComparisonMatrix};

/// Canonical Saaty acceptance threshold for the consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Saaty random index, `RANDOM_INDEX[n - 1]` for n = 1..=15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// What to do when a comparison exceeds the consistency threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyPolicy {
    /// Refuse synthesis with `InconsistentJudgments`.
    #[default]
    Reject,
    /// Log a warning and continue.
    Warn,
}

/// Consistency measures of one comparison matrix.
///
/// `consistency_index` is floored at 0, so neither it nor
/// `consistency_ratio` is ever negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub n: usize,
}

impl ConsistencyResult {
    /// Returns true if the ratio does not exceed `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.consistency_ratio <= threshold
    }
}

/// Consistency index/ratio computations.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Returns the random index for a matrix of size `n`.
    ///
    /// Sizes beyond the table reuse its last entry.
    pub fn random_index(n: usize) -> f64 {
        match n {
            0 => 0.0,
            n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
            _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
        }
    }

    /// Checks a matrix given its principal eigenvalue.
    pub fn check(matrix: &ComparisonMatrix, lambda_max: f64) -> ConsistencyResult {
        Self::evaluate(matrix.size(), lambda_max)
    }

    /// Computes CI and CR for size `n`.
    ///
    /// # Edge Cases
    /// - `n < 2`: CI is 0
    /// - `RI(n) = 0` (n ≤ 2): CR is 0
    /// - Rounding can leave `lambda_max` a hair below `n`; CI is floored at 0
    pub fn evaluate(n: usize, lambda_max: f64) -> ConsistencyResult {
        let consistency_index = if n < 2 {
            0.0
        } else {
            ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
        };

        let random_index = Self::random_index(n);
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        ConsistencyResult {
            lambda_max,
            consistency_index,
            consistency_ratio,
            n,
        }
    }

    /// Signals `InconsistentJudgments` when the ratio exceeds `threshold`.
    pub fn ensure_acceptable(
        comparison: &str,
        result: &ConsistencyResult,
        threshold: f64,
    ) -> Result<(), AhpError> {
        if result.is_acceptable(threshold) {
            Ok(())
        } else {
            Err(AhpError::InconsistentJudgments {
                comparison: comparison.to_string(),
                consistency_ratio: result.consistency_ratio,
                threshold,
            })
        }
    }
}
