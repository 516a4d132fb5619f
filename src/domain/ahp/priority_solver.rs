//! Priority Vector Solver - Principal eigenvector and geometric-mean weights.
//!
//! # Algorithm
//!
//! The default method is power iteration: start from a positive vector,
//! repeatedly multiply by the comparison matrix and renormalize by the sum
//! norm until the largest component change drops below the tolerance. A
//! positive matrix has a unique dominant eigenvector (Perron), so the loop
//! converges; the iteration cap guarantees termination regardless.
//!
//! `lambda_max` is recovered as the mean of `(M·w)_i / w_i`.
//!
//! The geometric-mean method normalizes the n-th root of each row product.
//! It matches the eigenvector method exactly on consistent matrices.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AhpError, ComparisonMatrix, PriorityVector};

/// Default convergence tolerance on the largest component change.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for power iteration.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// How weights are derived from a comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMethod {
    /// Principal right eigenvector via power iteration.
    #[default]
    Eigenvector,
    /// Normalized geometric mean of each row.
    GeometricMean,
}

/// Solver tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    #[serde(default)]
    pub method: PriorityMethod,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            method: PriorityMethod::default(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Output of a solve: weights plus the principal eigenvalue estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub priorities: PriorityVector,
    pub lambda_max: f64,
    /// Power iterations used; zero for the geometric-mean method.
    pub iterations: usize,
}

/// Derives priority vectors from comparison matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrioritySolver {
    settings: SolverSettings,
}

impl PrioritySolver {
    /// Creates a solver with the given settings.
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Returns the solver settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solves with the configured method.
    ///
    /// # Errors
    /// `NonConvergence` if power iteration exhausts the cap.
    pub fn solve(&self, matrix: &ComparisonMatrix) -> Result<Solution, AhpError> {
        match self.settings.method {
            PriorityMethod::Eigenvector => {
                let n = matrix.size();
                self.power_iteration(matrix, DVector::from_element(n, 1.0))
            }
            PriorityMethod::GeometricMean => self.geometric_mean(matrix),
        }
    }

    /// Runs power iteration from a caller-supplied starting vector.
    ///
    /// # Errors
    /// `InvalidInput` if `start` has the wrong length or a component that is
    /// not finite and positive. `NonConvergence` if the cap is exhausted.
    pub fn solve_from(&self, matrix: &ComparisonMatrix, start: &[f64]) -> Result<Solution, AhpError> {
        if start.len() != matrix.size() {
            return Err(AhpError::invalid_input(format!(
                "starting vector has {} components, matrix has {} elements",
                start.len(),
                matrix.size()
            )));
        }
        if start.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(AhpError::invalid_input(
                "starting vector components must be positive",
            ));
        }

        self.power_iteration(matrix, DVector::from_column_slice(start))
    }

    fn power_iteration(
        &self,
        matrix: &ComparisonMatrix,
        start: DVector<f64>,
    ) -> Result<Solution, AhpError> {
        let values = matrix.values();
        let mut weights = normalize_by_sum(start)?;
        let mut residual = f64::INFINITY;

        for iteration in 1..=self.settings.max_iterations {
            let next = normalize_by_sum(values * &weights)?;
            residual = (&next - &weights).amax();
            weights = next;

            if residual < self.settings.tolerance {
                let lambda_max = principal_eigenvalue(matrix, &weights);
                debug!(
                    size = matrix.size(),
                    iterations = iteration,
                    lambda_max,
                    "Power iteration converged"
                );
                return Ok(Solution {
                    priorities: to_priority_vector(matrix, &weights)?,
                    lambda_max,
                    iterations: iteration,
                });
            }
        }

        Err(AhpError::NonConvergence {
            iterations: self.settings.max_iterations,
            residual,
        })
    }

    fn geometric_mean(&self, matrix: &ComparisonMatrix) -> Result<Solution, AhpError> {
        let n = matrix.size() as f64;

        // Mean of logs keeps large row products from overflowing.
        let roots = DVector::from_iterator(
            matrix.size(),
            matrix
                .values()
                .row_iter()
                .map(|row| (row.iter().map(|v| v.ln()).sum::<f64>() / n).exp()),
        );
        let weights = normalize_by_sum(roots)?;
        let lambda_max = principal_eigenvalue(matrix, &weights);

        Ok(Solution {
            priorities: to_priority_vector(matrix, &weights)?,
            lambda_max,
            iterations: 0,
        })
    }
}

/// Mean of `(M·w)_i / w_i` over all components.
pub fn principal_eigenvalue(matrix: &ComparisonMatrix, weights: &DVector<f64>) -> f64 {
    let product = matrix.values() * weights;
    let n = weights.len() as f64;
    product
        .iter()
        .zip(weights.iter())
        .map(|(mw, w)| mw / w)
        .sum::<f64>()
        / n
}

fn normalize_by_sum(vector: DVector<f64>) -> Result<DVector<f64>, AhpError> {
    let total = vector.sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(AhpError::invalid_input(format!(
            "cannot normalize a vector with sum {}",
            total
        )));
    }
    Ok(vector / total)
}

fn to_priority_vector(
    matrix: &ComparisonMatrix,
    weights: &DVector<f64>,
) -> Result<PriorityVector, AhpError> {
    PriorityVector::normalized(
        matrix
            .elements()
            .names()
            .iter()
            .cloned()
            .zip(weights.iter().copied()),
    )
}
