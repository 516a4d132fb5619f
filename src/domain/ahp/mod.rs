//! AHP Module - Analytic Hierarchy Process engine.
//!
//! Pure, synchronous domain services that turn pairwise judgments into
//! priorities and rank alternatives across a criteria hierarchy.
//!
//! # Components
//!
//! - `ElementRegistry` - First-seen ordering of compared elements
//! - `ComparisonMatrix` - Reciprocal matrix built from sparse judgments
//! - `PrioritySolver` - Power-iteration eigenvector or geometric-mean weights
//! - `ConsistencyChecker` - Saaty CI/CR against the random index table
//! - `HierarchySynthesizer` - Weighted aggregation into global priorities
//! - `Hierarchy` - Criteria comparison plus per-criterion alternatives
//!
//! # Design Philosophy
//!
//! Everything here is a value computed from judgments. There is no I/O and
//! no shared state, so independent comparisons can be solved on separate
//! threads and a changed judgment means rebuilding, never mutating.

mod comparison;
mod comparison_matrix;
mod consistency;
mod element_registry;
mod errors;
mod hierarchy;
mod judgment;
pub mod presets;
mod priority_solver;
mod priority_vector;
mod report;
mod synthesizer;

// Re-export all public types
pub use comparison::Comparison;
pub use comparison_matrix::ComparisonMatrix;
pub use consistency::{
    ConsistencyChecker, ConsistencyPolicy, ConsistencyResult, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use element_registry::ElementRegistry;
pub use errors::AhpError;
pub use hierarchy::{Hierarchy, HierarchyDefinition, CRITERIA_COMPARISON_NAME};
pub use judgment::{Judgment, JudgmentSet, SAATY_MAX, SAATY_MIN};
pub use priority_solver::{
    principal_eigenvalue, PriorityMethod, PrioritySolver, Solution, SolverSettings,
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
pub use priority_vector::{ElementWeight, PriorityVector, WEIGHT_SUM_TOLERANCE};
pub use report::{round_to, ComparisonReport, ElementSummary, HierarchyReport, DEFAULT_PRECISION};
pub use synthesizer::HierarchySynthesizer;
