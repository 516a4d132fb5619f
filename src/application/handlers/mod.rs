//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod ahp;

pub use ahp::{
    EvaluateHierarchyCommand, EvaluateHierarchyHandler, EvaluateHierarchyResult,
    EvaluationSettings,
};
