//! AHP handlers.

mod evaluate_hierarchy;

pub use evaluate_hierarchy::{
    EvaluateHierarchyCommand, EvaluateHierarchyHandler, EvaluateHierarchyResult,
    EvaluationSettings,
};
