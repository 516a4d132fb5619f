//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The domain stays synchronous; handlers own loading, concurrency and policy.

pub mod handlers;

pub use handlers::{
    EvaluateHierarchyCommand, EvaluateHierarchyHandler, EvaluateHierarchyResult,
    EvaluationSettings,
};
