//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, timestamps)
//! - `ahp` - Judgments, comparison matrices, priorities, consistency, synthesis

pub mod ahp;
pub mod foundation;
