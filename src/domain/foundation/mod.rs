//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and value objects shared by the
//! AHP engine and the application layer.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use timestamp::Timestamp;
