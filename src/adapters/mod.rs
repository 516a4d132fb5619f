//! Adapters - Implementations of ports.

pub mod hierarchy;

pub use hierarchy::{FileHierarchySource, InMemoryHierarchySource};
