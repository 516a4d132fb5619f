//! Hierarchy source adapters.

mod file_hierarchy_source;
mod in_memory_hierarchy_source;

pub use file_hierarchy_source::FileHierarchySource;
pub use in_memory_hierarchy_source::InMemoryHierarchySource;
