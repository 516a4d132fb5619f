//! Ports - Interfaces between the application and the outside world.

mod hierarchy_source;

pub use hierarchy_source::{HierarchySource, HierarchySourceError};
