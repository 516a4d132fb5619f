//! In-memory Hierarchy Source Adapter
//!
//! Serves a fixed definition. Used by tests and by callers that build
//! definitions programmatically.

use async_trait::async_trait;

use crate::domain::ahp::HierarchyDefinition;
use crate::ports::{HierarchySource, HierarchySourceError};

/// Source returning a clone of a definition held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryHierarchySource {
    definition: HierarchyDefinition,
}

impl InMemoryHierarchySource {
    pub fn new(definition: HierarchyDefinition) -> Self {
        Self { definition }
    }
}

#[async_trait]
impl HierarchySource for InMemoryHierarchySource {
    async fn load(&self) -> Result<HierarchyDefinition, HierarchySourceError> {
        Ok(self.definition.clone())
    }
}
