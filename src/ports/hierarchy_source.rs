//! Hierarchy source port.
//!
//! Defines where hierarchy definitions come from (files, configuration
//! stores, test fixtures). The engine itself never reads them; the
//! application layer loads a definition and hands it to the domain.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ahp::HierarchyDefinition;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while loading a hierarchy definition.
#[derive(Debug, Clone, Error)]
pub enum HierarchySourceError {
    #[error("Hierarchy definition not found: {0}")]
    NotFound(String),

    #[error("Failed to read hierarchy definition: {0}")]
    Io(String),

    #[error("Failed to parse hierarchy definition: {0}")]
    Parse(String),

    #[error("Unsupported hierarchy definition format: {0}")]
    UnsupportedFormat(String),
}

impl From<HierarchySourceError> for DomainError {
    fn from(err: HierarchySourceError) -> Self {
        let code = match &err {
            HierarchySourceError::NotFound(_) | HierarchySourceError::Io(_) => {
                ErrorCode::SourceUnavailable
            }
            HierarchySourceError::Parse(_) | HierarchySourceError::UnsupportedFormat(_) => {
                ErrorCode::InvalidFormat
            }
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for loading hierarchy definitions.
#[async_trait]
pub trait HierarchySource: Send + Sync {
    /// Loads the definition.
    ///
    /// Structural validation is the caller's job; a source only guarantees
    /// the definition was read and parsed.
    async fn load(&self) -> Result<HierarchyDefinition, HierarchySourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_source_unavailable() {
        let err: DomainError = HierarchySourceError::NotFound("kpi.yaml".to_string()).into();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
        assert_eq!(err.message, "Hierarchy definition not found: kpi.yaml");
    }

    #[test]
    fn parse_failure_maps_to_invalid_format() {
        let err: DomainError = HierarchySourceError::Parse("missing field `name`".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
