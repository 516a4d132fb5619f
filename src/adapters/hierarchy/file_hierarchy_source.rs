//! File-based Hierarchy Source Adapter
//!
//! Reads a hierarchy definition from a YAML (`.yaml`, `.yml`) or JSON
//! (`.json`) file, choosing the parser by extension.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::ahp::HierarchyDefinition;
use crate::ports::{HierarchySource, HierarchySourceError};

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefinitionFormat {
    Yaml,
    Json,
}

impl DefinitionFormat {
    fn from_path(path: &Path) -> Result<Self, HierarchySourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(HierarchySourceError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Loads a hierarchy definition from disk.
#[derive(Debug, Clone)]
pub struct FileHierarchySource {
    path: PathBuf,
}

impl FileHierarchySource {
    /// Create a source for the given file
    ///
    /// # Example
    /// ```ignore
    /// let source = FileHierarchySource::new("./config/kpi-hierarchy.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HierarchySource for FileHierarchySource {
    async fn load(&self) -> Result<HierarchyDefinition, HierarchySourceError> {
        let format = DefinitionFormat::from_path(&self.path)?;

        match fs::try_exists(&self.path).await {
            Ok(true) => {}
            Ok(false) => {
                return Err(HierarchySourceError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(HierarchySourceError::Io(e.to_string())),
        }

        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HierarchySourceError::Io(e.to_string()))?;

        let definition = match format {
            DefinitionFormat::Yaml => serde_yaml::from_str(&contents)
                .map_err(|e| HierarchySourceError::Parse(e.to_string()))?,
            DefinitionFormat::Json => serde_json::from_str(&contents)
                .map_err(|e| HierarchySourceError::Parse(e.to_string()))?,
        };

        debug!(path = %self.path.display(), "Loaded hierarchy definition");
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML: &str = r#"
name: Vendor
criteria:
  - { first: Cost, second: Quality, ratio: 3 }
alternatives:
  Cost:
    - { first: A, second: B, ratio: 4 }
  Quality:
    - { first: B, second: A, ratio: 2 }
"#;

    #[tokio::test]
    async fn loads_yaml_definition() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hierarchy.yaml");
        std::fs::write(&path, YAML).unwrap();

        let definition = FileHierarchySource::new(&path).load().await.unwrap();
        assert_eq!(definition.name, "Vendor");
        assert_eq!(definition.alternatives.len(), 2);
    }

    #[tokio::test]
    async fn loads_json_definition() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hierarchy.json");
        let json = r#"{
            "name": "Vendor",
            "criteria": [{"first": "Cost", "second": "Quality", "ratio": 3}],
            "alternatives": {
                "Cost": [{"first": "A", "second": "B", "ratio": 4}],
                "Quality": [{"first": "B", "second": "A", "ratio": 2}]
            }
        }"#;
        std::fs::write(&path, json).unwrap();

        let definition = FileHierarchySource::new(&path).load().await.unwrap();
        assert_eq!(definition.criteria.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = FileHierarchySource::new(dir.path().join("absent.yaml")).load().await;
        assert!(matches!(result, Err(HierarchySourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn unreadable_location_is_io_error_not_missing() {
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        std::fs::write(&not_a_dir, "x").unwrap();

        // A path through a regular file fails metadata lookup with ENOTDIR.
        let result = FileHierarchySource::new(not_a_dir.join("hierarchy.yaml")).load().await;
        assert!(matches!(result, Err(HierarchySourceError::Io(_))));
    }

    #[tokio::test]
    async fn unknown_extension_is_unsupported() {
        let result = FileHierarchySource::new("hierarchy.toml").load().await;
        assert!(matches!(result, Err(HierarchySourceError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yml");
        std::fs::write(&path, "name: [unterminated").unwrap();

        let result = FileHierarchySource::new(&path).load().await;
        assert!(matches!(result, Err(HierarchySourceError::Parse(_))));
    }
}
