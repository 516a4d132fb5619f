//! Element Registry - Stable, first-seen ordering of compared elements.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{AhpError, JudgmentSet};

/// The distinct elements of one comparison scope, in first-seen order.
///
/// The position of a name is its row/column index in the comparison matrix.
/// Deserialization goes through [`ElementRegistry::from_names`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ElementRegistry {
    names: Vec<String>,
}

impl ElementRegistry {
    /// Collects every element referenced on either side of any judgment.
    ///
    /// # Errors
    /// `InvalidInput` when fewer than two distinct elements are found.
    pub fn from_judgments(judgments: &JudgmentSet) -> Result<Self, AhpError> {
        Self::from_names(
            judgments
                .iter()
                .flat_map(|j| [j.first.as_str(), j.second.as_str()]),
        )
    }

    /// Registers names in the given order, dropping repeats.
    ///
    /// # Errors
    /// `InvalidInput` on an empty name or when fewer than two distinct
    /// names remain.
    pub fn from_names<I, S>(names: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self { names: Vec::new() };

        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                return Err(AhpError::invalid_input("element names cannot be empty"));
            }
            if !registry.contains(name) {
                registry.names.push(name.to_string());
            }
        }

        if registry.names.len() < 2 {
            return Err(AhpError::invalid_input(format!(
                "a comparison needs at least 2 distinct elements, found {}",
                registry.names.len()
            )));
        }

        Ok(registry)
    }

    /// Returns the matrix index of an element.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns true if the element is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the registered names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the element name at an index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed registry; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if both registries hold the same names, in any order.
    pub fn same_members(&self, other: &ElementRegistry) -> bool {
        let ours: HashSet<&str> = self.names.iter().map(String::as_str).collect();
        let theirs: HashSet<&str> = other.names.iter().map(String::as_str).collect();
        ours == theirs
    }
}

impl TryFrom<Vec<String>> for ElementRegistry {
    type Error = AhpError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<ElementRegistry> for Vec<String> {
    fn from(registry: ElementRegistry) -> Self {
        registry.names
    }
}
