//! Comparison Matrix - Complete reciprocal matrix built from sparse judgments.

use nalgebra::DMatrix;
use std::collections::HashSet;
use tracing::debug;

use super::{AhpError, ElementRegistry, JudgmentSet};

/// A positive, reciprocal n×n pairwise comparison matrix.
///
/// `values[(i, j)]` states how many times more important element `i` is
/// than element `j`. Pairs nobody judged hold `1` (equal importance).
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    elements: ElementRegistry,
    values: DMatrix<f64>,
    judged_pairs: usize,
}

impl ComparisonMatrix {
    /// Registers the elements of `judgments` and builds the matrix.
    pub fn from_judgments(judgments: &JudgmentSet) -> Result<Self, AhpError> {
        let elements = ElementRegistry::from_judgments(judgments)?;
        Self::build(elements, judgments)
    }

    /// Builds the matrix over a fixed element order.
    ///
    /// Judgments are applied in iteration order, so a later judgment on the
    /// same unordered pair overwrites an earlier one regardless of direction.
    ///
    /// # Errors
    /// `InvalidInput` for a malformed judgment or one naming an element
    /// outside `elements`.
    pub fn build(elements: ElementRegistry, judgments: &JudgmentSet) -> Result<Self, AhpError> {
        judgments.validate()?;

        let n = elements.len();
        let mut values = DMatrix::from_element(n, n, 1.0);
        let mut judged: HashSet<(usize, usize)> = HashSet::new();

        for judgment in judgments {
            let i = Self::require_index(&elements, &judgment.first)?;
            let j = Self::require_index(&elements, &judgment.second)?;

            // Forward entry is re-derived from the stored reciprocal so that
            // both directions are exact reciprocals of each other in f64.
            let backward = 1.0 / judgment.ratio;
            values[(i, j)] = 1.0 / backward;
            values[(j, i)] = backward;

            judged.insert((i.min(j), i.max(j)));
        }

        let matrix = Self {
            elements,
            values,
            judged_pairs: judged.len(),
        };

        debug!(
            size = n,
            judged_pairs = matrix.judged_pairs,
            unjudged_pairs = matrix.unjudged_pairs(),
            "Built comparison matrix"
        );

        Ok(matrix)
    }

    fn require_index(elements: &ElementRegistry, name: &str) -> Result<usize, AhpError> {
        elements.index_of(name).ok_or_else(|| {
            AhpError::invalid_input(format!("judgment references unknown element '{}'", name))
        })
    }

    /// Returns the number of elements (n).
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the element registry fixing row/column order.
    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }

    /// Returns the underlying matrix.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Returns the entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied()
    }

    /// Returns the ratio of element `a` over element `b`.
    pub fn ratio(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.elements.index_of(a)?;
        let j = self.elements.index_of(b)?;
        self.get(i, j)
    }

    /// Returns the matrix as row vectors.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Number of distinct unordered pairs that received a judgment.
    pub fn judged_pairs(&self) -> usize {
        self.judged_pairs
    }

    /// Number of unordered pairs left at the equal-importance default.
    pub fn unjudged_pairs(&self) -> usize {
        let n = self.size();
        n * (n - 1) / 2 - self.judged_pairs
    }

    /// Returns true if every entry is positive and `M[i][j] == 1 / M[j][i]` exactly.
    pub fn is_reciprocal(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            (0..n).all(|j| {
                let forward = self.values[(i, j)];
                forward > 0.0 && forward == 1.0 / self.values[(j, i)]
            })
        })
    }
}
