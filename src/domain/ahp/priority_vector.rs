//! Priority Vector - Normalized weights keyed by element name.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::AhpError;

/// Tolerance for the "weights sum to 1" invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A single element's weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementWeight {
    pub element: String,
    pub weight: f64,
}

impl ElementWeight {
    /// Creates a new element weight.
    pub fn new(element: impl Into<String>, weight: f64) -> Self {
        Self {
            element: element.into(),
            weight,
        }
    }
}

/// Non-negative weights over distinct elements, summing to 1.
///
/// Deserialization goes through [`PriorityVector::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ElementWeight>", into = "Vec<ElementWeight>")]
pub struct PriorityVector {
    weights: Vec<ElementWeight>,
}

impl PriorityVector {
    /// Creates a vector from weights that already sum to 1.
    ///
    /// # Errors
    /// `InvalidInput` on duplicate or empty names, negative or non-finite
    /// weights, or a sum further than [`WEIGHT_SUM_TOLERANCE`] from 1.
    pub fn new<I, S>(weights: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let vector = Self::collect(weights)?;
        let total = vector.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AhpError::invalid_input(format!(
                "priority weights must sum to 1, got {}",
                total
            )));
        }
        Ok(vector)
    }

    /// Creates a vector by dividing raw non-negative scores by their sum.
    ///
    /// # Errors
    /// `InvalidInput` on invalid entries or a zero sum.
    pub fn normalized<I, S>(scores: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut vector = Self::collect(scores)?;
        let total = vector.total();
        if !total.is_finite() || total <= 0.0 {
            return Err(AhpError::invalid_input(format!(
                "cannot normalize scores with sum {}",
                total
            )));
        }
        for entry in &mut vector.weights {
            entry.weight /= total;
        }
        Ok(vector)
    }

    fn collect<I, S>(weights: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (element, weight) in weights {
            let element = element.into();
            if element.trim().is_empty() {
                return Err(AhpError::invalid_input("priority element names cannot be empty"));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(AhpError::invalid_input(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    element, weight
                )));
            }
            if !seen.insert(element.clone()) {
                return Err(AhpError::invalid_input(format!(
                    "element '{}' appears twice in a priority vector",
                    element
                )));
            }
            entries.push(ElementWeight::new(element, weight));
        }

        if entries.is_empty() {
            return Err(AhpError::invalid_input("priority vector cannot be empty"));
        }

        Ok(Self { weights: entries })
    }

    /// Returns the weight of an element.
    pub fn get(&self, element: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.element == element)
            .map(|w| w.weight)
    }

    /// Iterates over weights in element order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementWeight> {
        self.weights.iter()
    }

    /// Returns element names in order.
    pub fn elements(&self) -> Vec<&str> {
        self.weights.iter().map(|w| w.element.as_str()).collect()
    }

    /// Returns the raw weights in element order.
    pub fn values(&self) -> Vec<f64> {
        self.weights.iter().map(|w| w.weight).collect()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false for a constructed vector; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().map(|w| w.weight).sum()
    }

    /// Returns weights sorted from heaviest to lightest.
    ///
    /// Ties keep element order.
    pub fn ranked(&self) -> Vec<&ElementWeight> {
        let mut ranked: Vec<_> = self.weights.iter().collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }

    /// Returns the heaviest element, or None on a tie for first place.
    pub fn best(&self) -> Option<&ElementWeight> {
        let ranked = self.ranked();
        match ranked.as_slice() {
            [first, second, ..]
                if (first.weight - second.weight).abs() <= WEIGHT_SUM_TOLERANCE =>
            {
                None
            }
            [first, ..] => Some(*first),
            [] => None,
        }
    }

    /// Returns true if both vectors cover the same elements, in any order.
    pub fn same_elements(&self, other: &PriorityVector) -> bool {
        let ours: HashSet<&str> = self.weights.iter().map(|w| w.element.as_str()).collect();
        let theirs: HashSet<&str> = other.weights.iter().map(|w| w.element.as_str()).collect();
        ours == theirs
    }

    /// Returns true if every component is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &PriorityVector, tolerance: f64) -> bool {
        self.same_elements(other)
            && self.weights.iter().all(|w| {
                other
                    .get(&w.element)
                    .is_some_and(|theirs| (theirs - w.weight).abs() <= tolerance)
            })
    }
}

impl TryFrom<Vec<ElementWeight>> for PriorityVector {
    type Error = AhpError;

    fn try_from(weights: Vec<ElementWeight>) -> Result<Self, Self::Error> {
        Self::new(weights.into_iter().map(|w| (w.element, w.weight)))
    }
}

impl From<PriorityVector> for Vec<ElementWeight> {
    fn from(vector: PriorityVector) -> Self {
        vector.weights
    }
}
