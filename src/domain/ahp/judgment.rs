//! Judgments - Directed pairwise ratios and ordered judgment sets.

use serde::{Deserialize, Serialize};

use super::AhpError;

/// Lower bound of the Saaty fundamental scale (1/9).
pub const SAATY_MIN: f64 = 1.0 / 9.0;

/// Upper bound of the Saaty fundamental scale.
pub const SAATY_MAX: f64 = 9.0;

/// Slack applied at the scale edges so that a computed `1.0 / 9.0` counts as on-scale.
const SCALE_EPSILON: f64 = 1e-9;

/// "`first` is `ratio` times as important as `second`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub first: String,
    pub second: String,
    pub ratio: f64,
}

impl Judgment {
    /// Creates a new judgment.
    pub fn new(first: impl Into<String>, second: impl Into<String>, ratio: f64) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            ratio,
        }
    }

    /// Rejects empty names, self-comparisons and ratios that are not finite and positive.
    pub fn validate(&self) -> Result<(), AhpError> {
        if self.first.trim().is_empty() || self.second.trim().is_empty() {
            return Err(AhpError::invalid_input(format!(
                "judgment ('{}', '{}') has an empty element name",
                self.first, self.second
            )));
        }

        if self.first == self.second {
            return Err(AhpError::invalid_input(format!(
                "judgment compares '{}' with itself",
                self.first
            )));
        }

        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(AhpError::invalid_input(format!(
                "ratio for ('{}', '{}') must be a positive number, got {}",
                self.first, self.second, self.ratio
            )));
        }

        Ok(())
    }

    /// Returns true if the ratio lies within `[1/9, 9]`.
    pub fn is_on_saaty_scale(&self) -> bool {
        self.ratio >= SAATY_MIN - SCALE_EPSILON && self.ratio <= SAATY_MAX + SCALE_EPSILON
    }

    /// Returns true if this judgment covers the unordered pair `{a, b}`.
    pub fn covers(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    /// Returns true if both judgments cover the same unordered pair.
    pub fn same_pair(&self, other: &Judgment) -> bool {
        other.covers(&self.first, &self.second)
    }
}

/// An ordered collection of judgments.
///
/// Insertion order is significant: it fixes the element order of the
/// resulting matrix, and when the same unordered pair appears more than
/// once the later judgment wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JudgmentSet {
    judgments: Vec<Judgment>,
}

impl JudgmentSet {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from `((first, second), ratio)` entries.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ((A, B), f64)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            judgments: pairs
                .into_iter()
                .map(|((a, b), ratio)| Judgment::new(a, b, ratio))
                .collect(),
        }
    }

    /// Adds a judgment, builder style.
    pub fn with(mut self, first: impl Into<String>, second: impl Into<String>, ratio: f64) -> Self {
        self.push(Judgment::new(first, second, ratio));
        self
    }

    /// Appends a judgment. Earlier judgments on the same pair are kept
    /// and later overridden when the matrix is built.
    pub fn push(&mut self, judgment: Judgment) {
        self.judgments.push(judgment);
    }

    /// Applies overrides on top of this set.
    ///
    /// An override replaces the existing judgment on the same unordered pair
    /// in place, so element order stays stable. Overrides for new pairs are
    /// appended.
    pub fn merge(mut self, overrides: JudgmentSet) -> Self {
        for judgment in overrides.judgments {
            match self.judgments.iter_mut().find(|j| j.same_pair(&judgment)) {
                Some(existing) => *existing = judgment,
                None => self.judgments.push(judgment),
            }
        }
        self
    }

    /// Validates every judgment.
    pub fn validate(&self) -> Result<(), AhpError> {
        self.judgments.iter().try_for_each(Judgment::validate)
    }

    /// Judgments whose ratio falls outside the Saaty scale.
    pub fn out_of_scale(&self) -> Vec<&Judgment> {
        self.judgments
            .iter()
            .filter(|j| !j.is_on_saaty_scale())
            .collect()
    }

    /// Iterates over judgments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Judgment> {
        self.judgments.iter()
    }

    /// Returns the number of judgments.
    pub fn len(&self) -> usize {
        self.judgments.len()
    }

    /// Returns true if the set has no judgments.
    pub fn is_empty(&self) -> bool {
        self.judgments.is_empty()
    }
}

impl FromIterator<Judgment> for JudgmentSet {
    fn from_iter<T: IntoIterator<Item = Judgment>>(iter: T) -> Self {
        Self {
            judgments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JudgmentSet {
    type Item = &'a Judgment;
    type IntoIter = std::slice::Iter<'a, Judgment>;

    fn into_iter(self) -> Self::IntoIter {
        self.judgments.iter()
    }
}
