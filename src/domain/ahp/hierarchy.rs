//! Hierarchy - Criteria comparison plus one alternatives comparison per criterion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    AhpError, Comparison, ElementRegistry, HierarchySynthesizer, JudgmentSet, PrioritySolver,
    PriorityVector,
};

/// Default name of the criteria-level comparison.
pub const CRITERIA_COMPARISON_NAME: &str = "Criteria";

/// External definition of a two-level hierarchy.
///
/// ```yaml
/// name: Remote Fix KPI
/// criteria:
///   - { first: Cost, second: Quality, ratio: 3 }
/// alternatives:
///   Cost:
///     - { first: A, second: B, ratio: 2 }
///   Quality:
///     - { first: A, second: B, ratio: 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyDefinition {
    pub name: String,
    pub criteria: JudgmentSet,
    pub alternatives: BTreeMap<String, JudgmentSet>,
}

impl HierarchyDefinition {
    /// Creates a definition with no alternatives blocks yet.
    pub fn new(name: impl Into<String>, criteria: JudgmentSet) -> Self {
        Self {
            name: name.into(),
            criteria,
            alternatives: BTreeMap::new(),
        }
    }

    /// Adds the alternatives judgments for a criterion, builder style.
    pub fn with_alternatives(mut self, criterion: impl Into<String>, judgments: JudgmentSet) -> Self {
        self.alternatives.insert(criterion.into(), judgments);
        self
    }

    /// Replaces or extends the criteria judgments with overrides.
    pub fn with_criteria_overrides(mut self, overrides: JudgmentSet) -> Self {
        self.criteria = self.criteria.merge(overrides);
        self
    }

    /// Checks the structure without building any matrix.
    ///
    /// Returns the criteria registry on success so callers can iterate
    /// criteria in matrix order.
    ///
    /// # Errors
    /// - `InvalidInput` for malformed judgments or fewer than 2 elements
    /// - `HierarchyMismatch` for a criterion without alternatives, an
    ///   alternatives block for an unknown criterion, or differing
    ///   alternative sets
    pub fn validate(&self) -> Result<ElementRegistry, AhpError> {
        if self.name.trim().is_empty() {
            return Err(AhpError::invalid_input("hierarchy name cannot be empty"));
        }

        self.criteria.validate()?;
        let criteria = ElementRegistry::from_judgments(&self.criteria)?;

        for criterion in self.alternatives.keys() {
            if !criteria.contains(criterion) {
                return Err(AhpError::hierarchy_mismatch(format!(
                    "alternatives block for '{}' which is not a criterion",
                    criterion
                )));
            }
        }

        let mut reference: Option<(&str, ElementRegistry)> = None;
        for criterion in criteria.names() {
            let judgments = self.alternatives.get(criterion).ok_or_else(|| {
                AhpError::hierarchy_mismatch(format!(
                    "criterion '{}' has no alternatives block",
                    criterion
                ))
            })?;

            judgments.validate()?;
            let alternatives = ElementRegistry::from_judgments(judgments)?;

            if let Some((reference_name, reference_set)) = &reference {
                if !alternatives.same_members(reference_set) {
                    return Err(AhpError::hierarchy_mismatch(format!(
                        "alternatives under '{}' ({}) differ from those under '{}' ({})",
                        criterion,
                        alternatives.names().join(", "),
                        reference_name,
                        reference_set.names().join(", ")
                    )));
                }
                continue;
            }
            reference = Some((criterion.as_str(), alternatives));
        }

        Ok(criteria)
    }
}

/// A fully evaluated two-level hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    name: String,
    criteria: Comparison,
    alternatives: Vec<Comparison>,
}

impl Hierarchy {
    /// Validates and evaluates every comparison of a definition in turn.
    pub fn build(definition: &HierarchyDefinition, solver: &PrioritySolver) -> Result<Self, AhpError> {
        let criteria_order = definition.validate()?;

        let criteria = Comparison::evaluate(CRITERIA_COMPARISON_NAME, &definition.criteria, solver)?;
        let alternatives = criteria_order
            .names()
            .iter()
            .map(|criterion| {
                // validate() guarantees a block for every criterion.
                let judgments = definition.alternatives.get(criterion).ok_or_else(|| {
                    AhpError::hierarchy_mismatch(format!(
                        "criterion '{}' has no alternatives block",
                        criterion
                    ))
                })?;
                Comparison::evaluate(criterion.clone(), judgments, solver)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_parts(definition.name.clone(), criteria, alternatives)
    }

    /// Assembles a hierarchy from comparisons evaluated elsewhere.
    ///
    /// Each alternatives comparison is matched to its criterion by name.
    /// They are stored in criteria order.
    ///
    /// # Errors
    /// `HierarchyMismatch` if coverage of criteria is not one-to-one or
    /// alternative sets differ.
    pub fn from_parts(
        name: impl Into<String>,
        criteria: Comparison,
        mut alternatives: Vec<Comparison>,
    ) -> Result<Self, AhpError> {
        let order: Vec<String> = criteria
            .priorities()
            .elements()
            .into_iter()
            .map(str::to_string)
            .collect();

        if alternatives.len() != order.len() {
            return Err(AhpError::hierarchy_mismatch(format!(
                "{} criteria but {} alternatives comparisons",
                order.len(),
                alternatives.len()
            )));
        }

        let mut ordered = Vec::with_capacity(order.len());
        for criterion in &order {
            let position = alternatives
                .iter()
                .position(|c| c.name() == criterion)
                .ok_or_else(|| {
                    AhpError::hierarchy_mismatch(format!(
                        "criterion '{}' has no alternatives comparison",
                        criterion
                    ))
                })?;
            ordered.push(alternatives.swap_remove(position));
        }

        let hierarchy = Self {
            name: name.into(),
            criteria,
            alternatives: ordered,
        };

        // Surfaces alternative-set mismatches before anyone asks for global weights.
        hierarchy.synthesize()?;
        Ok(hierarchy)
    }

    /// Returns the hierarchy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the criteria comparison.
    pub fn criteria(&self) -> &Comparison {
        &self.criteria
    }

    /// Returns the alternatives comparisons in criteria order.
    pub fn alternatives(&self) -> &[Comparison] {
        &self.alternatives
    }

    /// Returns the alternatives comparison of a criterion.
    pub fn alternatives_for(&self, criterion: &str) -> Option<&Comparison> {
        self.alternatives.iter().find(|c| c.name() == criterion)
    }

    /// Iterates the criteria comparison followed by every alternatives comparison.
    pub fn comparisons(&self) -> impl Iterator<Item = &Comparison> {
        std::iter::once(&self.criteria).chain(self.alternatives.iter())
    }

    /// Comparisons whose consistency ratio exceeds `threshold`.
    pub fn inconsistent_comparisons(&self, threshold: f64) -> Vec<&Comparison> {
        self.comparisons()
            .filter(|c| !c.is_consistent(threshold))
            .collect()
    }

    /// Signals `InconsistentJudgments` for the first comparison over `threshold`.
    pub fn ensure_consistent(&self, threshold: f64) -> Result<(), AhpError> {
        self.comparisons()
            .try_for_each(|c| c.ensure_consistent(threshold))
    }

    /// Computes global alternative weights.
    pub fn synthesize(&self) -> Result<PriorityVector, AhpError> {
        let blocks: Vec<(&str, &PriorityVector)> = self
            .alternatives
            .iter()
            .map(|c| (c.name(), c.priorities()))
            .collect();
        HierarchySynthesizer::synthesize(self.criteria.priorities(), &blocks)
    }
}
