//! Hierarchy Synthesizer - Weighted aggregation of per-criterion priorities.

use super::{AhpError, PriorityVector};

/// Combines criteria weights with per-criterion alternative weights.
pub struct HierarchySynthesizer;

impl HierarchySynthesizer {
    /// Computes `global(a) = Σ_c w_c(c) * w_a(a|c)`.
    ///
    /// The result follows the alternative order of the first criterion's
    /// block. A synthesized vector can itself be passed in as one criterion's
    /// alternatives to compose deeper hierarchies.
    ///
    /// # Errors
    /// `HierarchyMismatch` if a criterion has no block, a block names an
    /// unknown criterion, or alternative sets differ between blocks.
    pub fn synthesize(
        criteria: &PriorityVector,
        alternatives: &[(&str, &PriorityVector)],
    ) -> Result<PriorityVector, AhpError> {
        for (criterion, _) in alternatives {
            if criteria.get(criterion).is_none() {
                return Err(AhpError::hierarchy_mismatch(format!(
                    "alternatives supplied for unknown criterion '{}'",
                    criterion
                )));
            }
        }

        let mut blocks = Vec::with_capacity(criteria.len());
        for criterion in criteria.iter() {
            let block = Self::block_for(&criterion.element, alternatives)?;
            blocks.push((criterion.weight, criterion.element.as_str(), block));
        }

        let ((_, reference_name, reference), rest) = blocks
            .split_first()
            .ok_or_else(|| AhpError::hierarchy_mismatch("no criteria to synthesize over"))?;
        for (_, name, block) in rest {
            if !block.same_elements(reference) {
                return Err(AhpError::hierarchy_mismatch(format!(
                    "alternatives under '{}' ({}) differ from those under '{}' ({})",
                    name,
                    block.elements().join(", "),
                    reference_name,
                    reference.elements().join(", ")
                )));
            }
        }

        let global = reference.iter().map(|alternative| {
            let score: f64 = blocks
                .iter()
                .map(|(weight, _, block)| weight * block.get(&alternative.element).unwrap_or(0.0))
                .sum();
            (alternative.element.clone(), score)
        });

        PriorityVector::normalized(global)
    }

    fn block_for<'a>(
        criterion: &str,
        alternatives: &[(&str, &'a PriorityVector)],
    ) -> Result<&'a PriorityVector, AhpError> {
        let mut matches = alternatives.iter().filter(|(name, _)| *name == criterion);
        let block = matches.next().ok_or_else(|| {
            AhpError::hierarchy_mismatch(format!(
                "no alternatives comparison for criterion '{}'",
                criterion
            ))
        })?;

        if matches.next().is_some() {
            return Err(AhpError::hierarchy_mismatch(format!(
                "criterion '{}' has more than one alternatives comparison",
                criterion
            )));
        }

        Ok(block.1)
    }
}
