//! Comparison - A named judgment set evaluated into weights and consistency.

use tracing::warn;

use super::{
    AhpError, ComparisonMatrix, ConsistencyChecker, ConsistencyResult, Judgment, JudgmentSet,
    PrioritySolver, PriorityVector,
};

/// One solved pairwise comparison.
///
/// Immutable once evaluated; changing a judgment means evaluating again.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    name: String,
    matrix: ComparisonMatrix,
    priorities: PriorityVector,
    consistency: ConsistencyResult,
    iterations: usize,
    scale_warnings: Vec<Judgment>,
}

impl Comparison {
    /// Builds the matrix, solves it and checks its consistency.
    ///
    /// Out-of-scale ratios and unjudged pairs are logged and kept on the
    /// comparison; inconsistency is recorded, not raised. Use
    /// [`Comparison::ensure_consistent`] to enforce the threshold.
    pub fn evaluate(
        name: impl Into<String>,
        judgments: &JudgmentSet,
        solver: &PrioritySolver,
    ) -> Result<Self, AhpError> {
        let name = name.into();
        let matrix = ComparisonMatrix::from_judgments(judgments)?;
        let solution = solver.solve(&matrix)?;
        let consistency = ConsistencyChecker::check(&matrix, solution.lambda_max);

        let scale_warnings: Vec<Judgment> = judgments.out_of_scale().into_iter().cloned().collect();
        for judgment in &scale_warnings {
            warn!(
                comparison = %name,
                first = %judgment.first,
                second = %judgment.second,
                ratio = judgment.ratio,
                "Ratio outside the Saaty 1/9..9 scale"
            );
        }

        if matrix.unjudged_pairs() > 0 {
            warn!(
                comparison = %name,
                unjudged_pairs = matrix.unjudged_pairs(),
                "Unjudged pairs assumed equally important"
            );
        }

        Ok(Self {
            name,
            matrix,
            priorities: solution.priorities,
            consistency,
            iterations: solution.iterations,
            scale_warnings,
        })
    }

    /// Returns the comparison name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the comparison matrix.
    pub fn matrix(&self) -> &ComparisonMatrix {
        &self.matrix
    }

    /// Returns the derived priority vector.
    pub fn priorities(&self) -> &PriorityVector {
        &self.priorities
    }

    /// Returns the consistency measures.
    pub fn consistency(&self) -> &ConsistencyResult {
        &self.consistency
    }

    /// Power iterations the solve took.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Judgments whose ratio fell outside the Saaty scale.
    pub fn scale_warnings(&self) -> &[Judgment] {
        &self.scale_warnings
    }

    /// Returns true if the consistency ratio does not exceed `threshold`.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency.is_acceptable(threshold)
    }

    /// Signals `InconsistentJudgments` when the ratio exceeds `threshold`.
    pub fn ensure_consistent(&self, threshold: f64) -> Result<(), AhpError> {
        ConsistencyChecker::ensure_acceptable(&self.name, &self.consistency, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::CONSISTENCY_THRESHOLD;

    #[test]
    fn evaluate_produces_weights_and_consistency() {
        let judgments = JudgmentSet::new()
            .with("A", "B", 2.0)
            .with("B", "C", 2.0)
            .with("A", "C", 4.0);

        let comparison = Comparison::evaluate("Criteria", &judgments, &PrioritySolver::default()).unwrap();

        assert_eq!(comparison.name(), "Criteria");
        assert_eq!(comparison.priorities().elements(), vec!["A", "B", "C"]);
        assert_eq!(comparison.consistency().n, 3);
        assert!(comparison.is_consistent(CONSISTENCY_THRESHOLD));
        assert!(comparison.scale_warnings().is_empty());
    }

    #[test]
    fn evaluate_records_out_of_scale_ratios() {
        let judgments = JudgmentSet::new().with("A", "B", 20.0);
        let comparison = Comparison::evaluate("Wide", &judgments, &PrioritySolver::default()).unwrap();

        assert_eq!(comparison.scale_warnings().len(), 1);
        assert_eq!(comparison.scale_warnings()[0].ratio, 20.0);
    }

    #[test]
    fn evaluate_propagates_invalid_input() {
        let judgments = JudgmentSet::new().with("A", "B", -1.0);
        let result = Comparison::evaluate("Bad", &judgments, &PrioritySolver::default());
        assert!(matches!(result, Err(AhpError::InvalidInput { .. })));
    }

    #[test]
    fn ensure_consistent_rejects_scrambled_judgments() {
        let judgments = JudgmentSet::new()
            .with("A", "B", 9.0)
            .with("B", "C", 9.0)
            .with("C", "D", 9.0)
            .with("D", "A", 9.0)
            .with("A", "C", 1.0 / 9.0)
            .with("B", "D", 1.0 / 9.0);

        let comparison = Comparison::evaluate("Scrambled", &judgments, &PrioritySolver::default()).unwrap();

        assert!(comparison.consistency().consistency_ratio > CONSISTENCY_THRESHOLD);
        assert!(matches!(
            comparison.ensure_consistent(CONSISTENCY_THRESHOLD),
            Err(AhpError::InconsistentJudgments { .. })
        ));
    }
}
