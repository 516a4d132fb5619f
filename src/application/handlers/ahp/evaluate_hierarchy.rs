//! EvaluateHierarchyHandler - Load, solve, gate and synthesize a hierarchy.
//!
//! 1. Loads the definition from a `HierarchySource`
//! 2. Applies any criteria overrides and validates the structure
//! 3. Solves every comparison concurrently on the blocking pool
//! 4. Applies the consistency policy
//! 5. Synthesizes global weights into a `HierarchyReport`

use std::sync::Arc;

use futures::future::{try_join, try_join_all};
use tracing::{info, warn};

use crate::domain::ahp::{
    AhpError, Comparison, ConsistencyPolicy, Hierarchy, HierarchyReport, JudgmentSet,
    PrioritySolver, SolverSettings, CONSISTENCY_THRESHOLD, CRITERIA_COMPARISON_NAME,
    DEFAULT_PRECISION,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::HierarchySource;

/// Tuning shared by every evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    pub solver: SolverSettings,
    pub consistency_threshold: f64,
    pub policy: ConsistencyPolicy,
    /// Decimal places in reports.
    pub precision: u32,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            solver: SolverSettings::default(),
            consistency_threshold: CONSISTENCY_THRESHOLD,
            policy: ConsistencyPolicy::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl EvaluationSettings {
    /// Applies the consistency policy to one comparison.
    ///
    /// `Reject` returns `InconsistentJudgments`; `Warn` logs and passes.
    pub fn enforce(&self, comparison: &Comparison) -> Result<(), AhpError> {
        match comparison.ensure_consistent(self.consistency_threshold) {
            Err(err) if err.is_recoverable() && self.policy == ConsistencyPolicy::Warn => {
                warn!(
                    comparison = %comparison.name(),
                    consistency_ratio = comparison.consistency().consistency_ratio,
                    threshold = self.consistency_threshold,
                    "Proceeding with inconsistent judgments: {}",
                    err
                );
                Ok(())
            }
            result => result,
        }
    }
}

/// Command to evaluate the source's hierarchy.
#[derive(Debug, Clone, Default)]
pub struct EvaluateHierarchyCommand {
    /// Criteria judgments replacing or extending the loaded ones.
    pub criteria_overrides: Option<JudgmentSet>,
}

/// Result of a successful evaluation.
pub type EvaluateHierarchyResult = HierarchyReport;

/// Handler evaluating a hierarchy definition end to end.
pub struct EvaluateHierarchyHandler {
    source: Arc<dyn HierarchySource>,
    settings: EvaluationSettings,
}

impl EvaluateHierarchyHandler {
    pub fn new(source: Arc<dyn HierarchySource>, settings: EvaluationSettings) -> Self {
        Self { source, settings }
    }

    pub async fn handle(
        &self,
        command: EvaluateHierarchyCommand,
    ) -> Result<EvaluateHierarchyResult, DomainError> {
        let mut definition = self.source.load().await?;
        if let Some(overrides) = command.criteria_overrides {
            definition = definition.with_criteria_overrides(overrides);
        }

        // Malformed structures fail here, before any matrix is built.
        definition.validate()?;

        let solver = PrioritySolver::new(self.settings.solver);
        let criteria = evaluate_on_blocking_pool(
            CRITERIA_COMPARISON_NAME.to_string(),
            definition.criteria.clone(),
            solver,
        );
        let alternatives = try_join_all(definition.alternatives.iter().map(|(criterion, judgments)| {
            evaluate_on_blocking_pool(criterion.clone(), judgments.clone(), solver)
        }));

        let (criteria, alternatives) = try_join(criteria, alternatives).await?;
        let hierarchy = Hierarchy::from_parts(definition.name.clone(), criteria, alternatives)?;

        for comparison in hierarchy.comparisons() {
            self.settings.enforce(comparison)?;
        }

        let global = hierarchy.synthesize()?;
        let report = HierarchyReport::new(
            &hierarchy,
            &global,
            self.settings.precision,
            self.settings.consistency_threshold,
        );

        info!(
            hierarchy = %report.name,
            criteria = hierarchy.criteria().priorities().len(),
            alternatives = global.len(),
            best = report.best_alternative.as_deref().unwrap_or("tie"),
            "Evaluated hierarchy"
        );

        Ok(report)
    }
}

async fn evaluate_on_blocking_pool(
    name: String,
    judgments: JudgmentSet,
    solver: PrioritySolver,
) -> Result<Comparison, DomainError> {
    let evaluated = tokio::task::spawn_blocking(move || Comparison::evaluate(name, &judgments, &solver))
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Comparison task failed: {}", e),
            )
        })?;

    evaluated.map_err(DomainError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHierarchySource;
    use crate::domain::ahp::{presets, HierarchyDefinition};

    fn settings_with(policy: ConsistencyPolicy) -> EvaluationSettings {
        EvaluationSettings {
            policy,
            ..EvaluationSettings::default()
        }
    }

    fn handler(definition: HierarchyDefinition, settings: EvaluationSettings) -> EvaluateHierarchyHandler {
        EvaluateHierarchyHandler::new(Arc::new(InMemoryHierarchySource::new(definition)), settings)
    }

    fn vendor() -> HierarchyDefinition {
        HierarchyDefinition::new("Vendor", JudgmentSet::new().with("Cost", "Quality", 1.5))
            .with_alternatives("Cost", JudgmentSet::new().with("A", "B", 7.0 / 3.0))
            .with_alternatives("Quality", JudgmentSet::new().with("B", "A", 4.0))
    }

    fn scrambled() -> JudgmentSet {
        JudgmentSet::new()
            .with("A", "B", 9.0)
            .with("B", "C", 9.0)
            .with("C", "D", 9.0)
            .with("D", "A", 9.0)
            .with("A", "C", 1.0 / 9.0)
            .with("B", "D", 1.0 / 9.0)
    }

    #[tokio::test]
    async fn evaluates_two_level_hierarchy() {
        let report = handler(vendor(), EvaluationSettings::default())
            .handle(EvaluateHierarchyCommand::default())
            .await
            .unwrap();

        // Criteria 0.6/0.4; A = 0.6*0.7 + 0.4*0.2 = 0.5
        assert_eq!(report.name, "Vendor");
        assert_eq!(report.global.len(), 2);
        assert!(report.global.iter().all(|e| (e.local_weight - 0.5).abs() < 1e-9));
        assert!(report.best_alternative.is_none());
    }

    #[tokio::test]
    async fn applies_criteria_overrides() {
        let command = EvaluateHierarchyCommand {
            criteria_overrides: Some(JudgmentSet::new().with("Quality", "Cost", 9.0)),
        };

        let report = handler(vendor(), EvaluationSettings::default())
            .handle(command)
            .await
            .unwrap();

        assert_eq!(report.best_alternative.as_deref(), Some("B"));
        assert_eq!(report.criteria.elements[0].element, "Quality");
    }

    #[tokio::test]
    async fn reject_policy_refuses_inconsistent_hierarchy() {
        let definition = HierarchyDefinition::new("Scrambled", scrambled())
            .with_alternatives("A", JudgmentSet::new().with("X", "Y", 2.0))
            .with_alternatives("B", JudgmentSet::new().with("X", "Y", 3.0))
            .with_alternatives("C", JudgmentSet::new().with("Y", "X", 2.0))
            .with_alternatives("D", JudgmentSet::new().with("X", "Y", 1.0));

        let err = handler(definition, settings_with(ConsistencyPolicy::Reject))
            .handle(EvaluateHierarchyCommand::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InconsistentJudgments);
        assert_eq!(err.details.get("comparison"), Some(&"Criteria".to_string()));
    }

    #[tokio::test]
    async fn warn_policy_proceeds_with_inconsistent_hierarchy() {
        let definition = HierarchyDefinition::new("Scrambled", scrambled())
            .with_alternatives("A", JudgmentSet::new().with("X", "Y", 2.0))
            .with_alternatives("B", JudgmentSet::new().with("X", "Y", 3.0))
            .with_alternatives("C", JudgmentSet::new().with("Y", "X", 2.0))
            .with_alternatives("D", JudgmentSet::new().with("X", "Y", 1.0));

        let report = handler(definition, settings_with(ConsistencyPolicy::Warn))
            .handle(EvaluateHierarchyCommand::default())
            .await
            .unwrap();

        assert!(!report.criteria.consistent);
        let total: f64 = report.global.iter().map(|e| e.local_weight).sum();
        assert!((total - 1.0).abs() < 1e-2);
    }

    #[tokio::test]
    async fn mismatched_alternatives_fail_before_solving() {
        let definition = vendor().with_alternatives("Quality", JudgmentSet::new().with("A", "C", 2.0));

        let err = handler(definition, EvaluationSettings::default())
            .handle(EvaluateHierarchyCommand::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::HierarchyMismatch);
    }

    #[tokio::test]
    async fn non_convergence_is_surfaced() {
        let definition = HierarchyDefinition::new("Kpi", presets::kpi_criteria())
            .with_alternatives(presets::CASE_COMPLEXITY, presets::case_complexity_alternatives())
            .with_alternatives(presets::STAFFING_LEVELS, presets::case_complexity_alternatives())
            .with_alternatives(presets::PROCESS_CHANGES, presets::case_complexity_alternatives())
            .with_alternatives(presets::TECHNOLOGY_ADJUSTMENTS, presets::case_complexity_alternatives());
        let settings = EvaluationSettings {
            solver: SolverSettings {
                max_iterations: 1,
                ..SolverSettings::default()
            },
            ..EvaluationSettings::default()
        };

        let err = handler(definition, settings)
            .handle(EvaluateHierarchyCommand::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NonConvergence);
    }
}
