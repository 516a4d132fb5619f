//! Reports - Rounded, ranked summaries of comparisons and hierarchies.
//!
//! Reports are plain data: `Display` renders them as terminal text and
//! serde renders them as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Comparison, ConsistencyResult, Hierarchy, Judgment, PriorityVector};
use crate::domain::foundation::Timestamp;

/// Default number of decimal places in reports.
pub const DEFAULT_PRECISION: u32 = 3;

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// One element's line in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSummary {
    pub rank: usize,
    pub element: String,
    pub local_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_weight: Option<f64>,
}

/// Summary of one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub name: String,
    /// Elements ranked by local weight, heaviest first.
    pub elements: Vec<ElementSummary>,
    pub consistency: ConsistencyResult,
    pub consistent: bool,
    pub judged_pairs: usize,
    pub unjudged_pairs: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_warnings: Vec<Judgment>,
    pub matrix: Vec<Vec<f64>>,
}

impl ComparisonReport {
    /// Summarizes a comparison.
    ///
    /// When `parent_weight` is given each element also gets a global
    /// weight, `parent_weight * local_weight`.
    pub fn from_comparison(
        comparison: &Comparison,
        precision: u32,
        threshold: f64,
        parent_weight: Option<f64>,
    ) -> Self {
        let elements = comparison
            .priorities()
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(index, w)| ElementSummary {
                rank: index + 1,
                element: w.element.clone(),
                local_weight: round_to(w.weight, precision),
                global_weight: parent_weight.map(|p| round_to(p * w.weight, precision)),
            })
            .collect();

        let consistency = comparison.consistency();
        let matrix = comparison.matrix();

        Self {
            name: comparison.name().to_string(),
            elements,
            consistency: ConsistencyResult {
                lambda_max: round_to(consistency.lambda_max, precision),
                consistency_index: round_to(consistency.consistency_index, precision),
                consistency_ratio: round_to(consistency.consistency_ratio, precision),
                n: consistency.n,
            },
            consistent: comparison.is_consistent(threshold),
            judged_pairs: matrix.judged_pairs(),
            unjudged_pairs: matrix.unjudged_pairs(),
            scale_warnings: comparison.scale_warnings().to_vec(),
            matrix: matrix
                .rows()
                .into_iter()
                .map(|row| row.into_iter().map(|v| round_to(v, precision)).collect())
                .collect(),
        }
    }

    /// Returns the summary line of an element.
    pub fn element(&self, name: &str) -> Option<&ElementSummary> {
        self.elements.iter().find(|e| e.element == name)
    }
}

/// Summary of a whole hierarchy evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyReport {
    pub name: String,
    pub generated_at: Timestamp,
    pub consistency_threshold: f64,
    pub criteria: ComparisonReport,
    pub alternatives: Vec<ComparisonReport>,
    /// Alternatives ranked by global weight, heaviest first.
    pub global: Vec<ElementSummary>,
    /// Top alternative, or None on a tie.
    pub best_alternative: Option<String>,
}

impl HierarchyReport {
    /// Summarizes an evaluated hierarchy and its synthesized weights.
    pub fn new(hierarchy: &Hierarchy, global: &PriorityVector, precision: u32, threshold: f64) -> Self {
        let criteria_weights = hierarchy.criteria().priorities();

        let alternatives = hierarchy
            .alternatives()
            .iter()
            .map(|c| {
                ComparisonReport::from_comparison(c, precision, threshold, criteria_weights.get(c.name()))
            })
            .collect();

        let ranked_global = global
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(index, w)| {
                let weight = round_to(w.weight, precision);
                ElementSummary {
                    rank: index + 1,
                    element: w.element.clone(),
                    local_weight: weight,
                    global_weight: Some(weight),
                }
            })
            .collect();

        Self {
            name: hierarchy.name().to_string(),
            generated_at: Timestamp::now(),
            consistency_threshold: threshold,
            criteria: ComparisonReport::from_comparison(
                hierarchy.criteria(),
                precision,
                threshold,
                Some(1.0),
            ),
            alternatives,
            global: ranked_global,
            best_alternative: global.best().map(|w| w.element.clone()),
        }
    }

    /// Renders the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max("Element".len())
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.consistent { "consistent" } else { "INCONSISTENT" };
        writeln!(
            f,
            "{} (n={}, lambda_max={}, CI={}, CR={}, {})",
            self.name,
            self.consistency.n,
            self.consistency.lambda_max,
            self.consistency.consistency_index,
            self.consistency.consistency_ratio,
            verdict
        )?;

        let width = name_width(self.elements.iter().map(|e| e.element.as_str()));
        let with_global = self.elements.iter().any(|e| e.global_weight.is_some());

        write!(f, "  {:>4}  {:<width$}  {:>8}", "Rank", "Element", "Local", width = width)?;
        if with_global {
            write!(f, "  {:>8}", "Global")?;
        }
        writeln!(f)?;

        for e in &self.elements {
            write!(
                f,
                "  {:>4}  {:<width$}  {:>8}",
                e.rank,
                e.element,
                e.local_weight,
                width = width
            )?;
            if let Some(global) = e.global_weight {
                write!(f, "  {:>8}", global)?;
            }
            writeln!(f)?;
        }

        if self.unjudged_pairs > 0 {
            writeln!(
                f,
                "  note: {} unjudged pair(s) assumed equally important",
                self.unjudged_pairs
            )?;
        }
        for judgment in &self.scale_warnings {
            writeln!(
                f,
                "  warning: {} vs {} = {} is outside the 1/9..9 scale",
                judgment.first, judgment.second, judgment.ratio
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for HierarchyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (generated {})", self.name, self.generated_at)?;
        writeln!(f)?;
        write!(f, "{}", self.criteria)?;

        for alternatives in &self.alternatives {
            writeln!(f)?;
            write!(f, "{}", alternatives)?;
        }

        writeln!(f)?;
        writeln!(f, "Global ranking")?;
        let width = name_width(self.global.iter().map(|e| e.element.as_str()));
        for e in &self.global {
            writeln!(
                f,
                "  {:>4}  {:<width$}  {:>8}",
                e.rank,
                e.element,
                e.local_weight,
                width = width
            )?;
        }
        match &self.best_alternative {
            Some(best) => writeln!(f, "Best alternative: {}", best),
            None => writeln!(f, "Best alternative: tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{
        HierarchyDefinition, JudgmentSet, PrioritySolver, CONSISTENCY_THRESHOLD,
    };

    fn hierarchy() -> Hierarchy {
        let definition = HierarchyDefinition::new(
            "Vendor",
            JudgmentSet::new().with("Cost", "Quality", 3.0),
        )
        .with_alternatives("Cost", JudgmentSet::new().with("A", "B", 4.0))
        .with_alternatives("Quality", JudgmentSet::new().with("B", "A", 2.0));
        Hierarchy::build(&definition, &PrioritySolver::default()).unwrap()
    }

    #[test]
    fn round_to_uses_precision() {
        assert_eq!(round_to(0.571428, 3), 0.571);
        assert_eq!(round_to(0.2857, 2), 0.29);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn comparison_report_ranks_and_rounds() {
        let comparison = Comparison::evaluate(
            "Criteria",
            &JudgmentSet::new()
                .with("C", "B", 0.5)
                .with("B", "A", 0.5)
                .with("A", "C", 4.0),
            &PrioritySolver::default(),
        )
        .unwrap();

        let report =
            ComparisonReport::from_comparison(&comparison, DEFAULT_PRECISION, CONSISTENCY_THRESHOLD, None);

        let order: Vec<_> = report.elements.iter().map(|e| e.element.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert_eq!(report.element("A").map(|e| e.local_weight), Some(0.571));
        assert_eq!(report.element("C").map(|e| e.rank), Some(3));
        assert!(report.consistent);
        assert_eq!(report.unjudged_pairs, 0);
    }

    #[test]
    fn hierarchy_report_carries_global_weights() {
        let hierarchy = hierarchy();
        let global = hierarchy.synthesize().unwrap();
        let report = HierarchyReport::new(&hierarchy, &global, DEFAULT_PRECISION, CONSISTENCY_THRESHOLD);

        assert_eq!(report.best_alternative.as_deref(), Some("A"));
        assert_eq!(report.global[0].element, "A");
        assert_eq!(report.global[0].local_weight, 0.683);

        let cost = &report.alternatives[0];
        assert_eq!(cost.name, "Cost");
        // 0.75 * 0.8
        assert_eq!(cost.element("A").and_then(|e| e.global_weight), Some(0.6));
    }

    #[test]
    fn text_rendering_lists_every_comparison() {
        let hierarchy = hierarchy();
        let global = hierarchy.synthesize().unwrap();
        let text = HierarchyReport::new(&hierarchy, &global, DEFAULT_PRECISION, CONSISTENCY_THRESHOLD)
            .to_string();

        assert!(text.starts_with("Vendor (generated "));
        assert!(text.contains("Criteria (n=2"));
        assert!(text.contains("Quality (n=2"));
        assert!(text.contains("Global ranking"));
        assert!(text.contains("Best alternative: A"));
    }

    #[test]
    fn json_rendering_round_trips() {
        let hierarchy = hierarchy();
        let global = hierarchy.synthesize().unwrap();
        let report = HierarchyReport::new(&hierarchy, &global, DEFAULT_PRECISION, CONSISTENCY_THRESHOLD);

        let json = report.to_json().unwrap();
        let parsed: HierarchyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn unjudged_pairs_are_noted_in_text() {
        let comparison = Comparison::evaluate(
            "Sparse",
            &JudgmentSet::new().with("A", "B", 2.0).with("B", "C", 2.0),
            &PrioritySolver::default(),
        )
        .unwrap();

        let text = ComparisonReport::from_comparison(&comparison, 3, CONSISTENCY_THRESHOLD, None).to_string();
        assert!(text.contains("1 unjudged pair(s)"));
    }
}
