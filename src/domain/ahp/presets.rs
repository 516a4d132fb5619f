//! Built-in judgments for the remote-fix KPI decision.
//!
//! Four criteria drive remote-fix KPI performance. The alternatives preset
//! ranks four remediation options against the Case Complexity criterion.

use super::JudgmentSet;

pub const CASE_COMPLEXITY: &str = "Case Complexity";
pub const STAFFING_LEVELS: &str = "Staffing Levels";
pub const PROCESS_CHANGES: &str = "Process Changes";
pub const TECHNOLOGY_ADJUSTMENTS: &str = "Technology Adjustments";

pub const ENHANCED_TRAINING: &str = "Enhanced Training";
pub const PROCESS_REVISION: &str = "Process Revision";
pub const STAFF_AUGMENTATION: &str = "Staff Augmentation";
pub const TECH_UPGRADE: &str = "Tech Upgrade";

/// Name of the preset criteria comparison.
pub const KPI_CRITERIA_NAME: &str = "Criteria";

/// Name of the preset alternatives comparison.
pub const CASE_COMPLEXITY_ALTERNATIVES_NAME: &str = "Alternatives for Case Complexity";

/// Default pairwise judgments between the KPI criteria.
pub fn kpi_criteria() -> JudgmentSet {
    JudgmentSet::new()
        .with(CASE_COMPLEXITY, STAFFING_LEVELS, 3.0)
        .with(CASE_COMPLEXITY, PROCESS_CHANGES, 5.0)
        .with(CASE_COMPLEXITY, TECHNOLOGY_ADJUSTMENTS, 7.0)
        .with(STAFFING_LEVELS, PROCESS_CHANGES, 3.0)
        .with(STAFFING_LEVELS, TECHNOLOGY_ADJUSTMENTS, 5.0)
        .with(PROCESS_CHANGES, TECHNOLOGY_ADJUSTMENTS, 3.0)
}

/// Default criteria judgments with caller adjustments applied on top.
///
/// Typical overrides re-weigh Case Complexity against each other criterion.
pub fn kpi_criteria_with(overrides: JudgmentSet) -> JudgmentSet {
    kpi_criteria().merge(overrides)
}

/// Judgments between remediation options with respect to Case Complexity.
pub fn case_complexity_alternatives() -> JudgmentSet {
    JudgmentSet::new()
        .with(ENHANCED_TRAINING, PROCESS_REVISION, 1.0 / 3.0)
        .with(ENHANCED_TRAINING, STAFF_AUGMENTATION, 1.0 / 5.0)
        .with(ENHANCED_TRAINING, TECH_UPGRADE, 1.0 / 7.0)
        .with(PROCESS_REVISION, STAFF_AUGMENTATION, 3.0)
        .with(PROCESS_REVISION, TECH_UPGRADE, 1.0 / 2.0)
        .with(STAFF_AUGMENTATION, TECH_UPGRADE, 1.0 / 3.0)
}
