//! Development timeline planning
//!
//! Buckets prioritized gaps into sequential phases by priority band. Every
//! non-empty band becomes one fixed-length phase; phases run high to low
//! with cumulative start/end months. The fixed six-month phase length is a
//! deliberate simplification - it ignores each gap's own time estimate and
//! exists to give the plan a legible cadence, not to be accurate.

use serde::{Deserialize, Serialize};

use super::analyzer::SkillGap;

/// Fixed length of every development phase, in months
pub const PHASE_LENGTH_MONTHS: u32 = 6;

/// Gaps at or above this priority are high priority
pub const HIGH_PRIORITY_THRESHOLD: f64 = 0.8;

/// Gaps at or above this (and below high) are medium priority
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 0.5;

/// One sequential block of the remediation timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub name: String,
    pub duration_months: u32,
    /// Gaps worked during this phase, in priority order
    pub skills: Vec<SkillGap>,
    pub start_month: u32,
    pub end_month: u32,
}

/// Complete remediation timeline
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub phases: Vec<TimelinePhase>,
    pub total_duration_months: u32,
    /// Skill names of all high-priority gaps, in priority order
    pub critical_path: Vec<String>,
}

/// Plan a timeline from priority-sorted gaps
///
/// Band partitioning preserves each gap's position within its band, so the
/// input must already be sorted by priority descending (see
/// [`super::scoring::prioritize`]).
pub fn plan(sorted_gaps: &[SkillGap]) -> Timeline {
    let high: Vec<SkillGap> = sorted_gaps
        .iter()
        .filter(|g| g.priority >= HIGH_PRIORITY_THRESHOLD)
        .cloned()
        .collect();
    let medium: Vec<SkillGap> = sorted_gaps
        .iter()
        .filter(|g| g.priority >= MEDIUM_PRIORITY_THRESHOLD && g.priority < HIGH_PRIORITY_THRESHOLD)
        .cloned()
        .collect();
    let low: Vec<SkillGap> = sorted_gaps
        .iter()
        .filter(|g| g.priority < MEDIUM_PRIORITY_THRESHOLD)
        .cloned()
        .collect();

    let critical_path = high.iter().map(|g| g.skill_name.clone()).collect();

    let mut phases = Vec::new();
    let mut current_month = 0;
    for (name, band) in [
        ("Critical Skills Development", high),
        ("Advanced Skills Development", medium),
        ("Specialized Skills Development", low),
    ] {
        if band.is_empty() {
            continue;
        }
        phases.push(TimelinePhase {
            name: name.to_string(),
            duration_months: PHASE_LENGTH_MONTHS,
            skills: band,
            start_month: current_month,
            end_month: current_month + PHASE_LENGTH_MONTHS,
        });
        current_month += PHASE_LENGTH_MONTHS;
    }

    Timeline {
        phases,
        total_duration_months: current_month,
        critical_path,
    }
}
