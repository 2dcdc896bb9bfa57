//! Gap computation and report assembly
//!
//! Compares a user's skill set against an extracted requirement set and
//! produces the full analysis: per-skill gap records, market-weighted
//! priorities, the phased timeline, learning recommendations, and the
//! summary metrics the response layer serves back.
//!
//! Given identical inputs the emitted gap set is identical regardless of
//! input ordering; the pre-sort sequence follows requirement order and the
//! final ordering is priority-derived.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};
use crate::market::MarketSignal;
use crate::noise::Noise;
use crate::profile::{Proficiency, SkillRecord};
use crate::requirements::RequirementRecord;
use crate::similarity;
use crate::taxonomy::canonical_key;

use super::recommendations::{self, Recommendation};
use super::scoring::{self, PriorityWeights};
use super::timeline::{self, Timeline, HIGH_PRIORITY_THRESHOLD};

/// Months of development per missing proficiency level
///
/// Policy constant for the `2.5 * gap_size` estimate; jitter on top comes
/// from the injected noise source.
pub const MONTHS_PER_LEVEL: f64 = 2.5;

/// Standard deviation of the estimate jitter, in months
pub const ESTIMATE_JITTER_STD_DEV: f64 = 0.5;

/// One requirement the user does not currently satisfy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    /// Canonical skill name
    pub skill_name: String,
    /// User's level, 0 when the skill is absent entirely
    pub current_level: u8,
    /// Level the requirement demands
    pub required_level: Proficiency,
    /// `required_level - current_level`, always >= 1
    pub gap_size: u8,
    /// Remediation priority in [0, 1]
    pub priority: f64,
    /// Estimated months to close the gap, >= 1
    pub estimated_months: u32,
    /// True iff the skill is absent from the user's set
    pub is_missing: bool,
}

/// Aggregate metrics over one analysis
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub total_gaps: usize,
    /// Gaps with priority at or above the high-priority threshold
    pub high_priority_gaps: usize,
    /// Sum of per-gap estimates, in months
    pub total_development_months: u32,
    /// Share of requirements the user holds at any level, 0..=100
    pub coverage_percentage: f64,
    /// Pseudo-embedding match score, 0..=100
    pub match_score: f64,
}

/// Complete gap analysis for one request
///
/// A pure value: identical inputs and an identical noise state reproduce
/// this byte for byte.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Gaps sorted by priority descending
    pub gaps: Vec<SkillGap>,
    pub summary: GapSummary,
    pub timeline: Timeline,
    pub recommendations: Vec<Recommendation>,
}

/// Skill gap analyzer
///
/// Stateless per request; holds only the priority policy. One analyzer may
/// serve many concurrent requests as long as each brings its own noise
/// source.
#[derive(Clone, Debug, Default)]
pub struct GapAnalyzer {
    weights: PriorityWeights,
}

impl GapAnalyzer {
    /// Create an analyzer with the default priority policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom priority weights
    pub fn with_weights(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    /// Compute raw gap records in requirement order
    ///
    /// A requirement produces a gap only when the user's level is below the
    /// required level; fully met requirements produce nothing. Priorities
    /// are not assigned here - see [`scoring::prioritize`].
    pub fn compute_gaps(
        &self,
        user_skills: &[SkillRecord],
        requirements: &[RequirementRecord],
        noise: &mut dyn Noise,
    ) -> Vec<SkillGap> {
        let levels = level_lookup(user_skills);
        let mut gaps = Vec::new();
        for req in requirements {
            let current = levels
                .get(&canonical_key(&req.skill_name))
                .copied()
                .unwrap_or(0);
            let required = req.required_level.get();
            if current >= required {
                continue;
            }
            let gap_size = required - current;
            gaps.push(SkillGap {
                skill_name: req.skill_name.clone(),
                current_level: current,
                required_level: req.required_level,
                gap_size,
                priority: 0.0,
                estimated_months: estimate_development_months(gap_size, noise),
                is_missing: current == 0,
            });
        }
        gaps
    }

    /// Run the full pipeline and assemble the report
    ///
    /// # Errors
    /// Returns `AnalysisError::Invariant` only when a computed gap violates
    /// the internal gap-sign or missing-flag invariants - a programmer
    /// error, never an input condition. An empty requirement set yields a
    /// well-formed empty report with 100% coverage and match score.
    pub fn analyze(
        &self,
        user_skills: &[SkillRecord],
        requirements: &[RequirementRecord],
        market: &MarketSignal,
        noise: &mut dyn Noise,
    ) -> Result<GapAnalysis> {
        let mut gaps = self.compute_gaps(user_skills, requirements, noise);
        scoring::prioritize(&mut gaps, market, &self.weights);
        check_invariants(&gaps)?;

        let timeline = timeline::plan(&gaps);
        let recommendations = recommendations::generate(&gaps);
        let summary = GapSummary {
            total_gaps: gaps.len(),
            high_priority_gaps: gaps
                .iter()
                .filter(|g| g.priority >= HIGH_PRIORITY_THRESHOLD)
                .count(),
            total_development_months: gaps.iter().map(|g| g.estimated_months).sum(),
            coverage_percentage: coverage_percentage(user_skills, requirements),
            match_score: similarity::match_score(user_skills, requirements),
        };

        tracing::debug!(
            total_gaps = summary.total_gaps,
            high_priority = summary.high_priority_gaps,
            coverage = summary.coverage_percentage,
            "gap analysis complete"
        );

        Ok(GapAnalysis {
            gaps,
            summary,
            timeline,
            recommendations,
        })
    }
}

/// Canonical-name -> level lookup for a skill set
fn level_lookup(user_skills: &[SkillRecord]) -> HashMap<String, u8> {
    let mut levels = HashMap::new();
    for skill in user_skills {
        let key = canonical_key(&skill.name);
        let level = skill.level.get();
        // Duplicate entries keep the strongest claim
        let entry = levels.entry(key).or_insert(0);
        if level > *entry {
            *entry = level;
        }
    }
    levels
}

/// Estimated months to close a gap of the given size
///
/// `2.5 * gap_size` plus normal jitter, rounded, floored at one month.
pub fn estimate_development_months(gap_size: u8, noise: &mut dyn Noise) -> u32 {
    let base = gap_size as f64 * MONTHS_PER_LEVEL;
    let estimate = (base + noise.normal(ESTIMATE_JITTER_STD_DEV)).round();
    estimate.max(1.0) as u32
}

/// Share of requirements the user holds at any level, 0..=100
///
/// Presence-based: a requirement counts as covered when the user lists the
/// skill at all, regardless of level. 100.0 when there are no requirements.
pub fn coverage_percentage(
    user_skills: &[SkillRecord],
    requirements: &[RequirementRecord],
) -> f64 {
    if requirements.is_empty() {
        return 100.0;
    }
    let levels = level_lookup(user_skills);
    let covered = requirements
        .iter()
        .filter(|r| levels.contains_key(&canonical_key(&r.skill_name)))
        .count();
    covered as f64 / requirements.len() as f64 * 100.0
}

/// Guard the gap-sign and missing-flag invariants
///
/// These can only break through a bug in gap construction, so violation is
/// an [`AnalysisError::Invariant`] rather than a degraded result.
fn check_invariants(gaps: &[SkillGap]) -> Result<()> {
    for gap in gaps {
        let expected = gap.required_level.get() as i16 - gap.current_level as i16;
        if expected <= 0 || gap.gap_size as i16 != expected {
            return Err(AnalysisError::Invariant(format!(
                "gap size {} inconsistent for '{}' (current {}, required {})",
                gap.gap_size,
                gap.skill_name,
                gap.current_level,
                gap.required_level
            )));
        }
        if gap.is_missing != (gap.current_level == 0) {
            return Err(AnalysisError::Invariant(format!(
                "missing flag inconsistent for '{}' (current {})",
                gap.skill_name, gap.current_level
            )));
        }
    }
    Ok(())
}
