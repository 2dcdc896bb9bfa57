//! Gap priority scoring
//!
//! Assigns each gap a remediation priority from market signals:
//!
//! `priority = clamp(base + demand_weight * demand + salary_weight * salary_impact, 0, 1)`
//!
//! Demand is weighted above salary impact. The weights are policy knobs,
//! not learned parameters - change them here, not at call sites.

use serde::{Deserialize, Serialize};

use crate::market::{MarketSignal, DEFAULT_DEMAND, DEFAULT_SALARY_IMPACT};

use super::analyzer::SkillGap;

/// Weights for the linear priority policy
///
/// Defaults mirror the production tuning: a 0.5 floor, 0.3 on market
/// demand, 0.2 on salary impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Base priority every gap starts from
    pub base: f64,
    /// Weight on the market-demand signal
    pub demand: f64,
    /// Weight on the salary-impact signal
    pub salary_impact: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            demand: 0.3,
            salary_impact: 0.2,
        }
    }
}

/// Compute the priority score for a single gap
///
/// Returns a value in [0.0, 1.0]. Skills absent from the market signal take
/// 0.5 for both demand and salary impact.
pub fn score_gap(gap: &SkillGap, market: &MarketSignal, weights: &PriorityWeights) -> f64 {
    let demand = market.demand(&gap.skill_name).unwrap_or(DEFAULT_DEMAND);
    let salary = market
        .salary_impact(&gap.skill_name)
        .unwrap_or(DEFAULT_SALARY_IMPACT);
    (weights.base + weights.demand * demand + weights.salary_impact * salary).clamp(0.0, 1.0)
}

/// Assign priorities to all gaps and sort descending
///
/// The sort is stable: gaps with equal priority keep the order the gap
/// computer emitted them in (requirement order), which downstream tests
/// rely on for reproducibility.
pub fn prioritize(gaps: &mut [SkillGap], market: &MarketSignal, weights: &PriorityWeights) {
    for gap in gaps.iter_mut() {
        gap.priority = score_gap(gap, market, weights);
    }
    gaps.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
