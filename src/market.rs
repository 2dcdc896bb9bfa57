//! Market demand signals
//!
//! A `MarketSignal` is the externally supplied map of demand and
//! salary-impact values keyed by canonical skill name, with optional
//! explicit required-level overrides. When no external data exists, the
//! keyword-tier heuristics here produce a plausible stand-in signal; they
//! are lookup tables with jitter, not a market model.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::noise::{JitterMode, Noise};
use crate::similarity::stable_hash64;
use crate::taxonomy::canonical_key;

/// Default demand when a skill is absent from the signal
pub const DEFAULT_DEMAND: f64 = 0.5;
/// Default salary impact when a skill is absent from the signal
pub const DEFAULT_SALARY_IMPACT: f64 = 0.5;
/// Default required level when neither the requirement text nor the signal
/// specifies one
pub const DEFAULT_REQUIRED_LEVEL: u8 = 3;

/// Per-skill market data
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillSignal {
    /// Market demand in [0, 1]
    pub demand: f64,
    /// Salary impact in [0, 1]
    pub salary_impact: f64,
    /// Explicit required level override, if the market source carries one
    pub required_level: Option<u8>,
}

impl SkillSignal {
    pub fn new(demand: f64, salary_impact: f64) -> Self {
        Self {
            demand,
            salary_impact,
            required_level: None,
        }
    }

    /// Attach an explicit required-level override (builder pattern)
    pub fn with_required_level(mut self, level: u8) -> Self {
        self.required_level = Some(level);
        self
    }
}

/// Market signal map keyed by canonical skill name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSignal {
    entries: IndexMap<String, SkillSignal>,
}

impl MarketSignal {
    /// Empty signal - every lookup falls back to defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a signal for a skill, keyed by its canonical form
    pub fn insert(&mut self, name: &str, signal: SkillSignal) {
        self.entries.insert(canonical_key(name), signal);
    }

    pub fn get(&self, name: &str) -> Option<&SkillSignal> {
        self.entries.get(&canonical_key(name))
    }

    /// Demand for a skill, `None` when the signal has no entry
    pub fn demand(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.demand)
    }

    /// Salary impact for a skill, `None` when the signal has no entry
    pub fn salary_impact(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.salary_impact)
    }

    /// Explicit required level for a skill, if the signal carries one
    pub fn required_level(&self, name: &str) -> Option<u8> {
        self.get(name).and_then(|s| s.required_level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Tier tables: a tier entry matches when it is contained in the canonical
// key of the queried skill.
const HIGH_DEMAND: &[&str] = &[
    "python",
    "javascript",
    "react",
    "node.js",
    "aws",
    "docker",
    "kubernetes",
    "machine learning",
    "data science",
    "cybersecurity",
];

const MEDIUM_DEMAND: &[&str] = &[
    "java",
    "c#",
    "php",
    "sql",
    "mongodb",
    "redis",
    "git",
    "agile",
    "scrum",
    "project management",
];

const EMERGING_GROWTH: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "blockchain",
    "iot",
    "edge computing",
    "quantum computing",
    "augmented reality",
    "virtual reality",
];

const GROWING: &[&str] = &[
    "python",
    "data science",
    "cybersecurity",
    "cloud computing",
    "devops",
    "microservices",
    "serverless",
];

fn tier_match(key: &str, tier: &[&str]) -> bool {
    tier.iter().any(|entry| key.contains(entry))
}

/// Heuristic market demand for a skill, in [0, 1]
///
/// High-demand tier 0.8 + U(0, 0.2), medium 0.5 + U(0, 0.3), everything
/// else 0.3 + U(0, 0.4). With `NoNoise` the tier base values come back
/// exactly.
pub fn estimate_demand(name: &str, noise: &mut dyn Noise) -> f64 {
    let key = canonical_key(name);
    if tier_match(&key, HIGH_DEMAND) {
        0.8 + noise.uniform(0.0, 0.2)
    } else if tier_match(&key, MEDIUM_DEMAND) {
        0.5 + noise.uniform(0.0, 0.3)
    } else {
        0.3 + noise.uniform(0.0, 0.4)
    }
}

/// Heuristic growth potential for a skill, in [0, 1]
///
/// Emerging tier 0.9 + U(0, 0.1), growing 0.7 + U(0, 0.2), everything else
/// 0.4 + U(0, 0.3).
pub fn estimate_growth_potential(name: &str, noise: &mut dyn Noise) -> f64 {
    let key = canonical_key(name);
    if tier_match(&key, EMERGING_GROWTH) {
        0.9 + noise.uniform(0.0, 0.1)
    } else if tier_match(&key, GROWING) {
        0.7 + noise.uniform(0.0, 0.2)
    } else {
        0.4 + noise.uniform(0.0, 0.3)
    }
}

/// Source of per-skill market data
///
/// The serving layer can plug in a real labor-market feed here; the engine
/// only sees the trait.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the signal for one skill
    ///
    /// # Errors
    /// Implementations backed by remote sources may fail; the built-in
    /// static provider never does.
    async fn fetch(&self, skill: &str) -> Result<SkillSignal>;
}

/// Built-in provider backed by the tier heuristics
///
/// Growth potential stands in for salary impact: the static tables have no
/// compensation data, and the two track each other closely enough for a
/// fallback signal.
pub struct StaticMarketData {
    jitter: JitterMode,
}

impl StaticMarketData {
    /// Deterministic provider - tier base values, no jitter
    pub fn new() -> Self {
        Self {
            jitter: JitterMode::Disabled,
        }
    }

    /// Jittered provider; the per-skill RNG is derived from the seed and
    /// the skill name, so the same skill always gets the same values
    pub fn with_seed(seed: u64) -> Self {
        Self {
            jitter: JitterMode::Seeded(seed),
        }
    }
}

impl Default for StaticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketData {
    async fn fetch(&self, skill: &str) -> Result<SkillSignal> {
        let mut noise = match self.jitter {
            JitterMode::Seeded(seed) => {
                JitterMode::Seeded(seed ^ stable_hash64(&canonical_key(skill))).build()
            }
            mode => mode.build(),
        };
        Ok(SkillSignal::new(
            estimate_demand(skill, noise.as_mut()),
            estimate_growth_potential(skill, noise.as_mut()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{NoNoise, SeededNoise};

    #[test]
    fn test_demand_tiers_base_values() {
        let mut noise = NoNoise;
        assert_eq!(estimate_demand("python", &mut noise), 0.8);
        assert_eq!(estimate_demand("sql", &mut noise), 0.5);
        assert_eq!(estimate_demand("basket weaving", &mut noise), 0.3);
    }

    #[test]
    fn test_growth_tiers_base_values() {
        let mut noise = NoNoise;
        assert_eq!(estimate_growth_potential("blockchain", &mut noise), 0.9);
        assert_eq!(estimate_growth_potential("devops", &mut noise), 0.7);
        assert_eq!(estimate_growth_potential("cobol", &mut noise), 0.4);
    }

    #[test]
    fn test_synonyms_hit_tiers_via_canonical_key() {
        let mut noise = NoNoise;
        // "ml" -> "machine learning": high demand and emerging growth
        assert_eq!(estimate_demand("ml", &mut noise), 0.8);
        assert_eq!(estimate_growth_potential("ml", &mut noise), 0.9);
    }

    #[test]
    fn test_jittered_demand_stays_in_tier_band() {
        let mut noise = SeededNoise::new(3);
        for _ in 0..100 {
            let d = estimate_demand("python", &mut noise);
            assert!((0.8..1.0).contains(&d));
        }
    }

    #[test]
    fn test_signal_lookup_and_defaults() {
        let mut signal = MarketSignal::new();
        signal.insert("Python", SkillSignal::new(0.9, 0.8));
        assert_eq!(signal.demand("python"), Some(0.9));
        assert_eq!(signal.salary_impact("PYTHON"), Some(0.8));
        assert_eq!(signal.demand("sql"), None);
        assert_eq!(signal.required_level("python"), None);
    }

    #[test]
    fn test_signal_keyed_by_canonical_form() {
        let mut signal = MarketSignal::new();
        signal.insert("js", SkillSignal::new(0.7, 0.6));
        assert_eq!(signal.demand("JavaScript"), Some(0.7));
    }

    #[test]
    fn test_required_level_override() {
        let mut signal = MarketSignal::new();
        signal.insert("sql", SkillSignal::new(0.5, 0.5).with_required_level(4));
        assert_eq!(signal.required_level("SQL"), Some(4));
    }

    #[tokio::test]
    async fn test_static_provider_deterministic() {
        let provider = StaticMarketData::new();
        let a = provider.fetch("python").await.unwrap();
        let b = provider.fetch("python").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.demand, 0.8);
        assert_eq!(a.salary_impact, 0.7);
    }

    #[tokio::test]
    async fn test_seeded_provider_reproducible_per_skill() {
        let provider = StaticMarketData::with_seed(42);
        let a = provider.fetch("python").await.unwrap();
        let b = provider.fetch("python").await.unwrap();
        assert_eq!(a, b);
        assert!((0.8..1.0).contains(&a.demand));
    }
}
