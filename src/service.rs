//! Analysis service facade
//!
//! High-level entry point for the surrounding request layer: resolves
//! market signals through a cached provider, runs the gap pipeline or the
//! assessment heuristics, and wraps results in an identified, timestamped
//! report envelope. The pipeline itself is pure; the only shared state
//! here is the signal cache and the metric counters, both safe under
//! concurrent requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{self, AssessmentReport, AssessmentSignals};
use crate::cache::TtlCache;
use crate::errors::Result;
use crate::gaps::{GapAnalysis, GapAnalyzer, PriorityWeights};
use crate::market::{MarketDataProvider, MarketSignal, SkillSignal};
use crate::noise::JitterMode;
use crate::profile::SkillRecord;
use crate::requirements::{self, RequirementInput};
use crate::taxonomy::normalize;

/// Unique identifier for an analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(uuid::Uuid);

impl AnalysisId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identified, timestamped envelope around a gap analysis
///
/// The envelope carries request bookkeeping; the `analysis` payload is the
/// pure, reproducible part.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: AnalysisId,
    pub generated_at: DateTime<Utc>,
    pub analysis: GapAnalysis,
}

/// Service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// How long a fetched market signal stays cached
    pub signal_ttl: Duration,
    /// Maximum cached signal entries
    pub signal_cache_size: usize,
    /// Jitter policy for time estimates
    pub jitter: JitterMode,
    /// Priority policy for gap scoring
    pub weights: PriorityWeights,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            // Market data moves slowly; a day of staleness is acceptable
            signal_ttl: Duration::from_secs(24 * 60 * 60),
            signal_cache_size: 256,
            jitter: JitterMode::Random,
            weights: PriorityWeights::default(),
        }
    }
}

/// Point-in-time metric snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetrics {
    pub analyses_run: u64,
    pub assessments_run: u64,
    pub signal_cache_hits: u64,
    pub signal_cache_misses: u64,
}

#[derive(Debug, Default)]
struct MetricCounters {
    analyses_run: AtomicU64,
    assessments_run: AtomicU64,
    signal_cache_hits: AtomicU64,
    signal_cache_misses: AtomicU64,
}

/// Health check status
#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: String,
}

/// Career analytics service
///
/// Owns the market data provider, the signal cache, and the metric
/// counters. Cheap to clone behind an `Arc` at the serving layer.
pub struct AnalysisService {
    provider: Arc<dyn MarketDataProvider>,
    signals: TtlCache<String, SkillSignal>,
    analyzer: GapAnalyzer,
    config: ServiceConfig,
    metrics: Arc<MetricCounters>,
}

impl AnalysisService {
    /// Create a service with the default configuration
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_config(provider, ServiceConfig::default())
    }

    /// Create a service with explicit configuration
    pub fn with_config(provider: Arc<dyn MarketDataProvider>, config: ServiceConfig) -> Self {
        Self {
            provider,
            signals: TtlCache::new(config.signal_cache_size, config.signal_ttl),
            analyzer: GapAnalyzer::with_weights(config.weights),
            config,
            metrics: Arc::new(MetricCounters::default()),
        }
    }

    /// Run a gap analysis, resolving market data through the provider
    ///
    /// # Errors
    /// Propagates provider failures and internal invariant violations; an
    /// unknown role or an empty requirement set is not an error.
    pub async fn analyze(
        &self,
        user_skills: &[SkillRecord],
        input: RequirementInput,
    ) -> Result<AnalysisReport> {
        let names = self.names_to_resolve(user_skills, &input);
        let market = self.resolve_signals(&names).await?;
        self.analyze_with_signal(user_skills, input, market).await
    }

    /// Run a gap analysis against an externally supplied market signal
    ///
    /// The provider and cache are bypassed entirely; use this when the
    /// request already carries market data.
    pub async fn analyze_with_signal(
        &self,
        user_skills: &[SkillRecord],
        input: RequirementInput,
        market: MarketSignal,
    ) -> Result<AnalysisReport> {
        let requirements = requirements::extract(&input, &market);
        let mut noise = self.config.jitter.build();
        let analysis =
            self.analyzer
                .analyze(user_skills, &requirements, &market, noise.as_mut())?;

        self.metrics.analyses_run.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            skills = user_skills.len(),
            requirements = requirements.len(),
            gaps = analysis.summary.total_gaps,
            "gap analysis served"
        );

        Ok(AnalysisReport {
            id: AnalysisId::new(),
            generated_at: Utc::now(),
            analysis,
        })
    }

    /// Run the assessment heuristics over a skill profile
    pub async fn assess(
        &self,
        user_skills: &[SkillRecord],
        signals: &AssessmentSignals,
    ) -> AssessmentReport {
        let report = assessment::assess(user_skills, signals);
        self.metrics.assessments_run.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            skills = user_skills.len(),
            score = report.overall.score,
            "assessment served"
        );
        report
    }

    /// Current metric counter values
    pub fn metrics(&self) -> ServiceMetrics {
        ServiceMetrics {
            analyses_run: self.metrics.analyses_run.load(Ordering::Relaxed),
            assessments_run: self.metrics.assessments_run.load(Ordering::Relaxed),
            signal_cache_hits: self.metrics.signal_cache_hits.load(Ordering::Relaxed),
            signal_cache_misses: self.metrics.signal_cache_misses.load(Ordering::Relaxed),
        }
    }

    /// Liveness check for the serving layer
    pub async fn health(&self) -> HealthStatus {
        // The engine has no external connections of its own; report cache
        // occupancy so operators can see the service doing work.
        let cached = self.signals.len().await;
        HealthStatus {
            healthy: true,
            message: format!("ok ({cached} cached market signals)"),
        }
    }

    /// Canonical names whose market signals this request needs
    fn names_to_resolve(
        &self,
        user_skills: &[SkillRecord],
        input: &RequirementInput,
    ) -> Vec<String> {
        let mut names: Vec<String> = user_skills.iter().map(|s| normalize(&s.name)).collect();
        for name in requirements::requirement_names(input) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Assemble a market signal from the cache, fetching misses
    async fn resolve_signals(&self, names: &[String]) -> Result<MarketSignal> {
        let mut market = MarketSignal::new();
        for name in names {
            let key = crate::taxonomy::canonical_key(name);
            if let Some(signal) = self.signals.get(&key).await {
                self.metrics.signal_cache_hits.fetch_add(1, Ordering::Relaxed);
                market.insert(name, signal);
                continue;
            }
            self.metrics
                .signal_cache_misses
                .fetch_add(1, Ordering::Relaxed);
            let signal = self.provider.fetch(name).await?;
            self.signals.insert(key, signal).await;
            market.insert(name, signal);
        }
        Ok(market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::StaticMarketData;

    fn skill(name: &str, level: u8) -> SkillRecord {
        SkillRecord::new(name, level, 1.0).unwrap()
    }

    fn service() -> AnalysisService {
        let config = ServiceConfig {
            jitter: JitterMode::Disabled,
            ..ServiceConfig::default()
        };
        AnalysisService::with_config(Arc::new(StaticMarketData::new()), config)
    }

    #[tokio::test]
    async fn test_analyze_end_to_end() {
        let svc = service();
        let report = svc
            .analyze(
                &[skill("python", 2)],
                RequirementInput::List(vec!["Python (Senior)".to_string(), "SQL".to_string()]),
            )
            .await
            .unwrap();
        assert_eq!(report.analysis.summary.total_gaps, 2);
        assert_eq!(report.analysis.gaps[0].skill_name, "Python");
    }

    #[tokio::test]
    async fn test_analyze_from_job_description() {
        let svc = service();
        let report = svc
            .analyze(
                &[],
                RequirementInput::JobDescription(
                    "Looking for a data scientist with strong fundamentals".to_string(),
                ),
            )
            .await
            .unwrap();
        assert_eq!(report.analysis.summary.total_gaps, 5);
        assert!(report
            .analysis
            .gaps
            .iter()
            .all(|g| g.is_missing));
    }

    #[tokio::test]
    async fn test_metrics_count_operations() {
        let svc = service();
        let input = RequirementInput::List(vec!["Python".to_string()]);
        svc.analyze(&[], input.clone()).await.unwrap();
        svc.analyze(&[], input).await.unwrap();
        svc.assess(&[], &AssessmentSignals::default()).await;

        let metrics = svc.metrics();
        assert_eq!(metrics.analyses_run, 2);
        assert_eq!(metrics.assessments_run, 1);
        // Second analysis hits the cache for the same skill
        assert_eq!(metrics.signal_cache_misses, 1);
        assert_eq!(metrics.signal_cache_hits, 1);
    }

    #[tokio::test]
    async fn test_explicit_signal_bypasses_provider() {
        let svc = service();
        let mut market = MarketSignal::new();
        market.insert("python", SkillSignal::new(1.0, 1.0));
        let report = svc
            .analyze_with_signal(
                &[],
                RequirementInput::List(vec!["Python".to_string()]),
                market,
            )
            .await
            .unwrap();
        // demand 1.0, salary 1.0 -> priority 1.0 -> high band
        assert_eq!(report.analysis.summary.high_priority_gaps, 1);
        assert_eq!(svc.metrics().signal_cache_misses, 0);
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let svc = service();
        let health = svc.health().await;
        assert!(health.healthy);
        assert!(health.message.contains("ok"));
    }

    #[tokio::test]
    async fn test_reports_get_distinct_ids() {
        let svc = service();
        let input = RequirementInput::List(vec!["Python".to_string()]);
        let a = svc.analyze(&[], input.clone()).await.unwrap();
        let b = svc.analyze(&[], input).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
