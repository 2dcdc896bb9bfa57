//! SkillSphere Analytics
//!
//! Career guidance engine: estimates skill levels, computes gaps against
//! role requirements, ranks remediation priorities, and lays out a phased
//! learning plan with concrete recommendations. The pipeline is a pure,
//! request-scoped computation - raw inputs flow through vocabulary
//! normalization, requirement extraction, gap computation, priority
//! scoring, timeline planning, and recommendation generation into one
//! aggregated report.
//!
//! HTTP serving, authentication, persistence, and text preprocessing live
//! in surrounding collaborators; this crate consumes and produces plain
//! data structures at those boundaries.

// Module declarations
pub mod assessment;
pub mod cache;
pub mod errors;
pub mod gaps;
pub mod market;
pub mod noise;
pub mod profile;
pub mod requirements;
pub mod service;
pub mod similarity;
pub mod taxonomy;

// Re-export main types
pub use assessment::{
    assess, AssessmentReport, AssessmentSignals, ExpertiseLevel, OverallAssessment,
    SkillAssessment, StrengthTier,
};

pub use cache::TtlCache;

pub use errors::{AnalysisError, Result};

pub use gaps::{
    GapAnalysis, GapAnalyzer, GapSummary, Milestone, PriorityWeights, Recommendation,
    ResourceDescriptor, ResourceKind, SkillGap, Timeline, TimelinePhase, MAX_RECOMMENDATIONS,
};

pub use market::{
    MarketDataProvider, MarketSignal, SkillSignal, StaticMarketData, DEFAULT_DEMAND,
    DEFAULT_REQUIRED_LEVEL, DEFAULT_SALARY_IMPACT,
};

pub use noise::{JitterMode, NoNoise, Noise, SeededNoise};

pub use profile::{Proficiency, ProficiencyError, SkillRecord};

pub use requirements::{RequirementInput, RequirementRecord};

pub use service::{
    AnalysisId, AnalysisReport, AnalysisService, HealthStatus, ServiceConfig, ServiceMetrics,
};

pub use taxonomy::{canonical_key, normalize, related_skills};

/// Version of the analytics crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the analytics engine
pub fn init() {
    tracing::info!("SkillSphere Analytics v{}", VERSION);
}
