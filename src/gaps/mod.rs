//! Skill gap analysis pipeline
//!
//! The heart of the engine: gap computation against extracted requirements,
//! market-weighted priority scoring, phase bucketing into a development
//! timeline, and concrete learning recommendations for the highest-priority
//! gaps.

pub mod analyzer;
pub mod recommendations;
pub mod scoring;
pub mod timeline;

// Public exports
pub use analyzer::{GapAnalysis, GapAnalyzer, GapSummary, SkillGap};
pub use recommendations::{
    Milestone, Recommendation, ResourceDescriptor, ResourceKind, MAX_RECOMMENDATIONS,
};
pub use scoring::{prioritize, score_gap, PriorityWeights};
pub use timeline::{Timeline, TimelinePhase, HIGH_PRIORITY_THRESHOLD, PHASE_LENGTH_MONTHS};
