//! Error types for the analytics engine
//!
//! The error surface here is deliberately narrow: unknown skills, unknown
//! roles, and empty requirement sets are resolved through documented
//! fallbacks and never produce an error. What remains are constructor
//! guards, provider failures, and internal invariant violations.

use thiserror::Error;

use crate::profile::ProficiencyError;

/// Main error type for analytics operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Proficiency level outside the 1..=5 scale
    #[error("Proficiency error: {0}")]
    Proficiency(#[from] ProficiencyError),

    /// Market data provider failure
    #[error("Market data unavailable: {0}")]
    MarketData(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal invariant violated - programmer error, never caused by input
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

/// Result type alias for analytics operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
