//! User skill profile types
//!
//! `Proficiency` is a newtype wrapper around u8 that enforces the 1..=5
//! scale used throughout the engine. Constructing one is the validation
//! step the upstream request layer is contractually required to perform;
//! everything past this boundary assumes levels are in range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bounded proficiency level on the 1..=5 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Proficiency(u8);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProficiencyError {
    #[error("Proficiency out of bounds: {value} (must be {min} to {max})")]
    OutOfBounds { value: u8, min: u8, max: u8 },
}

impl Proficiency {
    const MIN: u8 = 1;
    const MAX: u8 = 5;

    /// Create a new proficiency level with bounds validation
    ///
    /// # Errors
    /// Returns `ProficiencyError::OutOfBounds` if value is 0 or greater than 5.
    pub fn new(value: u8) -> Result<Self, ProficiencyError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ProficiencyError::OutOfBounds {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying level value
    pub fn get(self) -> u8 {
        self.0
    }

    /// Highest level on the scale (expert)
    pub fn expert() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = ProficiencyError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One self-reported skill from a user profile
///
/// Immutable once handed to the pipeline; one record per skill per request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Skill name as the user entered it (normalized lazily by consumers)
    pub name: String,
    /// Self-assessed proficiency level
    pub level: Proficiency,
    /// Years of experience with the skill
    pub experience_years: f64,
    /// Optional category label (e.g. "backend", "soft skills")
    pub category: Option<String>,
}

impl SkillRecord {
    /// Create a skill record, validating the level
    ///
    /// # Errors
    /// Returns `ProficiencyError::OutOfBounds` if level is outside 1..=5.
    pub fn new(
        name: impl Into<String>,
        level: u8,
        experience_years: f64,
    ) -> Result<Self, ProficiencyError> {
        Ok(Self {
            name: name.into(),
            level: Proficiency::new(level)?,
            experience_years,
            category: None,
        })
    }

    /// Attach a category label (builder pattern)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
