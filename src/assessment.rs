//! Skill assessment heuristics
//!
//! Scores individual skills from level and experience, estimates an
//! assessment confidence from profile signals, and rolls the results up
//! into an overall picture with strengths, weaknesses, and next steps.
//! The weighting constants are tuned policy, not learned parameters.

use serde::{Deserialize, Serialize};

use crate::profile::SkillRecord;

/// Points per proficiency level in the skill score
const POINTS_PER_LEVEL: f64 = 20.0;
/// Points per year of experience, capped at [`EXPERIENCE_BONUS_CAP`]
const POINTS_PER_YEAR: f64 = 2.0;
const EXPERIENCE_BONUS_CAP: f64 = 20.0;
const MAX_SCORE: f64 = 100.0;

/// Strength classification of one skill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    /// Score at or above 80
    Strong,
    /// Score in [60, 80)
    Moderate,
    /// Score below 60
    Weak,
}

/// Coarse experience level of a whole profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl std::fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExpertiseLevel::Beginner => "beginner",
            ExpertiseLevel::Intermediate => "intermediate",
            ExpertiseLevel::Advanced => "advanced",
            ExpertiseLevel::Expert => "expert",
        };
        write!(f, "{s}")
    }
}

/// Pre-computed profile signals from the upstream text-analysis collaborator
///
/// Sentiment and complexity are [0, 1] scores over the user's free-text
/// skill descriptions; both default to the neutral 0.5 when the collaborator
/// supplies nothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSignals {
    pub sentiment: f64,
    pub complexity: f64,
    pub endorsements: u32,
}

impl Default for AssessmentSignals {
    fn default() -> Self {
        Self {
            sentiment: 0.5,
            complexity: 0.5,
            endorsements: 0,
        }
    }
}

/// Assessment of one skill
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub name: String,
    pub level: u8,
    pub experience_years: f64,
    /// Composite score, 0..=100
    pub score: f64,
    pub strength: StrengthTier,
    /// Points of headroom to a perfect score
    pub development_needed: f64,
}

/// Roll-up over a whole skill profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    /// Mean per-skill score, 0..=100
    pub score: f64,
    pub level: ExpertiseLevel,
    /// Assessment confidence, 0..=1
    pub confidence: f64,
    /// Up to five strongest skills
    pub strengths: Vec<String>,
    /// Up to five weakest skills
    pub weaknesses: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Full assessment report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub overall: OverallAssessment,
    pub skills: Vec<SkillAssessment>,
}

/// Score a single skill from level and experience
pub fn assess_skill(skill: &SkillRecord) -> SkillAssessment {
    let base = skill.level.get() as f64 * POINTS_PER_LEVEL;
    let experience_bonus =
        (skill.experience_years.max(0.0) * POINTS_PER_YEAR).min(EXPERIENCE_BONUS_CAP);
    let score = (base + experience_bonus).min(MAX_SCORE);
    let strength = if score >= 80.0 {
        StrengthTier::Strong
    } else if score >= 60.0 {
        StrengthTier::Moderate
    } else {
        StrengthTier::Weak
    };
    SkillAssessment {
        name: skill.name.clone(),
        level: skill.level.get(),
        experience_years: skill.experience_years,
        score,
        strength,
        development_needed: MAX_SCORE - score,
    }
}

/// Assessment confidence from profile signals
///
/// Weighted sum: 0.4 experience (capped at 10 years), 0.2 endorsements
/// (capped at 50), 0.2 sentiment, 0.2 description complexity. Capped at 1.
pub fn confidence_score(
    experience_years: f64,
    endorsements: u32,
    sentiment: f64,
    complexity: f64,
) -> f64 {
    let normalized_experience = (experience_years.max(0.0) / 10.0).min(1.0);
    let normalized_endorsements = (endorsements as f64 / 50.0).min(1.0);
    (normalized_experience * 0.4
        + normalized_endorsements * 0.2
        + sentiment * 0.2
        + complexity * 0.2)
        .min(1.0)
}

/// Coarse expertise level from experience, confidence, and complexity
pub fn determine_level(experience_years: f64, confidence: f64, complexity: f64) -> ExpertiseLevel {
    let overall = experience_years.max(0.0) / 10.0 * 0.4 + confidence * 0.4 + complexity * 0.2;
    if overall >= 0.8 {
        ExpertiseLevel::Expert
    } else if overall >= 0.6 {
        ExpertiseLevel::Advanced
    } else if overall >= 0.4 {
        ExpertiseLevel::Intermediate
    } else {
        ExpertiseLevel::Beginner
    }
}

/// Assess a whole skill profile
///
/// Degrades gracefully on an empty profile: zero scores, beginner level,
/// generic next steps, never an error.
pub fn assess(skills: &[SkillRecord], signals: &AssessmentSignals) -> AssessmentReport {
    let assessments: Vec<SkillAssessment> = skills.iter().map(assess_skill).collect();

    let mean_score = if assessments.is_empty() {
        0.0
    } else {
        assessments.iter().map(|a| a.score).sum::<f64>() / assessments.len() as f64
    };
    let mean_experience = if skills.is_empty() {
        0.0
    } else {
        skills
            .iter()
            .map(|s| s.experience_years.max(0.0))
            .sum::<f64>()
            / skills.len() as f64
    };

    let confidence = confidence_score(
        mean_experience,
        signals.endorsements,
        signals.sentiment,
        signals.complexity,
    );
    let level = determine_level(mean_experience, confidence, signals.complexity);

    let strengths: Vec<String> = assessments
        .iter()
        .filter(|a| a.strength == StrengthTier::Strong)
        .take(5)
        .map(|a| a.name.clone())
        .collect();
    let weaknesses: Vec<String> = assessments
        .iter()
        .filter(|a| a.strength == StrengthTier::Weak)
        .take(5)
        .map(|a| a.name.clone())
        .collect();

    let mut next_steps = Vec::new();
    if let Some(weakest) = weaknesses.first() {
        next_steps.push(format!(
            "Improve {weakest} skills through practice and training"
        ));
    }
    next_steps.push("Set up regular skill assessments to track progress".to_string());
    next_steps.push("Create a personalized learning plan".to_string());

    AssessmentReport {
        overall: OverallAssessment {
            score: mean_score,
            level,
            confidence,
            strengths,
            weaknesses,
            next_steps,
        },
        skills: assessments,
    }
}
