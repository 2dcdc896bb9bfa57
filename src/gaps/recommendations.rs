//! Learning recommendations for top-priority gaps
//!
//! For the highest-priority gaps this produces the concrete side of the
//! plan: action items phrased for "start from scratch" versus "level up",
//! a fixed catalog of resource templates, and one milestone per level step
//! with criteria from the five-tier rubric.

use serde::{Deserialize, Serialize};

use super::analyzer::SkillGap;

/// At most this many gaps receive recommendations
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Kind of learning resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Book,
    Certification,
    Practice,
}

/// One learning resource suggestion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    pub name: String,
    pub provider: String,
    pub duration: String,
    pub level: String,
}

/// One level-step milestone on the way to the target proficiency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Level reached when this milestone completes
    pub level: u8,
    pub description: String,
    /// Share of the gap's total estimate allotted to this step
    pub estimated_months: f64,
    /// Rubric criteria for the level, phrased for this skill
    pub criteria: Vec<String>,
}

/// Concrete remediation plan for one gap
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill_name: String,
    pub priority: f64,
    pub current_level: u8,
    pub target_level: u8,
    pub estimated_months: u32,
    pub actions: Vec<String>,
    pub resources: Vec<ResourceDescriptor>,
    pub milestones: Vec<Milestone>,
}

/// Generate recommendations for the top gaps
///
/// Input must be priority-sorted; the first [`MAX_RECOMMENDATIONS`] gaps
/// are selected, so ties are broken by the stable sort upstream.
pub fn generate(sorted_gaps: &[SkillGap]) -> Vec<Recommendation> {
    sorted_gaps
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(build_recommendation)
        .collect()
}

fn build_recommendation(gap: &SkillGap) -> Recommendation {
    Recommendation {
        skill_name: gap.skill_name.clone(),
        priority: gap.priority,
        current_level: gap.current_level,
        target_level: gap.required_level.get(),
        estimated_months: gap.estimated_months,
        actions: build_actions(gap),
        resources: build_resources(&gap.skill_name),
        milestones: build_milestones(
            &gap.skill_name,
            gap.current_level,
            gap.required_level.get(),
            gap.estimated_months,
        ),
    }
}

fn build_actions(gap: &SkillGap) -> Vec<String> {
    let name = &gap.skill_name;
    let mut actions = if gap.is_missing {
        vec![
            format!("Start learning {name} from scratch"),
            format!("Take an introductory course in {name}"),
        ]
    } else {
        vec![
            format!(
                "Improve {name} from level {} to {}",
                gap.current_level,
                gap.required_level.get()
            ),
            format!("Practice {name} in real-world projects"),
        ]
    };
    actions.push(format!("Seek mentorship in {name}"));
    actions.push(format!("Join {name} communities and forums"));
    actions.push(format!("Work on {name} projects in your current role"));
    actions
}

fn build_resources(name: &str) -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor {
            kind: ResourceKind::Course,
            name: format!("Complete {name} Course"),
            provider: "SkillSphere Learning".to_string(),
            duration: "8-12 weeks".to_string(),
            level: "Beginner to Advanced".to_string(),
        },
        ResourceDescriptor {
            kind: ResourceKind::Book,
            name: format!("The Complete Guide to {name}"),
            provider: "Technical Books".to_string(),
            duration: "Self-paced".to_string(),
            level: "Comprehensive".to_string(),
        },
        ResourceDescriptor {
            kind: ResourceKind::Certification,
            name: format!("{name} Professional Certification"),
            provider: "Industry Standard".to_string(),
            duration: "3-6 months".to_string(),
            level: "Professional".to_string(),
        },
        ResourceDescriptor {
            kind: ResourceKind::Practice,
            name: format!("{name} Practice Projects"),
            provider: "SkillSphere Labs".to_string(),
            duration: "Ongoing".to_string(),
            level: "Hands-on".to_string(),
        },
    ]
}

/// Build one milestone per integer level step
///
/// The skill name is a parameter owned by this call, so milestone text for
/// one gap can never pick up the name of another gap being processed in
/// the same batch.
fn build_milestones(
    skill_name: &str,
    current_level: u8,
    target_level: u8,
    total_months: u32,
) -> Vec<Milestone> {
    let steps = target_level.saturating_sub(current_level);
    if steps == 0 {
        return Vec::new();
    }
    let per_step = total_months as f64 / steps as f64;
    (current_level + 1..=target_level)
        .map(|level| Milestone {
            level,
            description: format!("Reach {skill_name} level {level}"),
            estimated_months: per_step,
            criteria: level_criteria(skill_name, level),
        })
        .collect()
}

/// Fixed five-tier rubric, three criteria per level
fn level_criteria(skill_name: &str, level: u8) -> Vec<String> {
    match level {
        1 => vec![
            format!("Understand basic {skill_name} concepts"),
            format!("Complete introductory {skill_name} tutorials"),
            format!("Demonstrate basic {skill_name} knowledge"),
        ],
        2 => vec![
            format!("Apply {skill_name} in simple projects"),
            format!("Understand intermediate {skill_name} concepts"),
            format!("Complete {skill_name} exercises independently"),
        ],
        3 => vec![
            format!("Use {skill_name} in complex projects"),
            format!("Teach {skill_name} to others"),
            format!("Contribute to {skill_name} discussions and forums"),
        ],
        4 => vec![
            format!("Lead {skill_name} projects"),
            format!("Design {skill_name} solutions"),
            format!("Mentor others in {skill_name}"),
        ],
        5 => vec![
            format!("Expert-level {skill_name} knowledge"),
            format!("Contribute to {skill_name} standards and best practices"),
            format!("Recognized as {skill_name} expert in the industry"),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Proficiency;

    fn make_gap(name: &str, current: u8, required: u8, priority: f64) -> SkillGap {
        SkillGap {
            skill_name: name.to_string(),
            current_level: current,
            required_level: Proficiency::new(required).unwrap(),
            gap_size: required - current,
            priority,
            estimated_months: ((required - current) as f64 * 2.5).round().max(1.0) as u32,
            is_missing: current == 0,
        }
    }

    #[test]
    fn test_recommendation_cap() {
        let gaps: Vec<SkillGap> = (0..8)
            .map(|i| make_gap(&format!("Skill{i}"), 0, 3, 0.9 - i as f64 * 0.05))
            .collect();
        let recs = generate(&gaps);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        // Exactly the first five by sorted order
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.skill_name, format!("Skill{i}"));
        }
    }

    #[test]
    fn test_fewer_gaps_than_cap() {
        let gaps = vec![make_gap("Python", 2, 5, 0.75)];
        assert_eq!(generate(&gaps).len(), 1);
    }

    #[test]
    fn test_missing_skill_actions_start_from_scratch() {
        let gaps = vec![make_gap("Rust", 0, 3, 0.8)];
        let recs = generate(&gaps);
        assert_eq!(recs[0].actions.len(), 5);
        assert!(recs[0].actions[0].contains("from scratch"));
        assert!(recs[0].actions[1].contains("introductory course"));
    }

    #[test]
    fn test_existing_skill_actions_improve() {
        let gaps = vec![make_gap("Python", 2, 5, 0.8)];
        let recs = generate(&gaps);
        assert!(recs[0].actions[0].contains("from level 2 to 5"));
        assert!(recs[0].actions[1].contains("real-world projects"));
    }

    #[test]
    fn test_resource_catalog_has_four_kinds() {
        let recs = generate(&[make_gap("SQL", 1, 3, 0.7)]);
        let kinds: Vec<ResourceKind> = recs[0].resources.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Course,
                ResourceKind::Book,
                ResourceKind::Certification,
                ResourceKind::Practice
            ]
        );
        assert!(recs[0].resources[0].name.contains("SQL"));
    }

    #[test]
    fn test_one_milestone_per_level_step() {
        let recs = generate(&[make_gap("Python", 2, 5, 0.8)]);
        let milestones = &recs[0].milestones;
        assert_eq!(milestones.len(), 3);
        assert_eq!(milestones[0].level, 3);
        assert_eq!(milestones[2].level, 5);
        for m in milestones {
            assert_eq!(m.criteria.len(), 3);
            assert!(m.description.contains("Python"));
        }
    }

    #[test]
    fn test_milestone_time_split_evenly() {
        let gap = make_gap("Python", 1, 5, 0.8);
        let total = gap.estimated_months;
        let recs = generate(&[gap]);
        let milestones = &recs[0].milestones;
        let sum: f64 = milestones.iter().map(|m| m.estimated_months).sum();
        assert!((sum - total as f64).abs() < 1e-9);
    }

    #[test]
    fn test_milestones_do_not_leak_names_across_gaps() {
        let gaps = vec![make_gap("Python", 0, 3, 0.9), make_gap("Kubernetes", 0, 3, 0.8)];
        let recs = generate(&gaps);
        for m in &recs[0].milestones {
            assert!(m.description.contains("Python"));
            assert!(!m.description.contains("Kubernetes"));
            assert!(m.criteria.iter().all(|c| c.contains("Python")));
            assert!(m.criteria.iter().all(|c| !c.contains("Kubernetes")));
        }
        for m in &recs[1].milestones {
            assert!(m.description.contains("Kubernetes"));
            assert!(!m.description.contains("Python"));
            assert!(m.criteria.iter().all(|c| c.contains("Kubernetes")));
        }
    }

    #[test]
    fn test_rubric_criteria_per_level() {
        let c1 = level_criteria("Go", 1);
        let c5 = level_criteria("Go", 5);
        assert!(c1[0].contains("basic"));
        assert!(c5[2].contains("expert"));
        assert_ne!(c1, c5);
    }
}
