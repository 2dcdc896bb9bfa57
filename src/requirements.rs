//! Requirement extraction
//!
//! Turns either an explicit list of requirement strings or free-text job
//! descriptions into structured requirement records. Extraction is a
//! closed-world heuristic: level keywords and a fixed role-template table,
//! with documented fallbacks for everything it does not recognize. It
//! never fails.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::market::{MarketSignal, DEFAULT_DEMAND, DEFAULT_REQUIRED_LEVEL};
use crate::profile::Proficiency;
use crate::taxonomy::normalize;

/// One structured requirement derived for a single analysis
///
/// Transient - lives for the duration of one analysis call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Canonical skill name
    pub skill_name: String,
    /// Level the role demands
    pub required_level: Proficiency,
    /// Importance weight in [0, 1]
    pub importance: f64,
}

/// Requirement source for an analysis call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RequirementInput {
    /// Explicit requirement strings, e.g. `["Python (Senior)", "SQL"]`
    List(Vec<String>),
    /// Free-form job description text
    JobDescription(String),
}

/// One role template entry: skill, level, importance
type TemplateEntry = (&'static str, u8, f64);

static ROLE_TEMPLATES: OnceLock<IndexMap<&'static str, Vec<TemplateEntry>>> = OnceLock::new();

fn role_templates() -> &'static IndexMap<&'static str, Vec<TemplateEntry>> {
    ROLE_TEMPLATES.get_or_init(|| {
        IndexMap::from([
            (
                "software engineer",
                vec![
                    ("Programming", 4, 0.9),
                    ("Problem Solving", 4, 0.8),
                    ("System Design", 3, 0.7),
                    ("Database Design", 3, 0.6),
                    ("Version Control", 4, 0.8),
                ],
            ),
            (
                "data scientist",
                vec![
                    ("Python", 4, 0.9),
                    ("Machine Learning", 4, 0.9),
                    ("Statistics", 4, 0.8),
                    ("Data Visualization", 3, 0.7),
                    ("SQL", 4, 0.8),
                ],
            ),
            (
                "product manager",
                vec![
                    ("Product Strategy", 4, 0.9),
                    ("User Research", 3, 0.7),
                    ("Data Analysis", 3, 0.7),
                    ("Stakeholder Management", 4, 0.8),
                    ("Agile Methodologies", 4, 0.8),
                ],
            ),
        ])
    })
}

/// Fallback template for roles the table does not know
const GENERIC_TEMPLATE: &[TemplateEntry] = &[
    ("Communication", 3, 0.7),
    ("Problem Solving", 3, 0.7),
    ("Teamwork", 3, 0.6),
];

/// Split "Python (Senior)" into the name part and the parenthesized
/// qualifier, if any
fn split_qualifier(raw: &str) -> (&str, Option<&str>) {
    match raw.find('(') {
        Some(open) => {
            let name = raw[..open].trim();
            let rest = &raw[open + 1..];
            let qualifier = rest.split(')').next().map(str::trim);
            (name, qualifier.filter(|q| !q.is_empty()))
        }
        None => (raw.trim(), None),
    }
}

/// Resolve the required level for one requirement string
///
/// Keyword match anywhere in the lowered string wins; a qualifier with no
/// recognized keyword defaults to advanced (4); a bare skill name takes the
/// market's explicit level if present, else 3.
fn required_level(raw: &str, canonical: &str, market: &MarketSignal) -> u8 {
    let lowered = raw.to_lowercase();
    if lowered.contains("senior") || lowered.contains("expert") {
        5
    } else if lowered.contains("intermediate") || lowered.contains("mid") {
        3
    } else if lowered.contains("junior") || lowered.contains("entry") {
        2
    } else if split_qualifier(raw).1.is_some() {
        4
    } else {
        market
            .required_level(canonical)
            .unwrap_or(DEFAULT_REQUIRED_LEVEL)
    }
}

/// Extract requirements from an explicit list of requirement strings
///
/// Each string is lower-cased and matched for level-indicating keywords;
/// importance comes from the market demand for the skill, defaulting to
/// 0.5 when the signal has no entry.
pub fn extract_from_list(
    requirement_strings: &[String],
    market: &MarketSignal,
) -> Vec<RequirementRecord> {
    requirement_strings
        .iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            let (name_part, _) = split_qualifier(raw);
            let skill_name = normalize(name_part);
            let level = required_level(raw, &skill_name, market);
            let importance = market.demand(&skill_name).unwrap_or(DEFAULT_DEMAND);
            RequirementRecord {
                required_level: Proficiency::new(level)
                    .unwrap_or_else(|_| Proficiency::expert()),
                skill_name,
                importance,
            }
        })
        .collect()
}

/// Extract requirements from free-form job-description text
///
/// Ordered candidate role lookup; the first role key found as a substring
/// of the lowered text wins. Unmatched text falls back to the generic
/// template.
pub fn extract_from_text(job_description: &str) -> Vec<RequirementRecord> {
    let lowered = job_description.to_lowercase();
    let template = role_templates()
        .iter()
        .find(|(role, _)| lowered.contains(*role))
        .map(|(_, entries)| entries.as_slice())
        .unwrap_or(GENERIC_TEMPLATE);

    template
        .iter()
        .map(|(name, level, importance)| RequirementRecord {
            skill_name: normalize(name),
            required_level: Proficiency::new(*level)
                .unwrap_or_else(|_| Proficiency::expert()),
            importance: *importance,
        })
        .collect()
}

/// Extract requirements from either input form
pub fn extract(input: &RequirementInput, market: &MarketSignal) -> Vec<RequirementRecord> {
    match input {
        RequirementInput::List(strings) => extract_from_list(strings, market),
        RequirementInput::JobDescription(text) => extract_from_text(text),
    }
}

/// Canonical skill names an input will produce requirements for
///
/// Cheap pre-pass used to resolve market signals before full extraction.
pub fn requirement_names(input: &RequirementInput) -> Vec<String> {
    match input {
        RequirementInput::List(strings) => strings
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| normalize(split_qualifier(raw).0))
            .collect(),
        RequirementInput::JobDescription(text) => {
            extract_from_text(text).into_iter().map(|r| r.skill_name).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::SkillSignal;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_senior_and_expert_map_to_five() {
        let market = MarketSignal::new();
        let records = extract_from_list(&list(&["Python (Senior)", "Rust (expert)"]), &market);
        assert_eq!(records[0].required_level.get(), 5);
        assert_eq!(records[1].required_level.get(), 5);
    }

    #[test]
    fn test_intermediate_and_junior_keywords() {
        let market = MarketSignal::new();
        let records = extract_from_list(
            &list(&["SQL (intermediate)", "Docker (junior)", "Go (entry level)"]),
            &market,
        );
        assert_eq!(records[0].required_level.get(), 3);
        assert_eq!(records[1].required_level.get(), 2);
        assert_eq!(records[2].required_level.get(), 2);
    }

    #[test]
    fn test_unrecognized_qualifier_defaults_to_advanced() {
        let market = MarketSignal::new();
        let records = extract_from_list(&list(&["Python (production)"]), &market);
        assert_eq!(records[0].required_level.get(), 4);
    }

    #[test]
    fn test_bare_name_takes_market_default() {
        let market = MarketSignal::new();
        let records = extract_from_list(&list(&["SQL"]), &market);
        assert_eq!(records[0].skill_name, "SQL");
        assert_eq!(records[0].required_level.get(), 3);
    }

    #[test]
    fn test_bare_name_takes_market_override() {
        let mut market = MarketSignal::new();
        market.insert("sql", SkillSignal::new(0.5, 0.5).with_required_level(4));
        let records = extract_from_list(&list(&["SQL"]), &market);
        assert_eq!(records[0].required_level.get(), 4);
    }

    #[test]
    fn test_importance_from_market_demand() {
        let mut market = MarketSignal::new();
        market.insert("python", SkillSignal::new(0.9, 0.8));
        let records = extract_from_list(&list(&["Python (Senior)", "SQL"]), &market);
        assert_eq!(records[0].importance, 0.9);
        assert_eq!(records[1].importance, 0.5);
    }

    #[test]
    fn test_names_are_canonical() {
        let market = MarketSignal::new();
        let records = extract_from_list(&list(&["js (senior)", "nodejs"]), &market);
        assert_eq!(records[0].skill_name, "JavaScript");
        assert_eq!(records[1].skill_name, "Node.js");
    }

    #[test]
    fn test_blank_strings_skipped() {
        let market = MarketSignal::new();
        let records = extract_from_list(&list(&["", "  ", "Python"]), &market);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_text_matches_known_role() {
        let records =
            extract_from_text("We are hiring a Data Scientist to join our analytics team.");
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].skill_name, "Python");
        assert_eq!(records[1].skill_name, "Machine Learning");
    }

    #[test]
    fn test_text_first_role_match_wins() {
        // Both roles appear; "software engineer" is checked first
        let records =
            extract_from_text("Software Engineer who collaborates with the product manager");
        assert_eq!(records[0].skill_name, "Programming");
    }

    #[test]
    fn test_text_unknown_role_gets_generic_template() {
        let records = extract_from_text("Seeking an experienced zookeeper.");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].skill_name, "Communication");
        assert_eq!(records[2].skill_name, "Teamwork");
        assert!(records.iter().all(|r| r.required_level.get() == 3));
        assert!(records.iter().all(|r| (0.6..=0.7).contains(&r.importance)));
    }

    #[test]
    fn test_requirement_names_pre_pass() {
        let input = RequirementInput::List(list(&["Python (Senior)", "SQL"]));
        assert_eq!(requirement_names(&input), vec!["Python", "SQL"]);

        let input = RequirementInput::JobDescription("product manager role".to_string());
        let names = requirement_names(&input);
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "Product Strategy");
    }

    #[test]
    fn test_extract_dispatches_on_input_kind() {
        let market = MarketSignal::new();
        let from_list = extract(
            &RequirementInput::List(list(&["Python"])),
            &market,
        );
        assert_eq!(from_list.len(), 1);
        let from_text = extract(
            &RequirementInput::JobDescription("software engineer".to_string()),
            &market,
        );
        assert_eq!(from_text.len(), 5);
    }
}
