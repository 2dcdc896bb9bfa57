//! Skill vocabulary normalizer
//!
//! Maps skill name variants onto canonical names via a fixed synonym table.
//! A miss falls back to title-casing the input rather than failing, so
//! `normalize` is a total function: any string in, some canonical-looking
//! string out.

use std::sync::OnceLock;

use indexmap::IndexMap;

static SYNONYMS: OnceLock<IndexMap<&'static str, &'static str>> = OnceLock::new();

fn synonym_table() -> &'static IndexMap<&'static str, &'static str> {
    SYNONYMS.get_or_init(|| {
        IndexMap::from([
            ("javascript", "JavaScript"),
            ("js", "JavaScript"),
            ("react.js", "React"),
            ("reactjs", "React"),
            ("react", "React"),
            ("node.js", "Node.js"),
            ("nodejs", "Node.js"),
            ("python", "Python"),
            ("java", "Java"),
            ("c++", "C++"),
            ("c#", "C#"),
            ("sql", "SQL"),
            ("machine learning", "Machine Learning"),
            ("ml", "Machine Learning"),
            ("artificial intelligence", "Artificial Intelligence"),
            ("ai", "Artificial Intelligence"),
            ("data science", "Data Science"),
            ("project management", "Project Management"),
            ("agile", "Agile"),
            ("scrum", "Scrum"),
            ("devops", "DevOps"),
            ("cloud computing", "Cloud Computing"),
            ("aws", "Amazon Web Services"),
            ("azure", "Microsoft Azure"),
            ("gcp", "Google Cloud Platform"),
        ])
    })
}

/// Normalize a raw skill name to its canonical form
///
/// Case-insensitive, trimmed lookup in the synonym table; on a miss the
/// input is title-cased (first letter of each whitespace-separated word
/// capitalized). Pure and total - no error conditions.
pub fn normalize(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    if let Some(canonical) = synonym_table().get(key.as_str()) {
        return (*canonical).to_string();
    }
    title_case(raw.trim())
}

/// Lowercased canonical form, used as a lookup key
///
/// Two variants of the same skill produce the same key, so matching user
/// skills against requirements is insensitive to spelling differences the
/// synonym table knows about.
pub fn canonical_key(raw: &str) -> String {
    normalize(raw).to_lowercase()
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
