//! Related-skill adjacency graph
//!
//! Curated neighborhood lookup for "what usually travels with this skill".
//! The table is small and hand-maintained; an undirected graph keeps the
//! relationships symmetric and deduplicated without a matrix of lists.

use std::sync::OnceLock;

use indexmap::IndexMap;
use petgraph::graph::{NodeIndex, UnGraph};

use super::normalizer::canonical_key;

/// Hub skill -> related skills, as curated pairs
const RELATIONSHIPS: &[(&str, &[&str])] = &[
    (
        "python",
        &["data science", "machine learning", "django", "flask", "pandas"],
    ),
    (
        "javascript",
        &["react", "node.js", "typescript", "vue.js", "angular"],
    ),
    (
        "react",
        &["javascript", "typescript", "redux", "next.js", "graphql"],
    ),
    (
        "aws",
        &["cloud computing", "docker", "kubernetes", "serverless", "devops"],
    ),
    (
        "machine learning",
        &["python", "data science", "tensorflow", "pytorch", "scikit-learn"],
    ),
    (
        "data science",
        &["python", "pandas", "numpy", "matplotlib", "sql"],
    ),
    (
        "cybersecurity",
        &[
            "network security",
            "penetration testing",
            "incident response",
            "compliance",
        ],
    ),
    ("devops", &["docker", "kubernetes", "aws", "ci/cd", "monitoring"]),
];

/// Fallback for skills the graph knows nothing about
const GENERIC_RELATED: &[&str] = &[
    "problem solving",
    "communication",
    "teamwork",
    "project management",
];

struct SkillGraph {
    graph: UnGraph<&'static str, ()>,
    nodes: IndexMap<&'static str, NodeIndex>,
}

static GRAPH: OnceLock<SkillGraph> = OnceLock::new();

fn skill_graph() -> &'static SkillGraph {
    GRAPH.get_or_init(|| {
        let mut graph = UnGraph::new_undirected();
        let mut nodes: IndexMap<&'static str, NodeIndex> = IndexMap::new();
        for (hub, related) in RELATIONSHIPS.iter().copied() {
            let hub_idx = *nodes.entry(hub).or_insert_with(|| graph.add_node(hub));
            for name in related.iter().copied() {
                let rel_idx = *nodes.entry(name).or_insert_with(|| graph.add_node(name));
                // update_edge keeps the graph simple when two hub lists
                // mention the same pair
                graph.update_edge(hub_idx, rel_idx, ());
            }
        }
        SkillGraph { graph, nodes }
    })
}

/// Look up skills related to the given name
///
/// Matches the first hub whose key is contained in the canonical form of
/// the query (so "python backend" still hits the "python" neighborhood),
/// then returns that hub's graph neighbors. Unknown skills get the generic
/// soft-skill fallback - never an error.
pub fn related_skills(name: &str) -> Vec<String> {
    let key = canonical_key(name);
    let sg = skill_graph();
    for (hub, _) in RELATIONSHIPS.iter().copied() {
        if key.contains(hub) {
            let idx = sg.nodes[hub];
            let mut out: Vec<String> = sg
                .graph
                .neighbors(idx)
                .map(|n| sg.graph[n].to_string())
                .collect();
            // petgraph yields neighbors newest-edge-first; flip for a
            // stable curated-order listing
            out.reverse();
            return out;
        }
    }
    GENERIC_RELATED.iter().map(|s| s.to_string()).collect()
}
