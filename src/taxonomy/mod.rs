//! Skill vocabulary
//!
//! Canonical naming for skills plus the curated related-skill graph.
//! Everything here is a pure lookup over static tables.

pub mod normalizer;
pub mod related;

pub use normalizer::{canonical_key, normalize};
pub use related::related_skills;
