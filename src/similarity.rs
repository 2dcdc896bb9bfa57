//! Hash-based skill similarity
//!
//! Match scoring works over pseudo-embeddings: each canonical skill name is
//! hashed into a slot of a fixed-size vector, user vectors carry normalized
//! levels, requirement vectors carry 1.0 marks, and the match score is the
//! cosine similarity of the two. This is a placeholder heuristic, not a
//! semantic embedding - two unrelated skills can collide into one slot and
//! related skills share nothing. Swapping in a precomputed embedding lookup
//! is a product decision, not an engine change.
//!
//! SHA-256 supplies the slot index so scores are stable across processes
//! and platforms.

use sha2::{Digest, Sha256};

use crate::profile::SkillRecord;
use crate::requirements::RequirementRecord;
use crate::taxonomy::canonical_key;

/// Fixed pseudo-embedding dimension
pub const VECTOR_DIM: usize = 100;

/// Stable 64-bit hash of a string
pub(crate) fn stable_hash64(s: &str) -> u64 {
    let digest = Sha256::digest(s.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

fn slot(name: &str) -> usize {
    (stable_hash64(&canonical_key(name)) % VECTOR_DIM as u64) as usize
}

/// Pseudo-embedding of a user's skill set
///
/// Each skill marks its slot with `level / 5`; colliding skills keep the
/// stronger mark.
pub fn skill_vector(skills: &[SkillRecord]) -> Vec<f64> {
    let mut v = vec![0.0; VECTOR_DIM];
    for skill in skills {
        let i = slot(&skill.name);
        let mark = skill.level.get() as f64 / 5.0;
        if mark > v[i] {
            v[i] = mark;
        }
    }
    v
}

/// Pseudo-embedding of a requirement set
pub fn requirement_vector(requirements: &[RequirementRecord]) -> Vec<f64> {
    let mut v = vec![0.0; VECTOR_DIM];
    for req in requirements {
        v[slot(&req.skill_name)] = 1.0;
    }
    v
}

/// Cosine similarity between two vectors, 0.0 when either is all-zero
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Overall match score between a skill set and a requirement set, 0..=100
///
/// 100.0 by convention when there are no requirements to match against.
pub fn match_score(skills: &[SkillRecord], requirements: &[RequirementRecord]) -> f64 {
    if requirements.is_empty() {
        return 100.0;
    }
    cosine_similarity(&skill_vector(skills), &requirement_vector(requirements)) * 100.0
}
