//! Skill Matcher — deterministic gap computation for a selected role.
//!
//! Matching is intentionally simple substring containment against the
//! lowercased candidate text. No tokenization, stemming, or word-boundary
//! checks: "aws" matches inside "jaws". The loose rule is part of the
//! published scoring contract and must not be tightened silently.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::RoleProfile;

#[derive(Debug, Error)]
pub enum MatchError {
    /// The readiness score divides by the core-skill count, so a role
    /// without core skills cannot be scored. Catalog validation makes this
    /// unreachable through the API.
    #[error("role '{0}' has no core skills to score against")]
    EmptyCore(String),
}

/// The outcome of one matcher invocation. Ephemeral: superseded by the next
/// analysis for the same session, never persisted.
///
/// Invariants: `matched_core ++ missing_core` is a permutation-free
/// partition of the role's `core` in declaration order; same for secondary.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub role: String,
    /// `floor(matched_core / core * 100)`, always in `0..=100`.
    pub score: u8,
    pub matched_core: Vec<String>,
    pub missing_core: Vec<String>,
    pub matched_secondary: Vec<String>,
    pub missing_secondary: Vec<String>,
}

impl AnalysisResult {
    /// All missing skills in roadmap order: core first, then secondary,
    /// each preserving the role's declaration order.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.missing_core
            .iter()
            .chain(&self.missing_secondary)
            .map(String::as_str)
    }

    /// True when the candidate covers every core and secondary skill.
    /// Distinct from "analysis not yet run", which is the absence of an
    /// `AnalysisResult` altogether.
    pub fn fully_qualified(&self) -> bool {
        self.missing_core.is_empty() && self.missing_secondary.is_empty()
    }
}

/// Runs the gap computation for one role against the candidate text.
pub fn match_role(candidate_text: &str, role: &RoleProfile) -> Result<AnalysisResult, MatchError> {
    if role.core.is_empty() {
        return Err(MatchError::EmptyCore(role.name.clone()));
    }

    let text = candidate_text.to_lowercase();
    let (matched_core, missing_core) = partition_by_containment(&text, &role.core);
    let (matched_secondary, missing_secondary) = partition_by_containment(&text, &role.secondary);

    // Integer floor division; matched_core.len() <= core.len() keeps this
    // in 0..=100.
    let score = (matched_core.len() * 100 / role.core.len()) as u8;

    Ok(AnalysisResult {
        role: role.name.clone(),
        score,
        matched_core,
        missing_core,
        matched_secondary,
        missing_secondary,
    })
}

/// Splits `skills` into (matched, missing) by case-insensitive substring
/// containment, preserving declaration order in both halves.
fn partition_by_containment(text: &str, skills: &[String]) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in skills {
        if text.contains(skill.as_str()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }
    (matched, missing)
}
