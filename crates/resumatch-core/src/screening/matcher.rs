//! Keyword matching rule shared by the scorer and per-keyword badges.
//!
//! A keyword matches when any candidate skill contains it, ignoring case.
//! The direction matters: the keyword "React" matches the skill "ReactJS",
//! but the keyword "ReactJS" does not match the skill "React".

use serde::{Deserialize, Serialize};

use crate::models::profile::CandidateProfile;

/// Matched/unmatched state of a single job keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub matched: bool,
}

/// Check one keyword against a set of skills.
pub fn keyword_matches<'a, I>(skills: I, keyword: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let needle = keyword.to_lowercase();
    skills
        .into_iter()
        .any(|skill| skill.to_lowercase().contains(&needle))
}

/// Evaluate every keyword against a candidate, preserving declared order.
///
/// Duplicated keywords appear once per occurrence.
pub fn keyword_breakdown(candidate: &CandidateProfile, keywords: &[String]) -> Vec<KeywordMatch> {
    // Lower-case the skills once instead of once per keyword
    let skills: Vec<String> = candidate.skills.iter().map(|s| s.to_lowercase()).collect();

    keywords
        .iter()
        .map(|keyword| KeywordMatch {
            keyword: keyword.clone(),
            matched: keyword_matches(&skills, keyword),
        })
        .collect()
}

/// Number of matched entries in a breakdown.
pub fn count_matched(breakdown: &[KeywordMatch]) -> u32 {
    breakdown.iter().filter(|k| k.matched).count() as u32
}
