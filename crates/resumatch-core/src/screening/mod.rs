//! Candidate screening against job requirements.

mod matcher;
mod scorer;

pub use matcher::{count_matched, keyword_breakdown, keyword_matches, KeywordMatch};
pub use scorer::{experience_satisfied, score, screen, KeywordScorer, Scorer, ScreeningReport};
