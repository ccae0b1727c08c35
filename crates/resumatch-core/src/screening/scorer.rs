//! Weighted screening scorer.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::config::{ScoringConfig, ScoringWeights};
use crate::models::job::JobRequirements;
use crate::models::profile::CandidateProfile;
use crate::models::score::{MatchBand, ScreeningScore};

use super::matcher::{count_matched, keyword_breakdown, KeywordMatch};

/// Trait for candidate/job scorers.
pub trait Scorer {
    /// Score a candidate against a job. Total: never fails.
    fn score(&self, candidate: &CandidateProfile, job: &JobRequirements) -> ScreeningScore;
}

/// Full screening result for display: the score plus per-keyword badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub score: ScreeningScore,
    pub mandatory: Vec<KeywordMatch>,
    pub preferred: Vec<KeywordMatch>,
    pub band: MatchBand,
}

/// Keyword coverage scorer.
///
/// overall = (w_m * mandatory ratio + w_p * preferred ratio + w_e * experience)
///           / (w_m + w_p + w_e) * 100
///
/// An empty keyword list counts as fully covered.
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    config: ScoringConfig,
}

impl KeywordScorer {
    /// Create a scorer with the default 60/25/15 weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer from scoring configuration.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Set component weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.config.weights = weights;
        self
    }

    fn effective_weights(&self) -> ScoringWeights {
        match self.config.weights.validate() {
            Ok(()) => self.config.weights,
            Err(e) => {
                warn!("{}; falling back to default weights", e);
                ScoringWeights::default()
            }
        }
    }

    /// Score and attach the keyword breakdown and display band.
    pub fn screen(&self, candidate: &CandidateProfile, job: &JobRequirements) -> ScreeningReport {
        let mandatory = keyword_breakdown(candidate, &job.mandatory_keywords);
        let preferred = keyword_breakdown(candidate, &job.preferred_keywords);

        let score = self.score_breakdown(candidate, job, &mandatory, &preferred);
        let band = MatchBand::with_thresholds(score.overall_match_percentage, &self.config.bands);

        ScreeningReport {
            score,
            mandatory,
            preferred,
            band,
        }
    }

    fn score_breakdown(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        mandatory: &[KeywordMatch],
        preferred: &[KeywordMatch],
    ) -> ScreeningScore {
        let mandatory_total = mandatory.len() as u32;
        let mandatory_matched = count_matched(mandatory);
        let preferred_total = preferred.len() as u32;
        let preferred_matched = count_matched(preferred);
        let experience_match =
            experience_satisfied(candidate.years_of_experience, job.min_experience_years);

        let weights = self.effective_weights();
        let weighted = weights.mandatory * coverage_ratio(mandatory_matched, mandatory_total)
            + weights.preferred * coverage_ratio(preferred_matched, preferred_total)
            + weights.experience * if experience_match { 1.0 } else { 0.0 };
        let overall = to_percentage(weighted / weights.sum());

        debug!(
            "Screening: mandatory {}/{}, preferred {}/{}, experience {} -> {}%",
            mandatory_matched,
            mandatory_total,
            preferred_matched,
            preferred_total,
            experience_match,
            overall
        );

        ScreeningScore {
            mandatory_keywords_matched: mandatory_matched,
            mandatory_keywords_total: mandatory_total,
            preferred_keywords_matched: preferred_matched,
            preferred_keywords_total: preferred_total,
            experience_match,
            overall_match_percentage: overall,
        }
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, candidate: &CandidateProfile, job: &JobRequirements) -> ScreeningScore {
        self.screen(candidate, job).score
    }
}

/// Whether the candidate meets the minimum experience.
///
/// No requirement is always met, a missing candidate value counts as zero,
/// and a negative requirement can never be met.
pub fn experience_satisfied(candidate_years: Option<u32>, min_years: Option<i32>) -> bool {
    match min_years {
        None => true,
        Some(min) if min < 0 => false,
        Some(min) => i64::from(candidate_years.unwrap_or(0)) >= i64::from(min),
    }
}

fn coverage_ratio(matched: u32, total: u32) -> f64 {
    if total == 0 {
        1.0
    } else {
        f64::from(matched) / f64::from(total)
    }
}

fn to_percentage(fraction: f64) -> u8 {
    // Snap away float noise first so 62.49999999 rounds like 62.5
    let percent = (fraction * 100.0 * 1e6).round() / 1e6;
    percent.round().clamp(0.0, 100.0) as u8
}

/// Score with the default weights.
pub fn score(candidate: &CandidateProfile, job: &JobRequirements) -> ScreeningScore {
    KeywordScorer::new().score(candidate, job)
}

/// Score with explicit configuration and return the display report.
pub fn screen(
    candidate: &CandidateProfile,
    job: &JobRequirements,
    config: &ScoringConfig,
) -> ScreeningReport {
    KeywordScorer::from_config(config).screen(candidate, job)
}
