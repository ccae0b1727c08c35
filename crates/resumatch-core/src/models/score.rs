//! Screening score and display band models.

use serde::{Deserialize, Serialize};

use super::config::BandThresholds;

/// Result of screening one candidate against one job.
///
/// Recomputed from scratch whenever requested; storing it is the caller's
/// business and a recomputation simply overwrites the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningScore {
    /// Mandatory keywords found in the candidate's skills.
    pub mandatory_keywords_matched: u32,
    /// Mandatory keywords declared on the job.
    pub mandatory_keywords_total: u32,
    /// Preferred keywords found in the candidate's skills.
    pub preferred_keywords_matched: u32,
    /// Preferred keywords declared on the job.
    pub preferred_keywords_total: u32,
    /// Whether the experience requirement is met.
    pub experience_match: bool,
    /// Weighted overall match, 0..=100.
    pub overall_match_percentage: u8,
}

impl ScreeningScore {
    /// Share of mandatory keywords matched, as a display percentage.
    pub fn mandatory_coverage(&self) -> f64 {
        coverage_percent(self.mandatory_keywords_matched, self.mandatory_keywords_total)
    }

    /// Share of preferred keywords matched, as a display percentage.
    pub fn preferred_coverage(&self) -> f64 {
        coverage_percent(self.preferred_keywords_matched, self.preferred_keywords_total)
    }

    /// True when every mandatory keyword is present.
    pub fn all_mandatory_matched(&self) -> bool {
        self.mandatory_keywords_matched == self.mandatory_keywords_total
    }

    /// Band for the overall percentage using the default thresholds.
    pub fn band(&self) -> MatchBand {
        MatchBand::from_percentage(self.overall_match_percentage)
    }
}

fn coverage_percent(matched: u32, total: u32) -> f64 {
    if total == 0 {
        100.0
    } else {
        f64::from(matched) / f64::from(total) * 100.0
    }
}

/// Display classification of an overall match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    /// 70 and above by default.
    Strong,
    /// 40 and above by default.
    Moderate,
    Weak,
}

impl MatchBand {
    /// Classify with the standard 70/40 thresholds.
    pub fn from_percentage(percentage: u8) -> Self {
        Self::with_thresholds(percentage, &BandThresholds::default())
    }

    /// Classify with custom thresholds.
    pub fn with_thresholds(percentage: u8, thresholds: &BandThresholds) -> Self {
        if percentage >= thresholds.strong {
            Self::Strong
        } else if percentage >= thresholds.moderate {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "Strong Match",
            Self::Moderate => "Moderate Match",
            Self::Weak => "Weak Match",
        }
    }
}

impl std::fmt::Display for MatchBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
