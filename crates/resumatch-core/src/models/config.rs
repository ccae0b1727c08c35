//! Configuration structures for the screening pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ResumatchError, Result};
use crate::models::profile::ExtractedProfile;

/// Main configuration for resumatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumatchConfig {
    /// Upload validation and decoding.
    pub ingest: IngestConfig,

    /// Resume field extraction.
    pub extraction: ExtractionConfig,

    /// Candidate/job scoring.
    pub scoring: ScoringConfig,
}

/// Upload validation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Maximum accepted upload size in bytes.
    pub max_file_size: u64,

    /// MIME types accepted for upload.
    pub allowed_mime_types: Vec<String>,

    /// Number of characters of decoded text returned as a preview.
    pub preview_chars: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            allowed_mime_types: vec!["application/pdf".to_string(), "text/plain".to_string()],
            preview_chars: 500,
        }
    }
}

/// Resume field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Non-blank lines at the top of the document searched for a name.
    pub name_scan_lines: usize,

    /// Upper bound for an accepted years-of-experience value, at most 50.
    pub max_years_of_experience: u32,

    /// Year used for the earliest-year fallback (current year if unset).
    pub reference_year: Option<i32>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 5,
            max_years_of_experience: ExtractedProfile::MAX_YEARS_OF_EXPERIENCE,
            reference_year: None,
        }
    }
}

/// Scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Component weights of the overall percentage.
    pub weights: ScoringWeights,

    /// Thresholds of the display bands.
    pub bands: BandThresholds,
}

/// Weights of the three score components.
///
/// They do not have to sum to one; the overall score is normalised by their
/// sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of mandatory keyword coverage.
    pub mandatory: f64,
    /// Weight of preferred keyword coverage.
    pub preferred: f64,
    /// Weight of the experience gate.
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            mandatory: 0.60,
            preferred: 0.25,
            experience: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.mandatory + self.preferred + self.experience
    }

    /// Check that every weight is finite and non-negative with a positive sum.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("mandatory", self.mandatory),
            ("preferred", self.preferred),
            ("experience", self.experience),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ResumatchError::Config(format!(
                    "scoring weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.sum() <= 0.0 {
            return Err(ResumatchError::Config(
                "scoring weights must not all be zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Lower bounds of the Strong and Moderate bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub strong: u8,
    pub moderate: u8,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            strong: 70,
            moderate: 40,
        }
    }
}

impl ResumatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        self.scoring.weights.validate()?;

        if self.scoring.bands.moderate > self.scoring.bands.strong {
            return Err(ResumatchError::Config(format!(
                "moderate band threshold ({}) exceeds strong threshold ({})",
                self.scoring.bands.moderate, self.scoring.bands.strong
            )));
        }

        if self.extraction.max_years_of_experience > ExtractedProfile::MAX_YEARS_OF_EXPERIENCE {
            return Err(ResumatchError::Config(format!(
                "extraction.max_years_of_experience ({}) exceeds {}",
                self.extraction.max_years_of_experience,
                ExtractedProfile::MAX_YEARS_OF_EXPERIENCE
            )));
        }

        if self.ingest.max_file_size == 0 {
            return Err(ResumatchError::Config(
                "ingest.max_file_size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ResumatchConfig::default();
        assert_eq!(config.ingest.max_file_size, 10_485_760);
        assert_eq!(config.extraction.name_scan_lines, 5);
        assert!((config.scoring.weights.sum() - 1.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ResumatchConfig =
            serde_json::from_str(r#"{"scoring":{"weights":{"mandatory":0.8}}}"#).unwrap();
        assert_eq!(config.scoring.weights.mandatory, 0.8);
        assert_eq!(config.scoring.weights.preferred, 0.25);
        assert_eq!(config.scoring.bands, BandThresholds::default());
        assert_eq!(config.ingest, IngestConfig::default());
    }

    #[test]
    fn test_invalid_weights() {
        let weights = ScoringWeights {
            mandatory: -0.1,
            ..Default::default()
        };
        assert!(weights.validate().is_err());

        let zero = ScoringWeights {
            mandatory: 0.0,
            preferred: 0.0,
            experience: 0.0,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_inverted_bands_rejected() {
        let mut config = ResumatchConfig::default();
        config.scoring.bands = BandThresholds { strong: 30, moderate: 60 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_experience_cap_above_limit_rejected() {
        let mut config = ResumatchConfig::default();
        config.extraction.max_years_of_experience = 80;
        assert!(config.validate().is_err());

        config.extraction.max_years_of_experience = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ResumatchConfig::default();
        config.extraction.reference_year = Some(2024);
        config.save(&path).unwrap();

        let loaded = ResumatchConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
