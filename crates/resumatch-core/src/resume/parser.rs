//! Resume parser combining the independent field rules.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::profile::ExtractedProfile;

use super::rules::{
    CompanyExtractor, EmailExtractor, ExperienceExtractor, FieldExtractor, LinkedInExtractor,
    NameExtractor, PhoneExtractor,
};
use super::ProfileExtractor;

/// Rule-based resume parser.
///
/// Runs every field rule over the full text. Rules do not see each other's
/// results, so a bad guess for one field cannot hide another.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeParser {
    name: NameExtractor,
    experience: ExperienceExtractor,
}

impl ResumeParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_name_scan_lines(config.name_scan_lines)
            .with_max_years_of_experience(config.max_years_of_experience)
            .with_reference_year(config.reference_year)
    }

    /// Set the number of non-blank lines searched for a name.
    pub fn with_name_scan_lines(mut self, lines: usize) -> Self {
        self.name = self.name.with_scan_lines(lines);
        self
    }

    /// Set the largest accepted years-of-experience value.
    pub fn with_max_years_of_experience(mut self, years: u32) -> Self {
        self.experience = self.experience.with_max_years(years);
        self
    }

    /// Pin the reference year for the calendar-year fallback.
    pub fn with_reference_year(mut self, year: Option<i32>) -> Self {
        self.experience = self.experience.with_reference_year(year);
        self
    }

    /// Parse a resume into a profile.
    pub fn parse(&self, text: &str) -> ExtractedProfile {
        let start = Instant::now();

        info!("Parsing resume from {} characters of text", text.len());

        let profile = ExtractedProfile {
            full_name: self.name.extract(text),
            email: EmailExtractor.extract(text),
            phone: PhoneExtractor.extract(text),
            current_company: CompanyExtractor.extract(text),
            linkedin_url: LinkedInExtractor.extract(text),
            years_of_experience: self.experience.extract(text),
        };

        debug!(
            "Extracted {} of {} fields in {:?}, missing: {:?}",
            profile.field_count(),
            ExtractedProfile::FIELDS.len(),
            start.elapsed(),
            profile.missing_fields()
        );

        profile
    }
}

impl ProfileExtractor for ResumeParser {
    fn extract_profile(&self, text: &str) -> ExtractedProfile {
        self.parse(text)
    }
}

/// Extract a profile with default settings.
pub fn extract(text: &str) -> ExtractedProfile {
    ResumeParser::new().parse(text)
}

/// Extract a profile with a pinned reference year, for reproducible results.
pub fn extract_with_reference_year(text: &str, reference_year: i32) -> ExtractedProfile {
    ResumeParser::new()
        .with_reference_year(Some(reference_year))
        .parse(text)
}
