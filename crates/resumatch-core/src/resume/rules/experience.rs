//! Years-of-experience heuristics.

use chrono::{Datelike, Local};
use regex::Regex;
use tracing::{debug, trace};

use crate::models::profile::ExtractedProfile;

use super::patterns::{CALENDAR_YEAR, EXPERIENCE_LABELED, YEARS_IN, YEARS_OF_EXPERIENCE};
use super::FieldExtractor;

/// Years-of-experience extractor.
///
/// Tries explicit phrases ("7 years of experience", "Experience: 7 years",
/// "7 years in") in that order. If none yields a plausible number, falls
/// back to the span between the earliest calendar year in the text and the
/// reference year, provided at least two years are mentioned.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceExtractor {
    reference_year: Option<i32>,
    max_years: u32,
}

impl ExperienceExtractor {
    /// Create an extractor using the current year as reference.
    pub fn new() -> Self {
        Self {
            reference_year: None,
            max_years: ExtractedProfile::MAX_YEARS_OF_EXPERIENCE,
        }
    }

    /// Pin the reference year used by the calendar-year fallback.
    pub fn with_reference_year(mut self, year: Option<i32>) -> Self {
        self.reference_year = year;
        self
    }

    /// Set the largest accepted value, capped at
    /// [`ExtractedProfile::MAX_YEARS_OF_EXPERIENCE`].
    pub fn with_max_years(mut self, max_years: u32) -> Self {
        self.max_years = max_years.min(ExtractedProfile::MAX_YEARS_OF_EXPERIENCE);
        self
    }

    fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    fn from_phrase(&self, pattern: &Regex, text: &str) -> Option<u32> {
        let caps = pattern.captures(text)?;
        // Digit runs too long for u32 are out of range anyway
        let years: u32 = caps[1].parse().ok()?;
        trace!("Experience phrase {:?} -> {}", &caps[0], years);
        (years <= self.max_years).then_some(years)
    }

    fn from_calendar_years(&self, text: &str) -> Option<u32> {
        let years: Vec<i32> = CALENDAR_YEAR
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        if years.len() < 2 {
            return None;
        }

        let earliest = *years.iter().min()?;
        let span = self.reference_year() - earliest;
        debug!(
            "Experience fallback: earliest year {} of {} found, span {}",
            earliest,
            years.len(),
            span
        );

        u32::try_from(span).ok().filter(|s| *s <= self.max_years)
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ExperienceExtractor {
    type Output = u32;

    fn extract(&self, text: &str) -> Option<u32> {
        [&*YEARS_OF_EXPERIENCE, &*EXPERIENCE_LABELED, &*YEARS_IN]
            .into_iter()
            .find_map(|pattern| self.from_phrase(pattern, text))
            .or_else(|| self.from_calendar_years(text))
    }
}

/// Extract years of experience using the current year as reference.
pub fn extract_years_of_experience(text: &str) -> Option<u32> {
    ExperienceExtractor::new().extract(text)
}
