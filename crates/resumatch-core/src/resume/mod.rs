//! Resume field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract, extract_with_reference_year, ResumeParser};

use crate::models::profile::ExtractedProfile;

/// Trait for resume profile extractors.
pub trait ProfileExtractor {
    /// Extract candidate attributes from decoded resume text.
    ///
    /// Never fails: text without recognisable fields yields an empty profile.
    fn extract_profile(&self, text: &str) -> ExtractedProfile;
}
