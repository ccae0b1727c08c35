//! Candidate-side data models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Best-effort candidate attributes inferred from resume text.
///
/// Every field is independent: a missing email never prevents a phone
/// number from being reported. An empty profile is valid output and means
/// the recruiter has to fill the form in by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    /// Candidate name, taken from the top of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// First email address in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First phone number in the text, as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Employer inferred from "at/with/for Company" phrasing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,

    /// LinkedIn profile URL, as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    /// Years of professional experience, always within
    /// 0..=[`Self::MAX_YEARS_OF_EXPERIENCE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
}

impl ExtractedProfile {
    /// Largest years-of-experience value that is ever reported.
    pub const MAX_YEARS_OF_EXPERIENCE: u32 = 50;

    /// Field names in display order.
    pub const FIELDS: [&'static str; 6] = [
        "full_name",
        "email",
        "phone",
        "current_company",
        "linkedin_url",
        "years_of_experience",
    ];

    fn presence(&self) -> [bool; 6] {
        [
            self.full_name.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            self.current_company.is_some(),
            self.linkedin_url.is_some(),
            self.years_of_experience.is_some(),
        ]
    }

    /// Number of fields that were extracted.
    pub fn field_count(&self) -> usize {
        self.presence().iter().filter(|p| **p).count()
    }

    /// Names of the fields that still need manual input.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .zip(self.presence())
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// True when nothing could be extracted.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}

/// Candidate record as seen by the scorer.
///
/// Built from an [`ExtractedProfile`] plus whatever the recruiter typed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    /// Declared skills. Stored de-duplicated and sorted.
    pub skills: BTreeSet<String>,

    /// Years of professional experience, if known.
    pub years_of_experience: Option<u32>,
}

impl CandidateProfile {
    /// Create a candidate from a skill list.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            years_of_experience: None,
        }
    }

    /// Set years of experience.
    pub fn with_years_of_experience(mut self, years: Option<u32>) -> Self {
        self.years_of_experience = years;
        self
    }

    /// Pre-fill a candidate from extracted resume fields.
    pub fn from_extracted<I, S>(profile: &ExtractedProfile, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(skills).with_years_of_experience(profile.years_of_experience)
    }
}

/// Split a comma-separated skill string as entered in the candidate form.
///
/// Entries are trimmed and blanks dropped, so `"Rust, , Go "` yields
/// `["Rust", "Go"]`.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields() {
        let profile = ExtractedProfile {
            email: Some("jane@example.com".to_string()),
            years_of_experience: Some(4),
            ..Default::default()
        };

        assert_eq!(profile.field_count(), 2);
        assert_eq!(
            profile.missing_fields(),
            vec!["full_name", "phone", "current_company", "linkedin_url"]
        );
        assert!(!profile.is_empty());
        assert!(ExtractedProfile::default().is_empty());
    }

    #[test]
    fn test_profile_json_skips_absent_fields() {
        let profile = ExtractedProfile {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"full_name":"Jane Doe"}"#);
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(
            parse_skill_list("Rust, , Go ,TypeScript"),
            vec!["Rust", "Go", "TypeScript"]
        );
        assert!(parse_skill_list("  ").is_empty());
    }

    #[test]
    fn test_candidate_from_extracted() {
        let profile = ExtractedProfile {
            years_of_experience: Some(7),
            ..Default::default()
        };

        let candidate = CandidateProfile::from_extracted(&profile, ["Rust", "Rust", "Go"]);
        assert_eq!(candidate.skills.len(), 2);
        assert_eq!(candidate.years_of_experience, Some(7));
    }

    #[test]
    fn test_candidate_deserialize_defaults() {
        let candidate: CandidateProfile = serde_json::from_str(r#"{"skills":["SQL"]}"#).unwrap();
        assert!(candidate.skills.contains("SQL"));
        assert_eq!(candidate.years_of_experience, None);
    }
}
