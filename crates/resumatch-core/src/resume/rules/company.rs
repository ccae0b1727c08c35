//! Current employer heuristic.

use regex::Regex;
use tracing::trace;

use super::patterns::{COMPANY_AFTER_EXPERIENCE, COMPANY_AFTER_PREPOSITION};
use super::FieldExtractor;

/// Current company extractor.
///
/// Looks for "at/with/for Company" first and "worked at Company" second.
/// Only the first match of each pattern is considered; if its text is not a
/// plausible company name the next pattern gets a chance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyExtractor;

impl CompanyExtractor {
    fn try_pattern(pattern: &Regex, text: &str) -> Option<String> {
        let caps = pattern.captures(text)?;
        let company = caps.get(1)?.as_str().trim();
        let length = company.chars().count();

        trace!("Company candidate {:?} ({} chars)", company, length);

        if length > 2 && length < 50 {
            Some(company.to_string())
        } else {
            None
        }
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        [&*COMPANY_AFTER_PREPOSITION, &*COMPANY_AFTER_EXPERIENCE]
            .into_iter()
            .find_map(|pattern| Self::try_pattern(pattern, text))
    }
}

/// Extract the current employer from text.
pub fn extract_current_company(text: &str) -> Option<String> {
    CompanyExtractor.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_with_since() {
        assert_eq!(
            extract_current_company("Senior Engineer at Acme Corp since 2019"),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn test_company_with_year() {
        assert_eq!(
            extract_current_company("Backend developer with Initech 2018 - present"),
            Some("Initech".to_string())
        );
    }

    #[test]
    fn test_company_at_end_of_text() {
        assert_eq!(
            extract_current_company("Currently working for Globex"),
            Some("Globex".to_string())
        );
    }

    #[test]
    fn test_company_with_punctuation() {
        assert_eq!(
            extract_current_company("Analyst at Smith & Sons, Inc. from 2015"),
            Some("Smith & Sons, Inc.".to_string())
        );
    }

    #[test]
    fn test_lowercase_phrase_rejected() {
        assert_eq!(extract_current_company("looking for new challenges"), None);
    }

    #[test]
    fn test_short_company_rejected() {
        assert_eq!(extract_current_company("Intern at IB as a tester"), None);
    }

    #[test]
    fn test_preposition_inside_word() {
        assert_eq!(
            extract_current_company("Format Works Inc as lead"),
            Some("Works Inc".to_string())
        );
    }

    #[test]
    fn test_no_company() {
        assert_eq!(extract_current_company(""), None);
        assert_eq!(extract_current_company("Jane Doe\nSoftware Engineer"), None);
    }
}
