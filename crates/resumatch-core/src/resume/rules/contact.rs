//! Contact details: email, phone, and LinkedIn profile.
//!
//! All three are plain "first regex match wins" passes. Nothing is
//! normalised; the value is returned exactly as it appears in the resume.

use regex::Regex;
use tracing::trace;

use super::patterns::{EMAIL, LINKEDIN_URL, PHONE};
use super::FieldExtractor;

fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    let found = pattern.find(text).map(|m| m.as_str().to_string());
    trace!("Pattern {} -> {:?}", pattern.as_str(), found);
    found
}

/// Email address extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        first_match(&EMAIL, text)
    }
}

/// Phone number extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        first_match(&PHONE, text)
    }
}

/// LinkedIn profile URL extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedInExtractor;

impl FieldExtractor for LinkedInExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        first_match(&LINKEDIN_URL, text)
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor.extract(text)
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor.extract(text)
}

/// Extract the first LinkedIn profile URL from text.
pub fn extract_linkedin_url(text: &str) -> Option<String> {
    LinkedInExtractor.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("Contact me at jane.doe@example.com today"),
            Some("jane.doe@example.com".to_string())
        );
        assert_eq!(
            extract_email("a@b.io and c@d.org"),
            Some("a@b.io".to_string())
        );
    }

    #[test]
    fn test_extract_email_requires_tld() {
        assert_eq!(extract_email("user@localhost"), None);
        assert_eq!(extract_email("user@host.c"), None);
    }

    #[test]
    fn test_extract_phone_formats() {
        assert_eq!(extract_phone("Tel: 555-123-4567"), Some("555-123-4567".to_string()));
        assert_eq!(extract_phone("(555) 123-4567"), Some("(555) 123-4567".to_string()));
        assert_eq!(extract_phone("call 555.123.4567"), Some("555.123.4567".to_string()));
        assert_eq!(
            extract_phone("Phone: +1 555 123 4567"),
            Some("+1 555 123 4567".to_string())
        );
    }

    #[test]
    fn test_extract_phone_too_short() {
        assert_eq!(extract_phone("ext 123-4567"), None);
    }

    #[test]
    fn test_extract_linkedin() {
        assert_eq!(
            extract_linkedin_url("Profile: https://www.linkedin.com/in/jane-doe/ (updated)"),
            Some("https://www.linkedin.com/in/jane-doe/".to_string())
        );
        assert_eq!(
            extract_linkedin_url("LINKEDIN.COM/IN/JaneDoe"),
            Some("LINKEDIN.COM/IN/JaneDoe".to_string())
        );
        assert_eq!(extract_linkedin_url("linkedin.com/company/acme"), None);
    }
}
