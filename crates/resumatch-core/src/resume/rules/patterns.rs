//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email: ASCII local part, dotted domain, alphabetic TLD
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone: optional +country code, then 3-3-4 with loose separators
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}"
    ).unwrap();

    // LinkedIn profile URL
    pub static ref LINKEDIN_URL: Regex = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+/?"
    ).unwrap();

    // Characters that disqualify a line from being a name
    pub static ref NAME_SPECIAL_CHARS: Regex = Regex::new(
        r#"[@#$%^&*()+=\[\]{}|\\:;"'<>,.?/]"#
    ).unwrap();

    // "at Acme Corp since 2019"
    pub static ref COMPANY_AFTER_PREPOSITION: Regex = Regex::new(
        r"(?i:at|with|for)\s+([A-Z][A-Za-z\s&,.]+?)(?:\s+(?:(?i:as|from|since)|[0-9]{4})|\s*$)"
    ).unwrap();

    // "worked for Acme Corp as ..."
    pub static ref COMPANY_AFTER_EXPERIENCE: Regex = Regex::new(concat!(
        r"(?i:experience|worked|working)\s+(?i:at|with|for)\s+",
        r"([A-Z][A-Za-z\s&,.]+?)(?:\s+(?:(?i:as|from|since)|[0-9]{4})|\s*$)"
    )).unwrap();

    // "7+ years of experience"
    pub static ref YEARS_OF_EXPERIENCE: Regex = Regex::new(
        r"(?i)([0-9]+)\+?\s*years?\s+(?:of\s+)?experience"
    ).unwrap();

    // "Experience: 7 years"
    pub static ref EXPERIENCE_LABELED: Regex = Regex::new(
        r"(?i)experience\s*:?\s*([0-9]+)\+?\s*years?"
    ).unwrap();

    // "7 years in backend development"
    pub static ref YEARS_IN: Regex = Regex::new(
        r"(?i)([0-9]+)\+?\s*years?\s+in"
    ).unwrap();

    // Standalone calendar year 1900-2099
    pub static ref CALENDAR_YEAR: Regex = Regex::new(
        r"\b(?:19|20)[0-9]{2}\b"
    ).unwrap();
}
