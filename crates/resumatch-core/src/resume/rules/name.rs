//! Candidate name heuristic.
//!
//! Resumes put the name at the top, so only the first few non-blank lines
//! are considered. A line is accepted when it looks like two to four plain
//! capitalised words.

use tracing::trace;

use super::patterns::NAME_SPECIAL_CHARS;
use super::FieldExtractor;

/// Full name extractor.
#[derive(Debug, Clone, Copy)]
pub struct NameExtractor {
    scan_lines: usize,
}

impl NameExtractor {
    /// Create a name extractor scanning the first 5 non-blank lines.
    pub fn new() -> Self {
        Self { scan_lines: 5 }
    }

    /// Set the number of non-blank lines to scan.
    pub fn with_scan_lines(mut self, scan_lines: usize) -> Self {
        self.scan_lines = scan_lines;
        self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        text.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.scan_lines)
            .find(|line| is_name_line(line))
            .map(str::to_string)
    }
}

/// Check whether a trimmed line qualifies as a candidate name.
pub fn is_name_line(line: &str) -> bool {
    let length = line.chars().count();
    if length <= 3 || length >= 50 {
        return false;
    }

    let words = line.split_whitespace().count();
    if !(2..=4).contains(&words) {
        return false;
    }

    let qualifies = !line.chars().any(|c| c.is_ascii_digit())
        && !NAME_SPECIAL_CHARS.is_match(line)
        && line.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    trace!("Name candidate {:?} -> {}", line, qualifies);
    qualifies
}

/// Extract the candidate name from the top of the text.
pub fn extract_full_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_on_first_line() {
        assert_eq!(
            extract_full_name("Jane Doe\nSoftware Engineer\njane@x.com"),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_skips_lines_with_digits_or_email() {
        let text = "jane@x.com\nResume 2024\n\n  Mary Ann Smith  \nEngineer";
        assert_eq!(extract_full_name(text), Some("Mary Ann Smith".to_string()));
    }

    #[test]
    fn test_only_first_five_non_blank_lines() {
        let text = "CURRICULUM\nVITAE\nfor\nthe\nposition\nJane Doe";
        assert_eq!(extract_full_name(text), None);

        let extractor = NameExtractor::new().with_scan_lines(6);
        assert_eq!(extractor.extract(text), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_line_rules() {
        assert!(is_name_line("Jane Doe"));
        assert!(is_name_line("Mary-Jane van Doe"));
        assert!(!is_name_line("Jane"));
        assert!(!is_name_line("J D"));
        assert!(!is_name_line("jane doe"));
        assert!(!is_name_line("Doe, Jane"));
        assert!(!is_name_line("Jane Doe Smith Brown Jones"));
        assert!(!is_name_line("Senior Engineer (Backend)"));
        assert!(!is_name_line(&format!("A {}", "b".repeat(48))));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_full_name(""), None);
        assert_eq!(extract_full_name("\n\n   \n"), None);
    }
}
