//! Job-side requirement model.

use serde::{Deserialize, Serialize};

/// Screening requirements declared on a job requisition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    /// Must-have skill terms, in display order.
    pub mandatory_keywords: Vec<String>,

    /// Nice-to-have skill terms, in display order.
    pub preferred_keywords: Vec<String>,

    /// Minimum years of experience. Negative values are kept as given and
    /// can never be satisfied.
    pub min_experience_years: Option<i32>,
}

impl JobRequirements {
    /// Create requirements with mandatory keywords only.
    pub fn new<I, S>(mandatory: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mandatory_keywords: mandatory.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set preferred keywords.
    pub fn with_preferred<I, S>(mut self, preferred: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_keywords = preferred.into_iter().map(Into::into).collect();
        self
    }

    /// Set minimum years of experience.
    pub fn with_min_experience(mut self, years: Option<i32>) -> Self {
        self.min_experience_years = years;
        self
    }

    /// True when the job declares nothing to screen against.
    pub fn is_unconstrained(&self) -> bool {
        self.mandatory_keywords.is_empty()
            && self.preferred_keywords.is_empty()
            && self.min_experience_years.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let job = JobRequirements::new(["Rust"])
            .with_preferred(["Kubernetes", "gRPC"])
            .with_min_experience(Some(3));

        assert_eq!(job.mandatory_keywords, vec!["Rust"]);
        assert_eq!(job.preferred_keywords.len(), 2);
        assert_eq!(job.min_experience_years, Some(3));
        assert!(!job.is_unconstrained());
        assert!(JobRequirements::default().is_unconstrained());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let job: JobRequirements =
            serde_json::from_str(r#"{"mandatory_keywords":["SQL"],"min_experience_years":null}"#)
                .unwrap();
        assert_eq!(job.mandatory_keywords, vec!["SQL"]);
        assert!(job.preferred_keywords.is_empty());
        assert_eq!(job.min_experience_years, None);
    }
}
