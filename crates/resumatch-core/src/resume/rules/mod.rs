//! Rule-based field extractors for resume text.
//!
//! Each rule is an independent pass over the whole text. Rules never fail;
//! when the text does not contain what a rule looks for it returns `None`.

pub mod company;
pub mod contact;
pub mod experience;
pub mod name;
pub mod patterns;

pub use company::{extract_current_company, CompanyExtractor};
pub use contact::{
    extract_email, extract_linkedin_url, extract_phone, EmailExtractor, LinkedInExtractor,
    PhoneExtractor,
};
pub use experience::{extract_years_of_experience, ExperienceExtractor};
pub use name::{extract_full_name, NameExtractor};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text. The first match wins.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
