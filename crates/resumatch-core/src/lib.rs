//! Core library for resume screening.
//!
//! This crate provides:
//! - Resume document decoding (plain text and PDF text layer)
//! - Heuristic extraction of candidate fields from resume text
//! - Keyword and experience scoring of candidates against job requirements
//!
//! Extraction and scoring are pure functions: they do no I/O, hold no state,
//! and always return a value.

pub mod document;
pub mod error;
pub mod models;
pub mod resume;
pub mod screening;

pub use document::{parse_resume, validate_upload, DocumentFormat, ParsedResume, RawDocument};
pub use error::{DocumentError, ResumatchError, Result};
pub use models::config::{ResumatchConfig, ScoringConfig, ScoringWeights};
pub use models::job::JobRequirements;
pub use models::profile::{parse_skill_list, CandidateProfile, ExtractedProfile};
pub use models::score::{MatchBand, ScreeningScore};
pub use resume::{extract, extract_with_reference_year, ProfileExtractor, ResumeParser};
pub use screening::{keyword_matches, score, screen, KeywordScorer, Scorer, ScreeningReport};
