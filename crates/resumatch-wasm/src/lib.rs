//! WASM bindings for resume parsing and candidate screening.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Profiles, jobs and reports cross the boundary as plain JS objects with
//! the same field names as their JSON form.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use resumatch_core::models::config::ResumatchConfig;
use resumatch_core::{
    parse_resume, validate_upload, CandidateProfile, JobRequirements, KeywordScorer, MatchBand,
    RawDocument, ResumeParser,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("invalid {}: {}", what, e)))
}

/// Extract candidate fields from resume text.
///
/// Never fails on odd input: fields that cannot be found are left out of
/// the returned object.
#[wasm_bindgen]
pub fn extract_profile(text: &str) -> Result<JsValue, JsValue> {
    to_js(&resumatch_core::extract(text))
}

/// Validate and parse an uploaded resume file.
///
/// Only plain text is decoded in the browser build; PDFs are rejected as
/// unsupported.
#[wasm_bindgen]
pub fn parse_upload(bytes: &[u8], mime_type: &str) -> Result<JsValue, JsValue> {
    let config = ResumatchConfig::default();
    let format = validate_upload(mime_type, bytes.len() as u64, &config.ingest)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let parsed = parse_resume(&RawDocument::new(bytes, format), &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_js(&parsed)
}

/// Score a candidate (`{ skills, years_of_experience }`) against a job
/// (`{ mandatory_keywords, preferred_keywords, min_experience_years }`).
#[wasm_bindgen]
pub fn score_candidate(candidate: JsValue, job: JsValue) -> Result<JsValue, JsValue> {
    let candidate: CandidateProfile = from_js(candidate, "candidate")?;
    let job: JobRequirements = from_js(job, "job requirements")?;

    to_js(&resumatch_core::score(&candidate, &job))
}

/// Display band label for an overall match percentage.
#[wasm_bindgen]
pub fn classify_match(percentage: u8) -> String {
    MatchBand::from_percentage(percentage).label().to_string()
}

/// Whether a keyword badge should show as matched for the given skills.
#[wasm_bindgen]
pub fn keyword_matches(skills: &Array, keyword: &str) -> bool {
    let skills: Vec<String> = skills.iter().filter_map(|v| v.as_string()).collect();
    resumatch_core::keyword_matches(&skills, keyword)
}

/// Split a comma-separated skill string from a form input.
#[wasm_bindgen]
pub fn parse_skill_list(input: &str) -> Array {
    resumatch_core::parse_skill_list(input)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Configured parser and scorer for browser use.
#[wasm_bindgen]
pub struct ResumeScreener {
    config: ResumatchConfig,
    parser: ResumeParser,
    scorer: KeywordScorer,
}

#[wasm_bindgen]
impl ResumeScreener {
    /// Create a screener with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(ResumatchConfig::default())
    }

    /// Create a screener from a JSON configuration document.
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<ResumeScreener, JsValue> {
        let config: ResumatchConfig =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self::with_config(config))
    }

    /// Pin the year used for the earliest-year experience fallback.
    #[wasm_bindgen]
    pub fn set_reference_year(&mut self, year: Option<i32>) {
        self.config.extraction.reference_year = year;
        self.parser = ResumeParser::from_config(&self.config.extraction);
    }

    /// Extract candidate fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Score with keyword badges and a display band.
    #[wasm_bindgen]
    pub fn screen(&self, candidate: JsValue, job: JsValue) -> Result<JsValue, JsValue> {
        let candidate: CandidateProfile = from_js(candidate, "candidate")?;
        let job: JobRequirements = from_js(job, "job requirements")?;

        to_js(&self.scorer.screen(&candidate, &job))
    }

    /// Band label using the configured thresholds.
    #[wasm_bindgen]
    pub fn classify(&self, percentage: u8) -> String {
        MatchBand::with_thresholds(percentage, &self.config.scoring.bands)
            .label()
            .to_string()
    }
}

impl ResumeScreener {
    fn with_config(config: ResumatchConfig) -> Self {
        Self {
            parser: ResumeParser::from_config(&config.extraction),
            scorer: KeywordScorer::from_config(&config.scoring),
            config,
        }
    }
}

impl Default for ResumeScreener {
    fn default() -> Self {
        Self::new()
    }
}
