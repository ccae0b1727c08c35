//! Data models shared by the extractor, the scorer, and their callers.

pub mod config;
pub mod job;
pub mod profile;
pub mod score;
