//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod parse;
pub mod score;

use std::path::Path;

use resumatch_core::models::config::ResumatchConfig;

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ResumatchConfig> {
    if let Some(path) = config_path {
        return Ok(ResumatchConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        tracing::debug!("Using config file {}", default_path.display());
        Ok(ResumatchConfig::from_file(&default_path)?)
    } else {
        Ok(ResumatchConfig::default())
    }
}
