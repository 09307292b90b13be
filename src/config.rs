// src/config.rs

use crate::logging::{project_directory, PROJECT_NAME};
use color_eyre::eyre::{Result, WrapErr};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

lazy_static! {
    pub static ref RESULTS_ENV: String = format!("{}_RESULTS", PROJECT_NAME.clone());
}

const CONFIG_FILE: &str = "config.json";

/// Runtime options for the survey page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Whether the widget offers the results tab.
    pub show_results: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self { show_results: true }
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

impl SurveyConfig {
    /// Reads the config file, then applies the environment override.
    pub fn load() -> Result<Self> {
        let path = get_config_dir().join(CONFIG_FILE);
        let mut config = Self::from_file(&path)?;
        if let Ok(value) = std::env::var(RESULTS_ENV.as_str()) {
            config = config.with_results_override(&value);
        }
        info!(show_results = config.show_results, "Configuration loaded.");
        Ok(config)
    }

    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&raw).wrap_err_with(|| format!("invalid config in {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_results_override(self, value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" => Self { show_results: true },
            "0" | "false" | "off" => Self { show_results: false },
            other => {
                warn!(value = other, var = RESULTS_ENV.as_str(), "Ignoring unrecognized value.");
                self
            }
        }
    }
}
