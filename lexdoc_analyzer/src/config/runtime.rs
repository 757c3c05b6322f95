// RUNTIME PREFERENCES (User Experience)

use crate::config::compile_time::session::DEBOUNCE_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Cannot read preferences file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid preferences TOML in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Rendering of log events before they reach the `log` facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match env::var("LEXDOC_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerPreferences {
    /// Delay between the last edit and the re-analysis it schedules
    pub debounce_delay_ms: u64,

    /// Whether hover text includes the entry's example snippet
    pub include_examples_in_hover: bool,

    /// Whether unknown tokens get their own group in the category view
    pub group_identifiers: bool,

    /// Log event rendering
    pub log_format: LogFormat,
}

impl Default for AnalyzerPreferences {
    fn default() -> Self {
        Self {
            debounce_delay_ms: env::var("LEXDOC_DEBOUNCE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEBOUNCE_DELAY_MS),
            include_examples_in_hover: env::var("LEXDOC_HOVER_EXAMPLES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            group_identifiers: env::var("LEXDOC_GROUP_IDENTIFIERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_format: LogFormat::from_env(),
        }
    }
}

impl AnalyzerPreferences {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// Parse preferences from TOML; missing keys fall back to defaults
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, PreferencesError> {
        toml::from_str(content).map_err(|e| PreferencesError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| PreferencesError::Io {
            path: origin.clone(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &origin)
    }
}
