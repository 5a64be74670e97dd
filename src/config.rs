use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::presenter::OutputFormat;
use crate::query::{QueryParams, QueryParamsBuilder};
use crate::InspectorError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "voice-inspector.json";

/// Settings read from `voice-inspector.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Give up waiting for the voice list after this many milliseconds.
    /// Absent means wait indefinitely.
    pub timeout_ms: Option<u64>,
    /// Directory that receives `browser-voices.json`.
    pub export_dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            export_dir: PathBuf::from("."),
            format: OutputFormat::Text,
        }
    }
}

impl InspectorConfig {
    /// Load an explicitly requested config file. Any failure is an error.
    pub fn load(path: &Path) -> Result<Self, InspectorError> {
        let content = fs::read_to_string(path).map_err(|e| InspectorError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| InspectorError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load the config at `path` if there is one, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}. Using default configuration.");
            Self::default()
        })
    }

    pub fn query_params(&self) -> Result<QueryParams, InspectorError> {
        let mut builder = QueryParamsBuilder::default();
        if let Some(ms) = self.timeout_ms {
            builder.timeout(Duration::from_millis(ms));
        }
        Ok(builder.build()?)
    }
}
