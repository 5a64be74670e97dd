use std::fs;
use std::path::Path;

use crate::{InspectorError, RawVoice, VoiceRegistry, VoicesChanged};

/// Voices loaded from a JSON file.
///
/// Accepts an array of platform-shaped voices (`name`, `lang`,
/// `localService`) or the inspector's own export (`name`, `language`,
/// `local`), so a saved `browser-voices.json` can be inspected again.
#[derive(Debug, Clone)]
pub struct SnapshotRegistry {
    voices: Vec<RawVoice>,
}

impl SnapshotRegistry {
    /// Read the snapshot at `path`.
    pub fn open(path: &Path) -> Result<Self, InspectorError> {
        let content = fs::read_to_string(path)?;
        let voices: Vec<RawVoice> =
            serde_json::from_str(&content).map_err(|e| InspectorError::Snapshot {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        log::info!("Loaded {} voices from {}", voices.len(), path.display());
        Ok(Self { voices })
    }

    pub fn from_voices(voices: Vec<RawVoice>) -> Self {
        Self { voices }
    }
}

impl VoiceRegistry for SnapshotRegistry {
    fn voices(&self) -> Vec<RawVoice> {
        self.voices.clone()
    }

    /// A snapshot never changes. An empty one never announces.
    fn on_voices_changed(&self, callback: VoicesChanged) {
        if !self.voices.is_empty() {
            callback();
        }
    }
}
