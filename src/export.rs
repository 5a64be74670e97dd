use std::fs;
use std::path::{Path, PathBuf};

use crate::transform::VoiceRecord;
use crate::InspectorError;

/// Name of the exported file. Not configurable.
pub const EXPORT_FILE_NAME: &str = "browser-voices.json";

/// Serialize records as a JSON array indented with two spaces, in the
/// order given.
pub fn to_json(voices: &[VoiceRecord]) -> Result<String, InspectorError> {
    Ok(serde_json::to_string_pretty(voices)?)
}

/// Save `voices` as [`EXPORT_FILE_NAME`] inside `dir`, replacing any
/// previous export.
///
/// The content goes to a hidden staging file first and is renamed into
/// place, so readers never observe a half-written export.
pub fn download_json(voices: &[VoiceRecord], dir: &Path) -> Result<PathBuf, InspectorError> {
    let json = to_json(voices)?;
    let target = dir.join(EXPORT_FILE_NAME);
    let staging = dir.join(format!(".{EXPORT_FILE_NAME}.part"));

    fs::write(&staging, json.as_bytes())?;
    if let Err(e) = fs::rename(&staging, &target) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    log::info!("Exported {} voices to {}", voices.len(), target.display());
    Ok(target)
}
