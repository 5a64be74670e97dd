use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum InspectorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(all(feature = "system", not(target_arch = "wasm32")))]
    #[error("Speech backend error: {0}")]
    Tts(#[from] tts::Error),
    #[error("Invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
    #[error("Invalid query parameters: {0}")]
    QueryParams(#[from] crate::query::QueryParamsBuilderError),
    #[error("Failed to read voice snapshot {path}: {reason}")]
    Snapshot { path: PathBuf, reason: String },
    #[error("Voices were already resolved; the inspector queries exactly once.")]
    AlreadyResolved,
    #[error("No voices to export. Wait for the query to resolve with at least one voice.")]
    NothingToExport,
}
