//! # voice-inspector
//!
//! A small diagnostic library that enumerates the speech-synthesis voices
//! available on the host, groups them by language and exports the result.
//!
//! ## Features
//!
//! - **Pluggable registries**: the host voice list is reached through the
//!   [`VoiceRegistry`] capability, so it can be swapped for a snapshot file
//!   or a host-driven fake
//! - **One-shot query**: waits for the registry's "voices available"
//!   notification at most once, with an optional timeout
//! - **Summary and breakdown**: total/local/remote counts and a per-language
//!   table, rendered as text or HTML
//! - **JSON export**: writes `browser-voices.json`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! voice-inspector = { version = "0.1", features = ["system"] }
//! ```
//!
//! ```ignore
//! use voice_inspector::{presenter::VoiceInspector, query::QueryParams, registries};
//!
//! let registry = registries::platform_registry();
//! let inspector = VoiceInspector::mount(registry.as_ref(), &QueryParams::default()).await;
//! inspector.render_text(&mut std::io::stdout())?;
//! inspector.export(std::path::Path::new("."))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod presenter;
pub mod query;
pub mod registries;
pub mod transform;

pub use error::InspectorError;

use serde::{Deserialize, Serialize};

/// One installed voice as the platform describes it.
///
/// Snapshot files may use either the platform field names (`lang`,
/// `localService`) or the exported ones (`language`, `local`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVoice {
    /// Display name, e.g. `"Microsoft Zira - English (United States)"`
    pub name: String,
    /// Language tag, e.g. `"en-US"`
    #[serde(alias = "language")]
    pub lang: String,
    /// True when the voice is synthesized on-device
    #[serde(alias = "local", default)]
    pub local_service: bool,
    /// Platform identifier for the voice
    #[serde(rename = "voiceURI", default)]
    pub voice_uri: String,
    /// Whether the platform marks this as its default voice
    #[serde(default)]
    pub default: bool,
}

impl RawVoice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>, local_service: bool) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            local_service,
            voice_uri: String::new(),
            default: false,
        }
    }
}

/// Callback handed to [`VoiceRegistry::on_voices_changed`].
pub type VoicesChanged = Box<dyn FnOnce() + Send + 'static>;

/// Host capability that knows which voices are installed.
///
/// Implementations are injected into the query rather than reached
/// globally, which lets tests and embedders substitute their own.
pub trait VoiceRegistry: Send + Sync {
    /// The voices the platform currently reports. May be empty while the
    /// platform is still loading.
    fn voices(&self) -> Vec<RawVoice>;

    /// Register a one-shot notification for when the voice list becomes
    /// available.
    ///
    /// The callback is invoked at most once. A registry that can never
    /// produce voices may drop it without calling it.
    fn on_voices_changed(&self, callback: VoicesChanged);
}
