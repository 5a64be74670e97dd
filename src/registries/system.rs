//! Installed operating-system voices via the `tts` crate.
//!
//! Backends by platform:
//! - **Windows**: WinRT / SAPI
//! - **macOS / iOS**: AVFoundation
//! - **Linux**: speech-dispatcher (`sudo apt-get install speech-dispatcher`)
//!
//! Not available on wasm32.

use tts::Tts;

use crate::{InspectorError, RawVoice, VoiceRegistry, VoicesChanged};

/// Voices reported by the platform speech backend.
///
/// The backend is enumerated once at construction. WinRT, SAPI,
/// AVFoundation and speech-dispatcher all synthesize on-device, and `tts`
/// does not report locality, so every voice is reported as local.
#[derive(Debug, Clone)]
pub struct SystemRegistry {
    voices: Vec<RawVoice>,
}

impl SystemRegistry {
    /// Open the default backend and read its voices.
    pub fn new() -> Result<Self, InspectorError> {
        let tts = Tts::default()?;
        if !tts.supported_features().voice {
            log::warn!("Speech backend cannot enumerate voices");
            return Ok(Self { voices: Vec::new() });
        }

        let voices = tts
            .voices()?
            .into_iter()
            .map(|voice| RawVoice {
                name: voice.name(),
                lang: voice.language().to_string(),
                local_service: true,
                voice_uri: voice.id(),
                default: false,
            })
            .collect::<Vec<_>>();

        log::info!("Speech backend reports {} voices", voices.len());
        Ok(Self { voices })
    }
}

impl VoiceRegistry for SystemRegistry {
    fn voices(&self) -> Vec<RawVoice> {
        self.voices.clone()
    }

    /// The list is final once constructed; only a non-empty one announces.
    fn on_voices_changed(&self, callback: VoicesChanged) {
        if !self.voices.is_empty() {
            callback();
        }
    }
}
