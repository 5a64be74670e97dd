use std::sync::{Mutex, MutexGuard};

use crate::{RawVoice, VoiceRegistry, VoicesChanged};

/// A registry whose voice list is supplied by the embedding host.
///
/// The host calls [`announce`](Self::announce) once when its voices are
/// loaded. Like a platform `voiceschanged` handler slot, registering a new
/// callback replaces a pending one.
#[derive(Default)]
pub struct ManualRegistry {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    voices: Vec<RawVoice>,
    announced: bool,
    pending: Option<VoicesChanged>,
}

impl ManualRegistry {
    /// An empty registry that has not announced yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that is already populated.
    pub fn with_voices(voices: Vec<RawVoice>) -> Self {
        Self {
            state: Mutex::new(State {
                voices,
                announced: true,
                pending: None,
            }),
        }
    }

    /// Publish the voice list and fire the pending notification.
    ///
    /// Only the first announcement counts; later ones are ignored.
    pub fn announce(&self, voices: Vec<RawVoice>) {
        let callback = {
            let mut state = self.lock();
            if state.announced {
                log::warn!("Ignoring repeated voice announcement");
                return;
            }
            state.voices = voices;
            state.announced = true;
            state.pending.take()
        };

        if let Some(callback) = callback {
            callback();
        }
    }

    /// Whether [`announce`](Self::announce) has happened.
    pub fn is_announced(&self) -> bool {
        self.lock().announced
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl VoiceRegistry for ManualRegistry {
    fn voices(&self) -> Vec<RawVoice> {
        self.lock().voices.clone()
    }

    fn on_voices_changed(&self, callback: VoicesChanged) {
        let mut state = self.lock();
        if state.announced {
            drop(state);
            callback();
        } else {
            state.pending = Some(callback);
        }
    }
}
