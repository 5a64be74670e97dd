//! Voice registries.
//!
//! This module contains implementations of [`VoiceRegistry`](crate::VoiceRegistry).
//!
//! # Available Registries
//!
//! - [`ManualRegistry`] - host-driven list, announced once by the embedder
//! - [`SnapshotRegistry`] - voices read from a JSON file
//! - [`UnsupportedRegistry`] - no speech API at all
//!
//! Enable platform registries via Cargo features:
//! - `system` - installed OS voices through the `tts` crate

pub mod manual;
pub mod snapshot;
#[cfg(all(feature = "system", not(target_arch = "wasm32")))]
pub mod system;

pub use manual::ManualRegistry;
pub use snapshot::SnapshotRegistry;
#[cfg(all(feature = "system", not(target_arch = "wasm32")))]
pub use system::SystemRegistry;

use crate::{RawVoice, VoiceRegistry, VoicesChanged};

/// Registry for hosts without a speech API.
///
/// Lists nothing and never announces, so a query against it resolves to an
/// empty collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRegistry;

impl VoiceRegistry for UnsupportedRegistry {
    fn voices(&self) -> Vec<RawVoice> {
        Vec::new()
    }

    fn on_voices_changed(&self, _callback: VoicesChanged) {}
}

/// The registry for the machine this process runs on.
///
/// Falls back to [`UnsupportedRegistry`] when the crate was built without
/// the `system` feature, targets wasm32, or the speech backend cannot be
/// opened.
pub fn platform_registry() -> Box<dyn VoiceRegistry> {
    #[cfg(all(feature = "system", not(target_arch = "wasm32")))]
    {
        match SystemRegistry::new() {
            Ok(registry) => return Box::new(registry),
            Err(e) => log::warn!("System speech backend unavailable: {e}"),
        }
    }
    #[cfg(not(all(feature = "system", not(target_arch = "wasm32"))))]
    log::warn!("No system speech backend in this build; no platform voices available");

    Box::new(UnsupportedRegistry)
}
