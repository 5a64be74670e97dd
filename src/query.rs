//! Single-shot voice source query.
//!
//! The host voice list is read once. If it is already populated the query
//! resolves immediately, otherwise it subscribes to the registry's one-shot
//! "voices available" notification and resolves when that fires.

use std::time::Duration;

use derive_builder::Builder;
use futures::channel::oneshot;

use crate::{RawVoice, VoiceRegistry};

/// Parameters for a voice query.
///
/// ```
/// use std::time::Duration;
/// use voice_inspector::query::QueryParamsBuilder;
///
/// let params = QueryParamsBuilder::default()
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// assert_eq!(params.timeout, Some(Duration::from_secs(5)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct QueryParams {
    /// How long to wait for the availability notification.
    /// `None` waits until the registry signals, however long that takes.
    #[builder(setter(strip_option))]
    pub timeout: Option<Duration>,
}

impl QueryParams {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Retrieve the installed voices from `registry`.
///
/// Resolves exactly once. The notification is registered at most once and
/// never unsubscribed. On timeout, or when the registry drops the callback
/// without calling it, the query resolves with whatever the registry lists
/// at that moment, which is normally nothing.
pub async fn get_voices<R>(registry: &R, params: &QueryParams) -> Vec<RawVoice>
where
    R: VoiceRegistry + ?Sized,
{
    let voices = registry.voices();
    if !voices.is_empty() {
        log::debug!("Voice list already populated ({} voices)", voices.len());
        return voices;
    }

    let (tx, rx) = oneshot::channel::<()>();
    registry.on_voices_changed(Box::new(move || {
        // The receiver is gone once the query timed out
        let _ = tx.send(());
    }));
    log::debug!("Voice list empty, waiting for availability notification");

    let signalled = match params.timeout {
        Some(limit) => match tokio::time::timeout(limit, rx).await {
            Ok(result) => result.is_ok(),
            Err(_) => {
                log::warn!("No voices announced within {:?}", limit);
                false
            }
        },
        None => rx.await.is_ok(),
    };

    if !signalled {
        log::debug!("Registry will not announce voices");
    }

    let voices = registry.voices();
    log::info!("Resolved {} voices", voices.len());
    voices
}
