use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::RawVoice;

/// The stable shape the inspector works with. Field names double as the
/// export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRecord {
    pub name: String,
    pub language: String,
    pub local: bool,
}

impl From<&RawVoice> for VoiceRecord {
    fn from(voice: &RawVoice) -> Self {
        Self {
            name: voice.name.clone(),
            language: voice.lang.clone(),
            local: voice.local_service,
        }
    }
}

/// Records keyed by language tag. Each group keeps input order.
pub type GroupedVoices = HashMap<String, Vec<VoiceRecord>>;

/// Project each platform voice onto name, language and locality.
pub fn format_voice_data(voices: &[RawVoice]) -> Vec<VoiceRecord> {
    voices.iter().map(VoiceRecord::from).collect()
}

/// Partition `voices` by language tag.
pub fn group_by_language(voices: &[VoiceRecord]) -> GroupedVoices {
    let mut grouped = GroupedVoices::new();
    for voice in voices {
        grouped
            .entry(voice.language.clone())
            .or_default()
            .push(voice.clone());
    }
    grouped
}

/// Group keys in ascending order by Unicode scalar value.
///
/// This matches a UTF-16 code unit sort (as JavaScript's `Array.sort`
/// does) for every tag inside the Basic Multilingual Plane, which covers
/// all BCP-47 tags. Keys with supplementary-plane characters sort after
/// U+E000..U+FFFF here, where a UTF-16 sort would put them before.
pub fn sorted_languages(grouped: &GroupedVoices) -> Vec<&str> {
    let mut languages: Vec<&str> = grouped.keys().map(String::as_str).collect();
    languages.sort_unstable();
    languages
}
