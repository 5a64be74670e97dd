//! View state and rendering for the inspector.
//!
//! The component moves strictly forward: it starts out [`ViewState::Loading`]
//! and lands on [`ViewState::Empty`] or [`ViewState::Populated`] once the
//! voice query resolves. Every render derives the view afresh from the held
//! voice records.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::{self, EXPORT_FILE_NAME};
use crate::query::{self, QueryParams};
use crate::transform::{format_voice_data, group_by_language, sorted_languages, VoiceRecord};
use crate::{InspectorError, RawVoice, VoiceRegistry};

const LOADING_NOTICE: &str = "Loading voices...";
const EMPTY_TITLE: &str = "No voices available";
const EMPTY_DETAIL: &str = "This host does not have any speech synthesis voices installed, \
                            or its speech API is not supported.";
const EXPORT_LABEL: &str = "Download as JSON";

/// How a view is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text for a terminal
    #[default]
    Text,
    /// HTML fragment for mounting into a page element
    Html,
}

/// Headline counts for a populated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub local: usize,
    pub remote: usize,
    pub languages: usize,
}

/// One language sub-section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageGroup {
    pub language: String,
    pub voices: Vec<VoiceRecord>,
}

/// Everything a populated view shows. Groups are in ascending language
/// order; voices within a group keep enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub summary: Summary,
    pub groups: Vec<LanguageGroup>,
}

impl Inventory {
    pub fn from_voices(voices: &[VoiceRecord]) -> Self {
        let mut grouped = group_by_language(voices);
        let languages: Vec<String> = sorted_languages(&grouped)
            .into_iter()
            .map(str::to_owned)
            .collect();

        let local = voices.iter().filter(|v| v.local).count();
        let summary = Summary {
            total: voices.len(),
            local,
            remote: voices.len() - local,
            languages: languages.len(),
        };

        let groups = languages
            .into_iter()
            .map(|language| {
                let voices = grouped.remove(&language).unwrap_or_default();
                LanguageGroup { language, voices }
            })
            .collect();

        Self { summary, groups }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Empty,
    Populated(Inventory),
}

impl ViewState {
    /// `None` means the query has not resolved yet.
    pub fn derive(voices: Option<&[VoiceRecord]>) -> Self {
        match voices {
            None => ViewState::Loading,
            Some([]) => ViewState::Empty,
            Some(voices) => ViewState::Populated(Inventory::from_voices(voices)),
        }
    }

    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> std::io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Html => self.write_html(out),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let inventory = match self {
            ViewState::Loading => return writeln!(out, "{LOADING_NOTICE}"),
            ViewState::Empty => {
                writeln!(out, "{EMPTY_TITLE}")?;
                writeln!(out)?;
                return writeln!(out, "{EMPTY_DETAIL}");
            }
            ViewState::Populated(inventory) => inventory,
        };

        let s = &inventory.summary;
        writeln!(out, "Summary ({} voice(s) available)", s.total)?;
        writeln!(
            out,
            "{} local voice(s), {} remote voice(s) across {} language(s).",
            s.local, s.remote, s.languages
        )?;
        writeln!(out, "[{EXPORT_LABEL}] -> {EXPORT_FILE_NAME}")?;
        writeln!(out)?;
        writeln!(out, "All Voices (grouped by language)")?;

        for group in &inventory.groups {
            let width = group
                .voices
                .iter()
                .map(|v| v.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("Name".len());

            writeln!(out)?;
            writeln!(out, "{} ({} voice(s))", group.language, group.voices.len())?;
            writeln!(out, "  {:<width$}  Local", "Name")?;
            for voice in &group.voices {
                writeln!(out, "  {:<width$}  {}", voice.name, yes_no(voice.local))?;
            }
        }
        Ok(())
    }

    fn write_html<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let inventory = match self {
            ViewState::Loading => {
                return writeln!(out, r#"<div class="intro-msg">{LOADING_NOTICE}</div>"#)
            }
            ViewState::Empty => {
                return writeln!(
                    out,
                    r#"<div class="intro-msg"><h2>{EMPTY_TITLE}</h2><p>{EMPTY_DETAIL}</p></div>"#
                )
            }
            ViewState::Populated(inventory) => inventory,
        };

        let s = &inventory.summary;
        writeln!(out, "<div>")?;
        writeln!(out, r#"<div class="voice-section">"#)?;
        writeln!(
            out,
            r#"<h2>Summary<span class="anno">{} voice(s) available</span></h2>"#,
            s.total
        )?;
        writeln!(
            out,
            "<p><strong>{}</strong> local voice(s), <strong>{}</strong> remote voice(s) \
             across <strong>{}</strong> language(s).</p>",
            s.local, s.remote, s.languages
        )?;
        writeln!(
            out,
            r#"<button type="button" data-download="{EXPORT_FILE_NAME}">{EXPORT_LABEL}</button>"#
        )?;
        writeln!(out, "</div>")?;

        writeln!(out, r#"<div class="voice-section">"#)?;
        writeln!(
            out,
            r#"<h2>All Voices<span class="anno">grouped by language</span></h2>"#
        )?;
        for group in &inventory.groups {
            writeln!(out, r#"<div style="margin-bottom: 1.5em">"#)?;
            writeln!(
                out,
                r#"<h3><code>{}</code><span class="anno">{} voice(s)</span></h3>"#,
                escape_html(&group.language),
                group.voices.len()
            )?;
            writeln!(
                out,
                "<table><thead><tr><th>Name</th><th>Local</th></tr></thead><tbody>"
            )?;
            for voice in &group.voices {
                writeln!(
                    out,
                    "<tr><td><code>{}</code></td><td><code>{}</code></td></tr>",
                    escape_html(&voice.name),
                    yes_no(voice.local)
                )?;
            }
            writeln!(out, "</tbody></table>")?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The voice inspector component.
///
/// Holds the voice records once the query resolves; they are never
/// modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct VoiceInspector {
    voices: Option<Vec<VoiceRecord>>,
}

impl VoiceInspector {
    /// A component in the loading state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Query `registry` once and resolve with the result.
    pub async fn mount<R>(registry: &R, params: &QueryParams) -> Self
    where
        R: VoiceRegistry + ?Sized,
    {
        let raw = query::get_voices(registry, params).await;
        Self {
            voices: Some(format_voice_data(&raw)),
        }
    }

    /// Leave the loading state with the query result. Allowed once.
    pub fn resolve(&mut self, raw: &[RawVoice]) -> Result<(), InspectorError> {
        if self.voices.is_some() {
            return Err(InspectorError::AlreadyResolved);
        }
        self.voices = Some(format_voice_data(raw));
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.voices.is_none()
    }

    /// Records in platform enumeration order. Empty while loading.
    pub fn voices(&self) -> &[VoiceRecord] {
        self.voices.as_deref().unwrap_or_default()
    }

    pub fn view(&self) -> ViewState {
        ViewState::derive(self.voices.as_deref())
    }

    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), InspectorError> {
        self.view().render(format, out)?;
        Ok(())
    }

    pub fn render_text<W: Write>(&self, out: &mut W) -> Result<(), InspectorError> {
        self.render(OutputFormat::Text, out)
    }

    pub fn render_html<W: Write>(&self, out: &mut W) -> Result<(), InspectorError> {
        self.render(OutputFormat::Html, out)
    }

    /// Write the held records to `dir/browser-voices.json`.
    ///
    /// Only a populated view offers export.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, InspectorError> {
        match self.voices.as_deref() {
            Some(voices) if !voices.is_empty() => export::download_json(voices, dir),
            _ => Err(InspectorError::NothingToExport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_html, Inventory, OutputFormat, Summary, ViewState, VoiceInspector};
    use crate::query::QueryParams;
    use crate::registries::{ManualRegistry, UnsupportedRegistry};
    use crate::transform::VoiceRecord;
    use crate::{InspectorError, RawVoice};

    fn raw_sample() -> Vec<RawVoice> {
        vec![
            RawVoice::new("Alice", "en-US", true),
            RawVoice::new("Bob", "en-US", false),
            RawVoice::new("Carla", "fr-FR", true),
        ]
    }

    fn rendered(inspector: &VoiceInspector, format: OutputFormat) -> String {
        let mut out = Vec::new();
        inspector.render(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn starts_loading() {
        let inspector = VoiceInspector::new();
        assert!(inspector.is_loading());
        assert_eq!(inspector.view(), ViewState::Loading);
        assert_eq!(rendered(&inspector, OutputFormat::Text), "Loading voices...\n");
    }

    #[test]
    fn summary_for_three_voices() {
        let mut inspector = VoiceInspector::new();
        inspector.resolve(&raw_sample()).unwrap();

        let ViewState::Populated(inventory) = inspector.view() else {
            panic!("expected populated view");
        };
        assert_eq!(
            inventory.summary,
            Summary {
                total: 3,
                local: 2,
                remote: 1,
                languages: 2,
            }
        );
        let languages: Vec<&str> = inventory.groups.iter().map(|g| g.language.as_str()).collect();
        assert_eq!(languages, ["en-US", "fr-FR"]);
        let en: Vec<&str> = inventory.groups[0].voices.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(en, ["Alice", "Bob"]);
    }

    #[test]
    fn local_plus_remote_is_total() {
        let voices: Vec<VoiceRecord> = (0..17)
            .map(|i| VoiceRecord {
                name: format!("voice-{i}"),
                language: format!("l{}", i % 4),
                local: i % 3 == 0,
            })
            .collect();
        let s = Inventory::from_voices(&voices).summary;
        assert_eq!(s.local + s.remote, s.total);
        assert_eq!(s.total, 17);
        assert_eq!(s.languages, 4);
    }

    #[test]
    fn resolves_only_once() {
        let mut inspector = VoiceInspector::new();
        inspector.resolve(&[]).unwrap();
        assert!(matches!(
            inspector.resolve(&raw_sample()),
            Err(InspectorError::AlreadyResolved)
        ));
        assert_eq!(inspector.view(), ViewState::Empty);
    }

    #[test]
    fn empty_view_has_no_table_or_export() {
        let mut inspector = VoiceInspector::new();
        inspector.resolve(&[]).unwrap();

        let text = rendered(&inspector, OutputFormat::Text);
        assert!(text.starts_with("No voices available"));
        assert!(!text.contains("Download as JSON"));

        let html = rendered(&inspector, OutputFormat::Html);
        assert!(html.contains("<h2>No voices available</h2>"));
        assert!(!html.contains("<table>"));
        assert!(!html.contains("<button"));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            inspector.export(dir.path()),
            Err(InspectorError::NothingToExport)
        ));
    }

    #[test]
    fn text_view_lists_groups_in_order() {
        let mut inspector = VoiceInspector::new();
        inspector.resolve(&raw_sample()).unwrap();

        let text = rendered(&inspector, OutputFormat::Text);
        assert_eq!(
            text,
            "Summary (3 voice(s) available)\n\
             2 local voice(s), 1 remote voice(s) across 2 language(s).\n\
             [Download as JSON] -> browser-voices.json\n\
             \n\
             All Voices (grouped by language)\n\
             \n\
             en-US (2 voice(s))\n\
             \x20 Name   Local\n\
             \x20 Alice  Yes\n\
             \x20 Bob    No\n\
             \n\
             fr-FR (1 voice(s))\n\
             \x20 Name   Local\n\
             \x20 Carla  Yes\n"
        );
    }

    #[test]
    fn html_view_escapes_names() {
        let mut inspector = VoiceInspector::new();
        inspector
            .resolve(&[RawVoice::new("<Zed & \"Co\">", "en-GB", false)])
            .unwrap();

        let html = rendered(&inspector, OutputFormat::Html);
        assert!(html.contains("<code>&lt;Zed &amp; &quot;Co&quot;&gt;</code>"));
        assert!(html.contains("<td><code>No</code></td>"));
        assert!(html.contains(r#"<span class="anno">1 voice(s) available</span>"#));
        assert!(html.contains("Download as JSON"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("Microsoft Zira"), "Microsoft Zira");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn export_uses_enumeration_order() {
        let mut inspector = VoiceInspector::new();
        inspector
            .resolve(&[
                RawVoice::new("Carla", "fr-FR", true),
                RawVoice::new("Alice", "en-US", true),
            ])
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = inspector.export(dir.path()).unwrap();
        let exported: Vec<VoiceRecord> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(exported, inspector.voices());
        assert_eq!(exported[0].name, "Carla");
    }

    #[tokio::test]
    async fn mount_against_announcing_registry() {
        let registry = ManualRegistry::new();
        let params = QueryParams::default();
        let query = VoiceInspector::mount(&registry, &params);
        futures::pin_mut!(query);
        assert!(futures::poll!(query.as_mut()).is_pending());

        registry.announce(raw_sample());
        let inspector = query.await;
        assert!(!inspector.is_loading());
        let ViewState::Populated(inventory) = inspector.view() else {
            panic!("expected populated view");
        };
        assert_eq!(inventory.summary.total, 3);
    }

    #[tokio::test]
    async fn mount_against_unsupported_registry_is_empty() {
        let inspector = VoiceInspector::mount(&UnsupportedRegistry, &QueryParams::default()).await;
        assert_eq!(inspector.view(), ViewState::Empty);
    }
}
