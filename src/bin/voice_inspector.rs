use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use voice_inspector::config::{InspectorConfig, DEFAULT_CONFIG_PATH};
use voice_inspector::presenter::{OutputFormat, VoiceInspector};
use voice_inspector::registries::{self, SnapshotRegistry};
use voice_inspector::{InspectorError, VoiceRegistry};

/// List the speech-synthesis voices on this machine, grouped by language.
#[derive(Parser, Debug)]
#[command(name = "voice-inspector", version)]
struct Args {
    /// Config file (defaults to ./voice-inspector.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Inspect voices from a JSON file instead of the platform
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Stop waiting for the voice list after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Save browser-voices.json after rendering
    #[arg(long)]
    export: bool,

    /// Directory for the exported file
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => InspectorConfig::load(path)?,
        None => InspectorConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
    };
    if let Some(ms) = args.timeout_ms {
        config.timeout_ms = Some(ms);
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(dir) = args.export_dir {
        config.export_dir = dir;
    }
    log::debug!("Effective configuration: {:?}", config);

    let registry: Box<dyn VoiceRegistry> = match &args.snapshot {
        Some(path) => Box::new(SnapshotRegistry::open(path)?),
        None => registries::platform_registry(),
    };

    VoiceInspector::new().render(OutputFormat::Text, &mut io::stderr())?;
    let inspector = VoiceInspector::mount(registry.as_ref(), &config.query_params()?).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    inspector.render(config.format, &mut out)?;
    out.flush()?;

    if args.export {
        match inspector.export(&config.export_dir) {
            Ok(path) => eprintln!("Saved {}", path.display()),
            Err(InspectorError::NothingToExport) => log::warn!("Nothing to export"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
