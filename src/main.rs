//! # DANFCE CLI
//!
//! Command-line interface for rendering NFC-e receipts.
//!
//! ## Usage
//!
//! ```bash
//! # Plain-text preview on 80mm paper
//! danfce render nfce.xml
//!
//! # 58mm paper, compact font, with logo
//! danfce render --columns 32 --compact --logo logo.png nfce.xml
//!
//! # Dump the directive stream as JSON
//! danfce render --json nfce.xml
//!
//! # Settings from a file (flags still win)
//! danfce render --config danfce.json nfce.xml
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `danfce=info`).

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use danfce::{
    DanfceError, FiscalDocument, RenderConfig, backend::TextPreview, config::LayoutMode,
    logo::Logo,
};

/// DANFCE - NFC-e receipt renderer
#[derive(Parser, Debug)]
#[command(name = "danfce")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an NFC-e XML file
    Render {
        /// NFC-e XML, bare or inside the nfeProc envelope
        xml: PathBuf,

        /// Characters per line
        #[arg(long)]
        columns: Option<usize>,

        /// Use the compact preset (font C, tighter spacing)
        #[arg(long)]
        compact: bool,

        /// Mark the render as a reprint
        #[arg(long)]
        second_copy: bool,

        /// Emitter logo printed above the header
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// JSON render settings
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the directive stream as JSON instead of a text preview
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "danfce=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DanfceError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            xml,
            columns,
            compact,
            second_copy,
            logo,
            config,
            json,
        } => {
            let mut settings = match config {
                Some(path) => RenderConfig::from_json(&std::fs::read_to_string(&path)?)?,
                None => RenderConfig::default(),
            };
            if let Some(columns) = columns {
                settings = settings.columns(columns);
            }
            if compact {
                settings = settings.layout(LayoutMode::Compact);
            }
            if second_copy {
                settings = settings.second_copy(true);
            }
            if let Some(logo) = logo.as_deref().and_then(load_logo) {
                settings = settings.logo(logo);
            }

            let doc = FiscalDocument::load(&xml)?;
            let program = danfce::render(&doc, &settings)?;
            info!(
                file = %xml.display(),
                items = doc.item_count(),
                ops = program.len(),
                "rendered DANFCE"
            );

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &program).map_err(std::io::Error::from)?;
                writeln!(out)?;
            } else {
                let mut preview = TextPreview::new(settings.columns);
                program.play(&mut preview)?;
                out.write_all(preview.output().as_bytes())?;
            }
            out.flush()?;
        }
    }

    Ok(())
}

/// Best-effort logo: a failure is logged and the receipt prints without it.
fn load_logo(path: &Path) -> Option<Logo> {
    match Logo::load(path) {
        Ok(logo) => Some(logo),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo not loaded");
            None
        }
    }
}
