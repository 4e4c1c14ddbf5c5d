//! qrframe command-line exporter
//!
//! # Usage
//!
//! ```bash
//! # Plain PNG in the current directory
//! qrframe https://example.com
//!
//! # Framed JPEG with a solid caption box
//! qrframe https://example.com --caption "Scan Me!" --style solid --frame --format jpeg
//! ```

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qrframe_core::ExportError;
use qrframe_export::{ExportOptions, Exporter};
use qrframe_layout::{compute_layout, LayoutInput};
use qrframe_symbol::QrcodeProvider;

use crate::cli::Args;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.load_config()?;
    let state = args.editor_state(&config)?;
    let request = state.request();
    let options = ExportOptions::from(&config);
    debug!(?request, "built render request");

    if args.print_layout {
        let geometry = compute_layout(&LayoutInput::from_request(&request), &options.layout)?;
        println!("{}", serde_json::to_string_pretty(&geometry)?);
    }

    let exporter = Exporter::new(QrcodeProvider::new()).with_options(options);
    let blob = match exporter.export_blocking(&request, args.format) {
        Ok(blob) => blob,
        Err(e) if e.is_user_visible() => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(report(e)),
    };

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create output directory: {}", args.out.display()))?;
    let path = args.out.join(blob.file_name());
    std::fs::write(&path, &blob.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), mime = blob.mime_type(), bytes = blob.len(), "saved export");
    Ok(ExitCode::SUCCESS)
}

fn report(error: ExportError) -> anyhow::Error {
    anyhow::Error::new(error).context("Export failed; no file was written")
}
