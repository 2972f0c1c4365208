//! Main entry point for the vrmeta CLI application.
//!
//! This binary prints the metadata of a VRM model from either a local file
//! or a remote HTTP URL, reading only the container prefix that holds it.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use vrmeta::{Cli, HttpRangeReader, LocalFileReader, MetaExtractor, ReadAt, VrmMeta};

/// Application entry point.
///
/// Parses command-line arguments and dispatches to the appropriate reader
/// based on whether the input is a local file or HTTP URL.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_http_url() {
        // Remote model: fetch only the metadata prefix via Range requests
        let reader = HttpRangeReader::new(cli.file.clone()).await?;
        let transferred_before = reader.transferred_bytes();
        let reader = Arc::new(reader);

        show_meta(reader.clone(), &cli).await?;

        // Display network transfer statistics for HTTP sources
        if !cli.quiet {
            let transferred = reader.transferred_bytes() - transferred_before;
            eprintln!("\nTotal bytes transferred: {}", format_size(transferred));
        }
    } else {
        // Local model
        let reader = Arc::new(LocalFileReader::new(Path::new(&cli.file))?);
        show_meta(reader, &cli).await?;
    }

    Ok(())
}

/// Extract the metadata and print it according to the CLI options.
///
/// Soft-validation warnings from the extraction core go to stderr unless
/// quiet mode is set; they never affect the exit status.
async fn show_meta<R: ReadAt + 'static>(reader: Arc<R>, cli: &Cli) -> Result<()> {
    let extractor = MetaExtractor::new(reader);
    let raw = extractor.read_raw().await?;

    if !cli.quiet {
        for warning in &raw.warnings {
            eprintln!("warning: {warning}");
        }
    }

    if cli.raw {
        // Raw mode: emit the extracted fragment untouched, for piping
        println!("{}", raw.meta_json);
        return Ok(());
    }

    let meta = VrmMeta::from_raw(&raw).context("meta fragment is not valid JSON")?;
    print_meta(&meta);

    Ok(())
}

/// Print the metadata as an aligned label/value listing, skipping fields
/// the exporter left empty.
fn print_meta(meta: &VrmMeta) {
    let fields = [
        ("Title", &meta.title),
        ("Version", &meta.version),
        ("Author", &meta.author),
        ("Contact", &meta.contact_information),
        ("Reference", &meta.reference),
        ("Allowed users", &meta.allowed_user_name),
        ("Violent usage", &meta.violent_usage_name),
        ("Sexual usage", &meta.sexual_usage_name),
        ("Commercial usage", &meta.commercial_usage_name),
        ("Permission URL", &meta.other_permission_url),
        ("License", &meta.license_name),
        ("License URL", &meta.other_license_url),
        ("Exporter", &meta.exporter_version),
    ];

    for (label, value) in fields {
        if !value.is_empty() {
            println!("{label:>16}: {value}");
        }
    }
}

/// Format a byte size into a human-readable string.
///
/// Metadata prefixes are small, so kilobytes and megabytes cover the
/// realistic range.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
