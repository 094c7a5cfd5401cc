//! `build`: markdown listing to JSON asset file.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use asset_core::{duplicate_images, parse, render_cards, render_manifest, Meta};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::{BuildArgs, OutputFormat};

/// Parse the source file and write the rendered JSON. Returns the JSON written.
///
/// Nothing is written unless every line parses.
pub fn execute(args: &BuildArgs) -> Result<String> {
    let content = fs::read_to_string(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    debug!(path = %args.source.display(), bytes = content.len(), "read source");

    let cards = parse(&content)
        .with_context(|| format!("failed to parse {}", args.source.display()))?;
    info!(count = cards.len(), "parsed cards");

    for image in duplicate_images(&cards) {
        warn!(image, "image listed more than once");
    }

    let json = match args.format {
        OutputFormat::Manifest => render_manifest(&cards, &Meta::default()),
        OutputFormat::Cards => render_cards(&cards),
    }
    .context("failed to serialize cards")?;

    write_atomic(&args.output, &json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), format = ?args.format, "wrote asset file");

    Ok(json)
}

/// Write through a temp file in the target directory, then rename over `path`.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
