//! `show`: list the cards of an existing manifest.

use std::fs;

use anyhow::{Context, Result};
use asset_core::{CardKind, Manifest};
use tracing::info;

use crate::config::ShowArgs;

/// Load the manifest and describe each card as `<image>\t<description>`.
pub fn execute(args: &ShowArgs) -> Result<Vec<String>> {
    let content = fs::read_to_string(&args.manifest)
        .with_context(|| format!("failed to read {}", args.manifest.display()))?;
    let manifest = Manifest::from_json(&content)
        .with_context(|| format!("failed to load {}", args.manifest.display()))?;

    let animals = manifest
        .cards
        .iter()
        .filter(|card| matches!(card.kind, CardKind::Animal { .. }))
        .count();
    info!(
        cards = manifest.cards.len(),
        animals,
        fruits = manifest.cards.len() - animals,
        "loaded manifest"
    );

    Ok(manifest
        .cards
        .iter()
        .map(|card| format!("{}\t{}", card.image, manifest.describe(card)))
        .collect())
}
