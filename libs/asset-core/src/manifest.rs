//! JSON output formats and manifest loading.
//!
//! Two output shapes exist:
//! - the manifest, `{ "meta": {...}, "cards": [...] }`
//! - a bare card array
//!
//! Both are pretty-printed with 4-space indentation.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::types::{Card, CardKind, Manifest, Meta};

const INDENT: &[u8] = b"    ";

/// Render cards wrapped with a meta table.
pub fn render_manifest(cards: &[Card], meta: &Meta) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct ManifestRef<'a> {
        meta: &'a Meta,
        cards: &'a [Card],
    }

    to_pretty_json(&ManifestRef { meta, cards })
}

/// Render cards as a bare JSON array.
pub fn render_cards(cards: &[Card]) -> serde_json::Result<String> {
    to_pretty_json(&cards)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

impl Manifest {
    /// Wrap cards with the default meta table.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            meta: Meta::default(),
            cards,
        }
    }

    /// Decode a manifest document.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Render this manifest the same way `render_manifest` does.
    pub fn to_json(&self) -> serde_json::Result<String> {
        render_manifest(&self.cards, &self.meta)
    }

    /// Short human-readable description of a card, names taken from the meta table.
    ///
    /// Animals render as `[兔子]`, fruits as `[草莓 x2] [青梨 x1]`. Names missing
    /// from the table render as `?`.
    pub fn describe(&self, card: &Card) -> String {
        describe(&self.meta, card)
    }
}

/// See [`Manifest::describe`].
pub fn describe(meta: &Meta, card: &Card) -> String {
    match &card.kind {
        CardKind::Animal { variant } => {
            format!("[{}]", meta.animal_name(*variant).unwrap_or("?"))
        }
        CardKind::Fruit { elements } => elements
            .iter()
            .map(|e| format!("[{} x{}]", meta.fruit_name(e.variant).unwrap_or("?"), e.number))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
