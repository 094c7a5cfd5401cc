//! Card asset library for the Halli Galli game bot.
//!
//! Provides:
//! - Markdown parser turning image references into card descriptors
//! - Manifest rendering (meta-wrapped or bare array) and loading
//! - Shared types (Card, Fruit, Animal, Meta, etc.)

pub mod error;
pub mod manifest;
pub mod parser;
pub mod types;

pub use error::{ParseError, Result};
pub use manifest::{describe, render_cards, render_manifest};
pub use parser::{duplicate_images, parse, parse_line};
pub use types::{
    Animal, Card, CardKind, Fruit, FruitElement, Manifest, Meta, MetaEntry, UnknownVariant,
};
