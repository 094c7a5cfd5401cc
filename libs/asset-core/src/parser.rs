//! Markdown parser for card image listings.
//!
//! # Format
//! ```markdown
//! ![animal-3.png](img/a3.png)
//! ![2s_1p.png](img/f1.png)
//! ```
//!
//! Names starting with `animal-` carry a 1-based animal variant. Every
//! other name is a `_`-separated list of fruit segments, each one count
//! digit followed by a fruit code.

use crate::error::{ParseError, Result};
use crate::types::{Animal, Card, Fruit, FruitElement};
use once_cell::sync::Lazy;
use regex::Regex;

const ANIMAL_PREFIX: &str = "animal-";

static IMAGE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.+)\.png\]\((.+)\)").expect("Invalid regex pattern"));

/// Parse markdown content into cards, in source order.
///
/// Blank lines are skipped. The first bad line aborts the whole parse.
pub fn parse(content: &str) -> Result<Vec<Card>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Parse a single `![NAME.png](PATH)` line into a card.
///
/// `line_num` is only used to label errors.
pub fn parse_line(line: &str, line_num: usize) -> Result<Card> {
    let caps = IMAGE_LINK
        .captures(line)
        .ok_or_else(|| ParseError::MalformedLine {
            line: line_num,
            text: line.to_string(),
        })?;
    let name = &caps[1];
    let image = &caps[2];

    match name.strip_prefix(ANIMAL_PREFIX) {
        Some(rest) => parse_animal(rest, line_num).map(|animal| Card::animal(image, animal)),
        None => parse_fruits(name, line_num).map(|elements| Card::fruit(image, elements)),
    }
}

fn parse_animal(value: &str, line_num: usize) -> Result<Animal> {
    let variant = value
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidVariant {
            line: line_num,
            value: value.to_string(),
        })?;

    u32::try_from(variant)
        .ok()
        .and_then(Animal::from_variant)
        .ok_or(ParseError::AnimalOutOfRange {
            line: line_num,
            variant,
        })
}

fn parse_fruits(name: &str, line_num: usize) -> Result<Vec<FruitElement>> {
    name.split('_')
        .map(|segment| parse_segment(segment, line_num))
        .collect()
}

fn parse_segment(segment: &str, line_num: usize) -> Result<FruitElement> {
    let mut chars = segment.chars();
    let first = chars.next();
    let code = chars.as_str();

    let variant = Fruit::from_code(code).ok_or_else(|| ParseError::UnknownFruitCode {
        line: line_num,
        code: code.to_string(),
    })?;

    let number = first
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| ParseError::InvalidCount {
            line: line_num,
            segment: segment.to_string(),
        })?;

    Ok(FruitElement {
        variant,
        // to_digit(10) is at most 9
        number: number as u8,
    })
}

/// Image paths that appear on more than one card, in first-seen order.
pub fn duplicate_images(cards: &[Card]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();

    for card in cards {
        let image = card.image.as_str();
        if !seen.insert(image) && !duplicates.contains(&image) {
            duplicates.push(image);
        }
    }

    duplicates
}
