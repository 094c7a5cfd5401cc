//! Core types for card assets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer in a manifest that names no fruit or animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown variant {0}")]
pub struct UnknownVariant(pub u32);

/// Fruit printed on a fruit card.
///
/// Serialized as its 0-based position in the code table (`s`, `p`, `g`, `b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Fruit {
    Strawberry,
    Pear,
    Grape,
    Banana,
}

impl Fruit {
    /// All fruits in code table order.
    pub const ALL: [Fruit; 4] = [Self::Strawberry, Self::Pear, Self::Grape, Self::Banana];

    /// Single-letter code used in image names.
    pub fn code(self) -> &'static str {
        match self {
            Self::Strawberry => "s",
            Self::Pear => "p",
            Self::Grape => "g",
            Self::Banana => "b",
        }
    }

    /// Parse a fruit code. Case-sensitive, exact match only.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(Self::Strawberry),
            "p" => Some(Self::Pear),
            "g" => Some(Self::Grape),
            "b" => Some(Self::Banana),
            _ => None,
        }
    }

    /// 0-based position in the code table, as written on cards.
    pub fn index(self) -> u8 {
        match self {
            Self::Strawberry => 0,
            Self::Pear => 1,
            Self::Grape => 2,
            Self::Banana => 3,
        }
    }

    /// Create from a 0-based code table position.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// 1-based variant used by the meta table.
    pub fn meta_variant(self) -> u32 {
        u32::from(self.index()) + 1
    }

    /// Default display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Strawberry => "草莓",
            Self::Pear => "青梨",
            Self::Grape => "葡萄",
            Self::Banana => "香蕉",
        }
    }
}

impl From<Fruit> for u8 {
    fn from(fruit: Fruit) -> Self {
        fruit.index()
    }
}

impl TryFrom<u8> for Fruit {
    type Error = UnknownVariant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(UnknownVariant(u32::from(value)))
    }
}

/// Animal printed on an animal card.
///
/// Serialized as its 1-based variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Animal {
    Rabbit,
    Deer,
    Monkey,
    Shiba,
    Panda,
}

impl Animal {
    /// All animals in variant order.
    pub const ALL: [Animal; 5] = [
        Self::Rabbit,
        Self::Deer,
        Self::Monkey,
        Self::Shiba,
        Self::Panda,
    ];

    /// 1-based variant.
    pub fn variant(self) -> u32 {
        match self {
            Self::Rabbit => 1,
            Self::Deer => 2,
            Self::Monkey => 3,
            Self::Shiba => 4,
            Self::Panda => 5,
        }
    }

    /// Create from a 1-based variant.
    pub fn from_variant(variant: u32) -> Option<Self> {
        match variant {
            1 => Some(Self::Rabbit),
            2 => Some(Self::Deer),
            3 => Some(Self::Monkey),
            4 => Some(Self::Shiba),
            5 => Some(Self::Panda),
            _ => None,
        }
    }

    /// Default display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rabbit => "兔子",
            Self::Deer => "梅花鹿",
            Self::Monkey => "猴子",
            Self::Shiba => "柴犬",
            Self::Panda => "熊猫",
        }
    }
}

impl From<Animal> for u32 {
    fn from(animal: Animal) -> Self {
        animal.variant()
    }
}

impl TryFrom<u32> for Animal {
    type Error = UnknownVariant;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_variant(value).ok_or(UnknownVariant(value))
    }
}

/// One `{variant, number}` pair on a fruit card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitElement {
    pub variant: Fruit,
    pub number: u8,
}

/// Type-specific part of a card, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
    Animal { variant: Animal },
    Fruit { elements: Vec<FruitElement> },
}

/// Card descriptor parsed from one markdown image line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub image: String,
    #[serde(flatten)]
    pub kind: CardKind,
    pub repeat: u32,
}

impl Card {
    /// Animal card with a single copy.
    pub fn animal(image: impl Into<String>, animal: Animal) -> Self {
        Self {
            image: image.into(),
            kind: CardKind::Animal { variant: animal },
            repeat: 1,
        }
    }

    /// Fruit card with a single copy.
    pub fn fruit(image: impl Into<String>, elements: Vec<FruitElement>) -> Self {
        Self {
            image: image.into(),
            kind: CardKind::Fruit { elements },
            repeat: 1,
        }
    }
}

/// Display name bound to a 1-based variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub name: String,
    pub variant: u32,
}

/// Lookup tables from variant to display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub fruits: Vec<MetaEntry>,
    pub animals: Vec<MetaEntry>,
}

impl Meta {
    /// Build a meta table from ordered fruit and animal names.
    pub fn new<F, A>(fruits: &[F], animals: &[A]) -> Self
    where
        F: AsRef<str>,
        A: AsRef<str>,
    {
        Self {
            fruits: Self::entries(fruits),
            animals: Self::entries(animals),
        }
    }

    /// Number names from 1 in the order given.
    pub fn entries<S: AsRef<str>>(names: &[S]) -> Vec<MetaEntry> {
        names
            .iter()
            .zip(1..)
            .map(|(name, variant)| MetaEntry {
                name: name.as_ref().to_string(),
                variant,
            })
            .collect()
    }

    /// Display name of a fruit according to this table.
    pub fn fruit_name(&self, fruit: Fruit) -> Option<&str> {
        Self::lookup(&self.fruits, fruit.meta_variant())
    }

    /// Display name of an animal according to this table.
    pub fn animal_name(&self, animal: Animal) -> Option<&str> {
        Self::lookup(&self.animals, animal.variant())
    }

    fn lookup(entries: &[MetaEntry], variant: u32) -> Option<&str> {
        entries
            .iter()
            .find(|entry| entry.variant == variant)
            .map(|entry| entry.name.as_str())
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new(
            &Fruit::ALL.map(Fruit::display_name),
            &Animal::ALL.map(Animal::display_name),
        )
    }
}

/// Meta-wrapped card list, the document the game bot loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub meta: Meta,
    pub cards: Vec<Card>,
}
