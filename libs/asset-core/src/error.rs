//! Error types for asset-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while turning a markdown line into a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed line {line}: expected `![NAME.png](PATH)`, got {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("invalid animal variant at line {line}: {value:?}")]
    InvalidVariant { line: usize, value: String },

    #[error("animal variant {variant} out of range at line {line}")]
    AnimalOutOfRange { line: usize, variant: i64 },

    #[error("unknown fruit code {code:?} at line {line}")]
    UnknownFruitCode { line: usize, code: String },

    #[error("invalid fruit count in segment {segment:?} at line {line}")]
    InvalidCount { line: usize, segment: String },
}

impl ParseError {
    /// Source line the error was raised for (1-based).
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::InvalidVariant { line, .. }
            | Self::AnimalOutOfRange { line, .. }
            | Self::UnknownFruitCode { line, .. }
            | Self::InvalidCount { line, .. } => *line,
        }
    }
}
