//! Error types for alphabet and template operations.

use std::fmt;

/// Result type for alphabet and template construction.
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while building an alphabet or template, or rendering symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// Alphabet size is not a power of two in `2..=256`.
    InvalidAlphabetSize { size: usize },

    /// The same symbol appears twice in an alphabet.
    DuplicateSymbol { symbol: char },

    /// Whitespace or control character used as an alphabet symbol.
    InvalidSymbol { symbol: char },

    /// Template literal that is alphanumeric, whitespace, or a control character.
    InvalidTemplateChar { ch: char, position: usize },

    /// Template has no placeholder positions.
    EmptyTemplate,

    /// Number of symbols to render differs from the template's placeholders.
    SymbolCountMismatch { expected: usize, found: usize },

    /// Symbol index outside the alphabet.
    SymbolIndexOutOfRange { index: u8, size: usize },
}

/// Structural reasons a seed string does not fit a template.
///
/// These are decode steps 1 and 2: length, literal positions, and alphabet
/// membership. They are user-facing (a mistyped seed), never programmer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatReason {
    /// Input length differs from the template length (in characters).
    LengthMismatch { expected: usize, found: usize },

    /// A literal position holds the wrong character.
    LiteralMismatch {
        position: usize,
        expected: char,
        found: char,
    },

    /// A placeholder position holds a character outside the alphabet.
    InvalidSymbol { position: usize, found: char },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabetSize { size } => {
                write!(
                    f,
                    "alphabet size {size} is not a power of two between 2 and 256"
                )
            }
            Self::DuplicateSymbol { symbol } => {
                write!(f, "duplicate alphabet symbol {symbol:?}")
            }
            Self::InvalidSymbol { symbol } => {
                write!(f, "invalid alphabet symbol {symbol:?}")
            }
            Self::InvalidTemplateChar { ch, position } => {
                write!(f, "invalid template character {ch:?} at position {position}")
            }
            Self::EmptyTemplate => write!(f, "template has no placeholders"),
            Self::SymbolCountMismatch { expected, found } => {
                write!(f, "template expects {expected} symbols, got {found}")
            }
            Self::SymbolIndexOutOfRange { index, size } => {
                write!(f, "symbol index {index} outside alphabet of {size}")
            }
        }
    }
}

impl fmt::Display for FormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} characters, found {found}")
            }
            Self::LiteralMismatch {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "expected {expected:?} at position {position}, found {found:?}"
                )
            }
            Self::InvalidSymbol { position, found } => {
                write!(f, "character {found:?} at position {position} is not a seed symbol")
            }
        }
    }
}

impl std::error::Error for WireError {}
