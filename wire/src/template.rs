//! Seed string templates.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::alphabet::Alphabet;
use crate::error::{FormatReason, WireError, WireResult};

/// Characters that mark a symbol position in a template string.
pub const PLACEHOLDERS: [char; 2] = ['X', 'x'];

/// One position of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Carries one alphabet symbol.
    Placeholder,
    /// Fixed decoration that must match verbatim and carries no bits.
    Literal(char),
}

/// The textual layout of a seed, e.g. `XXXXX-XXXXX-XXXXX`.
///
/// Equality and hashing are structural: `xxxxx-xxxxx` and `XXXXX-XXXXX` are
/// the same template.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
    placeholders: usize,
}

impl Template {
    /// Parses a template string.
    ///
    /// `X` and `x` are placeholders. Literals must not be alphanumeric,
    /// whitespace, or control characters.
    pub fn parse(source: &str) -> WireResult<Self> {
        let mut tokens = Vec::with_capacity(source.len());
        let mut placeholders = 0;
        for (position, ch) in source.chars().enumerate() {
            if PLACEHOLDERS.contains(&ch) {
                placeholders += 1;
                tokens.push(Token::Placeholder);
            } else if ch.is_alphanumeric() || ch.is_whitespace() || ch.is_control() {
                return Err(WireError::InvalidTemplateChar { ch, position });
            } else {
                tokens.push(Token::Literal(ch));
            }
        }
        if placeholders == 0 {
            return Err(WireError::EmptyTemplate);
        }
        Ok(Self {
            source: source.to_owned(),
            tokens,
            placeholders,
        })
    }

    /// The template string as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Template tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Length of rendered seeds, in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; templates hold at least one placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of placeholder positions.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Bits carried by this template under `alphabet`.
    #[must_use]
    pub fn capacity_bits(&self, alphabet: &Alphabet) -> usize {
        self.placeholders * usize::from(alphabet.bits_per_symbol())
    }

    /// Validates `input` against the template and returns its symbol indices.
    ///
    /// Checks the length first, then every position in order, so the
    /// reported reason is the first structural problem in the string.
    pub fn match_symbols(&self, input: &str, alphabet: &Alphabet) -> Result<Vec<u8>, FormatReason> {
        let found = input.chars().count();
        if found != self.tokens.len() {
            return Err(FormatReason::LengthMismatch {
                expected: self.tokens.len(),
                found,
            });
        }

        let mut symbols = Vec::with_capacity(self.placeholders);
        for (position, (token, ch)) in self.tokens.iter().zip(input.chars()).enumerate() {
            match *token {
                Token::Literal(expected) => {
                    if ch != expected {
                        return Err(FormatReason::LiteralMismatch {
                            position,
                            expected,
                            found: ch,
                        });
                    }
                }
                Token::Placeholder => {
                    let index = alphabet
                        .index_of(ch)
                        .ok_or(FormatReason::InvalidSymbol { position, found: ch })?;
                    symbols.push(index);
                }
            }
        }
        Ok(symbols)
    }

    /// Substitutes symbols into the placeholder positions, in order.
    pub fn render(&self, symbols: &[u8], alphabet: &Alphabet) -> WireResult<String> {
        if symbols.len() != self.placeholders {
            return Err(WireError::SymbolCountMismatch {
                expected: self.placeholders,
                found: symbols.len(),
            });
        }

        let mut out = String::with_capacity(self.source.len());
        let mut symbols = symbols.iter();
        for token in &self.tokens {
            match *token {
                Token::Literal(ch) => out.push(ch),
                Token::Placeholder => {
                    // Length checked above.
                    let index = symbols.next().copied().unwrap_or_default();
                    let ch = alphabet
                        .symbol(index)
                        .ok_or(WireError::SymbolIndexOutOfRange {
                            index,
                            size: alphabet.len(),
                        })?;
                    out.push(ch);
                }
            }
        }
        Ok(out)
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Template {}

impl Hash for Template {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tokens.hash(state);
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for Template {
    type Error = WireError;

    fn try_from(value: String) -> WireResult<Self> {
        Self::parse(&value)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}
