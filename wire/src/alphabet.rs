//! Symbol alphabets.

use std::fmt;

use crate::error::{WireError, WireResult};

/// The RFC 4648 base32 alphabet (5 bits per symbol).
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// An ordered set of `2^k` distinct characters, each standing for a `k`-bit group.
///
/// When no two symbols differ only by ASCII case, lookups ignore ASCII case so
/// that hand-typed seeds decode regardless of capitalization. Encoding always
/// emits the symbols as declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: Vec<char>,
    bits_per_symbol: u8,
    fold_case: bool,
}

impl Alphabet {
    /// Builds an alphabet from its symbols, in index order.
    pub fn new(symbols: &str) -> WireResult<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        let size = symbols.len();
        if !(2..=256).contains(&size) || !size.is_power_of_two() {
            return Err(WireError::InvalidAlphabetSize { size });
        }

        for (idx, &symbol) in symbols.iter().enumerate() {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(WireError::InvalidSymbol { symbol });
            }
            if symbols[..idx].contains(&symbol) {
                return Err(WireError::DuplicateSymbol { symbol });
            }
        }

        let fold_case = symbols.iter().enumerate().all(|(idx, a)| {
            symbols[..idx]
                .iter()
                .all(|b| !a.eq_ignore_ascii_case(b))
        });

        Ok(Self {
            bits_per_symbol: size.trailing_zeros() as u8,
            symbols,
            fold_case,
        })
    }

    /// The RFC 4648 base32 alphabet.
    #[must_use]
    pub fn base32() -> Self {
        Self {
            symbols: BASE32.chars().collect(),
            bits_per_symbol: 5,
            fold_case: true,
        }
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; alphabets hold at least two symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Bits carried by one symbol (`log2(len)`).
    #[must_use]
    pub const fn bits_per_symbol(&self) -> u8 {
        self.bits_per_symbol
    }

    /// Returns `true` if lookups ignore ASCII case.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        self.fold_case
    }

    /// Returns the symbol for an index.
    #[must_use]
    pub fn symbol(&self, index: u8) -> Option<char> {
        self.symbols.get(usize::from(index)).copied()
    }

    /// Returns the index of a character, if it is a symbol.
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<u8> {
        let found = self.symbols.iter().position(|&s| s == ch).or_else(|| {
            if self.fold_case {
                self.symbols.iter().position(|s| s.eq_ignore_ascii_case(&ch))
            } else {
                None
            }
        })?;
        u8::try_from(found).ok()
    }

    /// Returns `true` if `ch` is a symbol of this alphabet.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// The symbols as a string, in index order.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::base32()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = WireError;

    fn try_from(value: String) -> WireResult<Self> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.as_string()
    }
}
