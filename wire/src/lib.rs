//! Symbol alphabet and seed string templates for the seedcode codec.
//!
//! This crate handles the human-facing text layer of a seed: which characters
//! carry bits (the [`Alphabet`]), where they go in the string and which fixed
//! separators surround them (the [`Template`]), and how packed bits are split
//! into symbols and joined back.
//!
//! # Design Principles
//!
//! - **One line per seed** - Templates cannot contain whitespace or control characters.
//! - **Structural validation only** - Length, literals, and alphabet membership; bits are
//!   interpreted elsewhere.
//! - **No domain knowledge** - This crate knows nothing about options or versions.

mod alphabet;
mod error;
mod pack;
mod template;

pub use alphabet::{Alphabet, BASE32};
pub use error::{FormatReason, WireError, WireResult};
pub use pack::{bits_to_symbols, symbols_to_bits};
pub use template::{Template, Token, PLACEHOLDERS};
