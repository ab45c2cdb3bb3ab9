//! Option schema and versioned seed format definitions for the seedcode codec.
//!
//! This crate defines what a seed carries:
//! - Option kinds (bool, slider, choice, grouped, nested) and their bit mappings
//! - Format definitions binding a version, a template, and ordered options
//! - Capacity validation at definition time
//! - Deterministic layout hashing
//!
//! # Design Principles
//!
//! - **Layout from structure only** - Widths depend on declared parameters, never on values.
//! - **Fail at definition time** - Formats that cannot fit their template do not build.
//! - **Total decoding** - Every raw bit pattern maps to a valid value.

mod error;
mod format;
mod hash;
mod option;

pub use error::{SchemaError, SchemaResult};
pub use format::{SeedFormat, SeedFormatBuilder, DEFAULT_VERSION_BITS, MAX_VERSION_BITS};
pub use hash::layout_hash;
pub use option::{
    ChoiceStyle, OptionGroup, OptionId, OptionKind, OptionValue, SeedOption, ValueReason,
};
