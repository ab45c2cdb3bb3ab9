//! Command-line tooling for the seedcode codec.
//!
//! This crate provides the pieces behind the `seedcode` binary:
//!
//! - Formats files (JSON) that build a format registry
//! - Seeds files that keep a user's seeds, one per line
//! - `id=value` option assignments
//! - Format and seed reports as JSON or text
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what a seed carries.

mod config;
mod report;
mod seeds;
mod values;

pub use config::{FormatEntry, FormatsFile, BUILTIN_TEMPLATE};
pub use report::{
    describe_registry, format_describe_pretty, format_seed_pretty, FieldReport, FormatReport,
    SeedReport, ValueReport,
};
pub use seeds::{SeedEntry, SeedList};
pub use values::parse_assignments;
