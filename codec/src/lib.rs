//! Versioned seed string encoding and decoding for the seedcode codec.
//!
//! This is the main codec crate that ties together bitstream, wire, and schema
//! to turn option values plus random entropy into a short, hand-typeable seed
//! string, and back.
//!
//! # Features
//!
//! - Encoding with defaults for unspecified options
//! - Decoding against every registered format version
//! - Seed generation from thread-local or caller-supplied randomness
//! - Activation lifecycle for hosts that apply seed effects
//!
//! # Design Principles
//!
//! - **Total decoding** - Any structurally valid string of a registered version decodes.
//! - **Strict structure** - Wrong length, literals, or symbols are always rejected.
//! - **Deterministic** - Same string, same values and entropy, on every version of the host.
//!
//! # Example
//!
//! ```
//! use codec::{decode_seed, encode_seed, Entropy, FormatRegistry, OptionValues};
//! use schema::{OptionValue, SeedFormat, SeedOption};
//! use wire::Template;
//!
//! let format = SeedFormat::builder(0, Template::parse("XXXXX-XXXXX-XXXXX").unwrap())
//!     .version_bits(8)
//!     .option(SeedOption::bool("hardcore", false))
//!     .option(SeedOption::spinner("size", ["small", "medium", "large"], "small"))
//!     .build()
//!     .unwrap();
//!
//! let mut values = OptionValues::new();
//! values.insert("hardcore".into(), OptionValue::Bool(true));
//! values.insert("size".into(), "medium".into());
//! let seed = encode_seed(&format, &values, &Entropy::zero(64)).unwrap();
//! assert_eq!(seed, "AACQA-AAAAA-AAAAA");
//!
//! let registry = FormatRegistry::new([format]).unwrap();
//! let decoded = decode_seed(&registry, &seed).unwrap();
//! assert_eq!(decoded.value("size"), Some(&OptionValue::from("medium")));
//! ```

mod engine;
mod entropy;
mod error;
mod lifecycle;
mod registry;
mod seed;

pub use engine::{decode_seed, decode_with_format, encode_seed, OptionValues};
pub use entropy::Entropy;
pub use error::{CodecError, CodecResult};
pub use lifecycle::{ActiveSeed, SeedLifecycle};
pub use registry::FormatRegistry;
pub use seed::{generate_seed, generate_seed_with_rng, Seed};
