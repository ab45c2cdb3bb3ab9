//! Decoded seed instances and seed generation.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;
use schema::{OptionId, OptionValue, SeedFormat, SeedOption};
use tracing::debug;

use crate::engine::{decode_with_format, encode_seed, OptionValues};
use crate::entropy::Entropy;
use crate::error::CodecResult;

/// A decoded seed.
///
/// Immutable; a new seed is produced by decoding again. Two seeds are equal
/// when they carry the same version and bits, whatever case the strings were
/// typed in.
#[derive(Debug, Clone)]
pub struct Seed {
    version: u32,
    string: String,
    entropy: Entropy,
    payload: Vec<u8>,
    values: Vec<(OptionId, OptionValue)>,
}

impl Seed {
    pub(crate) fn new(
        version: u32,
        string: String,
        entropy: Entropy,
        payload: Vec<u8>,
        values: Vec<(OptionId, OptionValue)>,
    ) -> Self {
        Self {
            version,
            string,
            entropy,
            payload,
            values,
        }
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// The canonical seed string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The entropy field, for seeding deterministic randomness.
    #[must_use]
    pub const fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    /// Every bit of the seed packed big-endian, zero-padded to a byte.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Decoded option values in layout order.
    #[must_use]
    pub fn values(&self) -> &[(OptionId, OptionValue)] {
        &self.values
    }

    /// Returns `true` if this seed's format declares the option.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.value(id).is_some()
    }

    /// The decoded value of an option, if this seed's format declares it.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<&OptionValue> {
        self.values
            .iter()
            .find(|(option, _)| option.as_str() == id)
            .map(|(_, value)| value)
    }

    /// The decoded value of `option`, or its default when this seed's format
    /// predates the option.
    #[must_use]
    pub fn get(&self, option: &SeedOption) -> Option<OptionValue> {
        self.value(option.id.as_str())
            .cloned()
            .or_else(|| option.default_value())
    }

    /// Decoded values as a map, suitable for encoding again.
    #[must_use]
    pub fn to_values(&self) -> OptionValues {
        self.values.iter().cloned().collect()
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.payload == other.payload
    }
}

impl Eq for Seed {}

impl Hash for Seed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
        self.payload.hash(state);
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

/// Generates a seed with fresh thread-local randomness.
pub fn generate_seed(format: &SeedFormat, values: &OptionValues) -> CodecResult<Seed> {
    generate_seed_with_rng(format, values, &mut rand::thread_rng())
}

/// Generates a seed, drawing entropy from `rng`.
///
/// The result is encoded and decoded once, so it is exactly what a user
/// typing the seed string back in would get.
pub fn generate_seed_with_rng<R: Rng + ?Sized>(
    format: &SeedFormat,
    values: &OptionValues,
    rng: &mut R,
) -> CodecResult<Seed> {
    let entropy = Entropy::random(format.entropy_bits(), rng);
    let string = encode_seed(format, values, &entropy)?;
    let seed = decode_with_format(format, &string)?;
    debug!(version = seed.version(), seed = %seed, "generated seed");
    Ok(seed)
}
