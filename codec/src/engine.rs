//! Seed string encoding and decoding.
//!
//! Bit layout, most significant first:
//!
//! ```text
//! version (version_bits) | option fields, pre-order | entropy (entropy_bits)
//! ```
//!
//! The packed bits are split into `bits_per_symbol` groups from the most
//! significant end and substituted into the template's placeholders.

use std::collections::BTreeMap;

use bitstream::{BitReader, BitWriter};
use schema::{OptionId, OptionValue, SeedFormat, ValueReason};
use tracing::{debug, warn};
use wire::{bits_to_symbols, symbols_to_bits, Alphabet};

use crate::entropy::Entropy;
use crate::error::{CodecError, CodecResult};
use crate::registry::FormatRegistry;
use crate::seed::Seed;

/// Option values keyed by option identifier.
pub type OptionValues = BTreeMap<OptionId, OptionValue>;

/// Encodes option values and entropy into a seed string.
///
/// Options missing from `values` take their defaults. Values for options the
/// format does not declare, and values outside an option's domain, are
/// rejected. `entropy` must be exactly [`SeedFormat::entropy_bits`] wide.
pub fn encode_seed(
    format: &SeedFormat,
    values: &OptionValues,
    entropy: &Entropy,
) -> CodecResult<String> {
    let payload = pack(format, values, entropy)?;
    let alphabet = format.alphabet();
    let symbols = bits_to_symbols(&payload, format.capacity_bits(), alphabet.bits_per_symbol())?;
    let seed = format.template().render(&symbols, alphabet)?;
    debug!(version = format.version(), seed = %seed, "encoded seed");
    Ok(seed)
}

/// Decodes a seed string against every format in `registry`.
///
/// The string is matched structurally against each distinct template, the
/// default format's first. A match decodes when the version it names is
/// registered with a structurally equal template. When some
/// template matched but none named a usable version, the first such version
/// is [`CodecError::UnsupportedVersion`]. When no template matches, the error
/// describes the mismatch against the default template.
pub fn decode_seed(registry: &FormatRegistry, input: &str) -> CodecResult<Seed> {
    let alphabet = registry.alphabet();
    let mut first_reason = None;
    let mut unsupported = None;
    for template in registry.templates() {
        let symbols = match template.match_symbols(input, alphabet) {
            Ok(symbols) => symbols,
            Err(reason) => {
                first_reason.get_or_insert(reason);
                continue;
            }
        };

        let version = read_version(&symbols, alphabet, registry.version_bits())?;
        let Some(format) = registry
            .get(version)
            .filter(|format| format.template() == template)
        else {
            debug!(version, template = %template, "version not registered for template");
            unsupported.get_or_insert(version);
            continue;
        };
        let seed = unpack(format, &symbols)?;
        debug!(version, seed = %seed, "decoded seed");
        return Ok(seed);
    }

    if let Some(version) = unsupported {
        warn!(version, "seed names an unsupported version");
        return Err(CodecError::UnsupportedVersion { version });
    }
    match first_reason {
        Some(reason) => {
            warn!(%reason, "rejected malformed seed");
            Err(CodecError::Format(reason))
        }
        None => Err(CodecError::EmptyRegistry),
    }
}

/// Decodes a seed string against a single format.
pub fn decode_with_format(format: &SeedFormat, input: &str) -> CodecResult<Seed> {
    let symbols = format
        .template()
        .match_symbols(input, format.alphabet())
        .map_err(|reason| {
            warn!(%reason, "rejected malformed seed");
            CodecError::Format(reason)
        })?;
    let version = read_version(&symbols, format.alphabet(), format.version_bits())?;
    if version != format.version() {
        warn!(version, expected = format.version(), "seed names a different version");
        return Err(CodecError::UnsupportedVersion { version });
    }
    unpack(format, &symbols)
}

fn pack(format: &SeedFormat, values: &OptionValues, entropy: &Entropy) -> CodecResult<Vec<u8>> {
    if let Some(option) = values.keys().find(|id| !format.declares(id.as_str())) {
        return Err(CodecError::UnknownOption {
            option: option.clone(),
        });
    }
    if entropy.bits() != format.entropy_bits() {
        return Err(CodecError::EntropyWidthMismatch {
            expected: format.entropy_bits(),
            found: entropy.bits(),
        });
    }

    let mut writer = BitWriter::with_bit_capacity(format.capacity_bits());
    writer.write_bits(
        u64::from(format.version()),
        usize::from(format.version_bits()),
    )?;

    for field in format.fields() {
        let value = values
            .get(&field.id)
            .cloned()
            .or_else(|| field.default_value())
            .ok_or_else(|| CodecError::OptionDomain {
                option: field.id.clone(),
                reason: ValueReason::Valueless,
            })?;
        let raw = field
            .value_to_bits(&value)
            .map_err(|reason| CodecError::OptionDomain {
                option: field.id.clone(),
                reason,
            })?;
        writer.write_bits(raw, field.own_width())?;
    }

    writer.write_wide(entropy.as_be_bytes(), entropy.bits())?;
    Ok(writer.finish())
}

fn read_version(symbols: &[u8], alphabet: &Alphabet, version_bits: u8) -> CodecResult<u32> {
    let (bytes, bit_len) = symbols_to_bits(symbols, alphabet.bits_per_symbol())?;
    let mut reader = BitReader::with_bit_len(&bytes, bit_len);
    // Version fields are at most 32 bits wide.
    Ok(reader.read_bits(usize::from(version_bits))? as u32)
}

fn unpack(format: &SeedFormat, symbols: &[u8]) -> CodecResult<Seed> {
    let alphabet = format.alphabet();
    let (payload, bit_len) = symbols_to_bits(symbols, alphabet.bits_per_symbol())?;
    let mut reader = BitReader::with_bit_len(&payload, bit_len);
    let version = reader.read_bits(usize::from(format.version_bits()))? as u32;

    let mut values = Vec::new();
    for field in format.fields() {
        let raw = reader.read_bits(field.own_width())?;
        if let Some(value) = field.bits_to_value(raw) {
            values.push((field.id.clone(), value));
        }
    }

    let entropy_bits = format.entropy_bits();
    let entropy = Entropy::from_be_bytes(entropy_bits, &reader.read_wide(entropy_bits)?);
    let string = format.template().render(symbols, alphabet)?;
    Ok(Seed::new(version, string, entropy, payload, values))
}
