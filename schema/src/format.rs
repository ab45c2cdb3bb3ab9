//! Versioned seed format definitions and capacity validation.

use std::collections::HashSet;

use wire::{Alphabet, Template};

use crate::error::{SchemaError, SchemaResult};
use crate::option::SeedOption;

/// Default width of the version field, in bits.
pub const DEFAULT_VERSION_BITS: u8 = 5;

/// Widest supported version field, in bits.
pub const MAX_VERSION_BITS: u8 = 32;

/// One generation of a seed layout: version, template, and ordered options.
///
/// Immutable once built. The bit layout is
/// `version | option fields (pre-order) | entropy`, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFormat {
    version: u32,
    template: Template,
    alphabet: Alphabet,
    version_bits: u8,
    options: Vec<SeedOption>,
    options_width: usize,
}

impl SeedFormat {
    /// Creates a format builder using the base32 alphabet and a
    /// [`DEFAULT_VERSION_BITS`]-wide version field.
    #[must_use]
    pub fn builder(version: u32, template: Template) -> SeedFormatBuilder {
        SeedFormatBuilder {
            version,
            template,
            alphabet: Alphabet::base32(),
            version_bits: DEFAULT_VERSION_BITS,
            options: Vec::new(),
        }
    }

    /// Creates a format after validation.
    pub fn new(
        version: u32,
        template: Template,
        alphabet: Alphabet,
        version_bits: u8,
        options: Vec<SeedOption>,
    ) -> SchemaResult<Self> {
        if version_bits == 0 || version_bits > MAX_VERSION_BITS {
            return Err(SchemaError::InvalidVersionBits { bits: version_bits });
        }
        if u64::from(version) >= 1u64 << version_bits {
            return Err(SchemaError::VersionOutOfRange {
                version,
                version_bits,
            });
        }

        let mut ids = HashSet::new();
        for option in &options {
            option.validate()?;
            let mut fields = Vec::new();
            option.collect_fields(&mut fields);
            for field in fields {
                if !ids.insert(field.id.clone()) {
                    return Err(SchemaError::DuplicateOptionId {
                        option: field.id.clone(),
                    });
                }
            }
        }

        let options_width: usize = options.iter().map(SeedOption::width).sum();
        let capacity_bits = template.capacity_bits(&alphabet);
        let required_bits = usize::from(version_bits) + options_width;
        if required_bits > capacity_bits {
            let per_symbol = usize::from(alphabet.bits_per_symbol());
            return Err(SchemaError::CapacityExceeded {
                required_bits,
                capacity_bits,
                required_placeholders: required_bits.div_ceil(per_symbol),
            });
        }

        Ok(Self {
            version,
            template,
            alphabet,
            version_bits,
            options,
            options_width,
        })
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn version_bits(&self) -> u8 {
        self.version_bits
    }

    /// Top-level options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[SeedOption] {
        &self.options
    }

    /// Value-bearing options in layout order.
    #[must_use]
    pub fn fields(&self) -> Vec<&SeedOption> {
        let mut fields = Vec::new();
        for option in &self.options {
            option.collect_fields(&mut fields);
        }
        fields
    }

    /// Looks up a value-bearing option by identifier, anywhere in the tree.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&SeedOption> {
        self.fields()
            .into_iter()
            .find(|option| option.id.as_str() == id)
    }

    /// Returns `true` if seeds of this format carry a value for `id`.
    #[must_use]
    pub fn declares(&self, id: &str) -> bool {
        self.option(id).is_some()
    }

    /// Bits used by all option fields together.
    #[must_use]
    pub const fn options_width(&self) -> usize {
        self.options_width
    }

    /// Bits carried by the template.
    #[must_use]
    pub fn capacity_bits(&self) -> usize {
        self.template.capacity_bits(&self.alphabet)
    }

    /// Bits left over for entropy.
    #[must_use]
    pub fn entropy_bits(&self) -> usize {
        self.capacity_bits() - usize::from(self.version_bits) - self.options_width
    }

    /// Base-two logarithm of the number of distinct seeds per option setting.
    #[must_use]
    pub fn variant_count_log2(&self) -> usize {
        self.entropy_bits()
    }
}

/// Builder for [`SeedFormat`].
#[derive(Debug, Clone)]
pub struct SeedFormatBuilder {
    version: u32,
    template: Template,
    alphabet: Alphabet,
    version_bits: u8,
    options: Vec<SeedOption>,
}

impl SeedFormatBuilder {
    /// Sets the symbol alphabet.
    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the version field width.
    #[must_use]
    pub const fn version_bits(mut self, bits: u8) -> Self {
        self.version_bits = bits;
        self
    }

    /// Appends an option.
    #[must_use]
    pub fn option(mut self, option: SeedOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several options.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = SeedOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Builds the format after validation.
    pub fn build(self) -> SchemaResult<SeedFormat> {
        SeedFormat::new(
            self.version,
            self.template,
            self.alphabet,
            self.version_bits,
            self.options,
        )
    }
}
