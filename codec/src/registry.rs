//! Version-keyed format registries.

use std::collections::HashSet;

use rand::Rng;
use schema::SeedFormat;
use tracing::warn;
use wire::{Alphabet, Template};

use crate::engine::{decode_seed, encode_seed, OptionValues};
use crate::entropy::Entropy;
use crate::error::{CodecError, CodecResult};
use crate::seed::{generate_seed_with_rng, Seed};

/// Every format a seed consumer understands, keyed by version.
///
/// Built once per consumer and passed wherever seeds are decoded. All formats
/// share an alphabet and a version field width so the version can be read
/// before the format is known.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: Vec<SeedFormat>,
    default_version: u32,
}

impl FormatRegistry {
    /// Creates a registry. The last format declared is the default.
    pub fn new(formats: impl IntoIterator<Item = SeedFormat>) -> CodecResult<Self> {
        let formats: Vec<SeedFormat> = formats.into_iter().collect();
        let Some(first) = formats.first() else {
            return Err(CodecError::EmptyRegistry);
        };

        let mut versions = HashSet::new();
        for format in &formats {
            if !versions.insert(format.version()) {
                warn!(version = format.version(), "duplicate format version");
                return Err(CodecError::DuplicateVersion {
                    version: format.version(),
                });
            }
            if format.alphabet() != first.alphabet() {
                warn!(version = format.version(), "format alphabet differs from registry");
                return Err(CodecError::AlphabetMismatch {
                    version: format.version(),
                });
            }
            if format.version_bits() != first.version_bits() {
                warn!(
                    version = format.version(),
                    expected = first.version_bits(),
                    found = format.version_bits(),
                    "format version width differs from registry"
                );
                return Err(CodecError::VersionBitsMismatch {
                    version: format.version(),
                    expected: first.version_bits(),
                    found: format.version_bits(),
                });
            }
        }

        let default_version = formats
            .last()
            .map_or(first.version(), SeedFormat::version);
        Ok(Self {
            formats,
            default_version,
        })
    }

    /// Overrides the default version.
    pub fn with_default_version(mut self, version: u32) -> CodecResult<Self> {
        if self.get(version).is_none() {
            return Err(CodecError::UnsupportedVersion { version });
        }
        self.default_version = version;
        Ok(self)
    }

    #[must_use]
    pub const fn default_version(&self) -> u32 {
        self.default_version
    }

    /// The format new seeds are generated with.
    #[must_use]
    pub fn default_format(&self) -> &SeedFormat {
        // Registries are non-empty and the default is always registered.
        self.get(self.default_version).unwrap_or(&self.formats[0])
    }

    /// Looks up a registered version.
    #[must_use]
    pub fn get(&self, version: u32) -> Option<&SeedFormat> {
        self.formats.iter().find(|format| format.version() == version)
    }

    /// Resolves an optional version override to a format.
    pub fn format(&self, version: Option<u32>) -> CodecResult<&SeedFormat> {
        match version {
            None => Ok(self.default_format()),
            Some(version) => self
                .get(version)
                .ok_or(CodecError::UnsupportedVersion { version }),
        }
    }

    /// Formats in declaration order.
    #[must_use]
    pub fn formats(&self) -> &[SeedFormat] {
        &self.formats
    }

    /// Registered versions in declaration order.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.formats.iter().map(SeedFormat::version)
    }

    /// The alphabet shared by every format.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.formats[0].alphabet()
    }

    /// The version field width shared by every format.
    #[must_use]
    pub fn version_bits(&self) -> u8 {
        self.formats[0].version_bits()
    }

    /// Structurally distinct templates, the default format's first.
    #[must_use]
    pub fn templates(&self) -> Vec<&Template> {
        let mut templates = vec![self.default_format().template()];
        for format in &self.formats {
            if !templates.contains(&format.template()) {
                templates.push(format.template());
            }
        }
        templates
    }

    /// Encodes with the default format or a version override.
    pub fn encode(
        &self,
        version: Option<u32>,
        values: &OptionValues,
        entropy: &Entropy,
    ) -> CodecResult<String> {
        encode_seed(self.format(version)?, values, entropy)
    }

    /// Decodes a seed string against every registered format.
    pub fn decode(&self, input: &str) -> CodecResult<Seed> {
        decode_seed(self, input)
    }

    /// Generates a seed with thread-local randomness.
    pub fn generate(&self, version: Option<u32>, values: &OptionValues) -> CodecResult<Seed> {
        self.generate_with_rng(version, values, &mut rand::thread_rng())
    }

    /// Generates a seed with caller-supplied randomness.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        version: Option<u32>,
        values: &OptionValues,
        rng: &mut R,
    ) -> CodecResult<Seed> {
        generate_seed_with_rng(self.format(version)?, values, rng)
    }
}
