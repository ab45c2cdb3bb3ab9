//! JSON format configuration files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use codec::FormatRegistry;
use schema::{SeedFormat, SeedOption, DEFAULT_VERSION_BITS};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wire::{Alphabet, Template};

/// Template used when no formats file is given.
pub const BUILTIN_TEMPLATE: &str = "XXXXX-XXXXX-XXXXX";

/// A formats file: every format a consumer registers, plus shared settings.
///
/// ```json
/// {
///   "version_bits": 5,
///   "formats": [
///     { "version": 0, "template": "XXXXX-XXXXX-XXXXX",
///       "options": [{ "id": "hardcore", "kind": "bool", "default": false }] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatsFile {
    /// Shared alphabet; base32 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<Alphabet>,
    /// Shared version field width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_bits: Option<u8>,
    /// Version used for new seeds; the last format when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version: Option<u32>,
    pub formats: Vec<FormatEntry>,
}

/// One format of a formats file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatEntry {
    pub version: u32,
    pub template: Template,
    #[serde(default)]
    pub options: Vec<SeedOption>,
}

impl FormatsFile {
    /// A single optionless format using [`BUILTIN_TEMPLATE`].
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            alphabet: None,
            version_bits: None,
            default_version: None,
            formats: vec![FormatEntry {
                version: 0,
                template: Template::parse(BUILTIN_TEMPLATE).context("parse builtin template")?,
                options: Vec::new(),
            }],
        })
    }

    /// Parses a formats file from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse formats json")
    }

    /// Reads and parses a formats file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read formats {}", path.display()))?;
        let file = Self::from_json(&contents)
            .with_context(|| format!("load formats {}", path.display()))?;
        debug!(path = %path.display(), formats = file.formats.len(), "loaded formats file");
        Ok(file)
    }

    /// Builds and validates every format, then the registry.
    pub fn into_registry(self) -> Result<FormatRegistry> {
        let alphabet = self.alphabet.unwrap_or_default();
        let version_bits = self.version_bits.unwrap_or(DEFAULT_VERSION_BITS);

        let mut formats = Vec::with_capacity(self.formats.len());
        for entry in self.formats {
            let version = entry.version;
            let format = SeedFormat::builder(version, entry.template)
                .alphabet(alphabet.clone())
                .version_bits(version_bits)
                .options(entry.options)
                .build()
                .with_context(|| format!("invalid format version {version}"))?;
            formats.push(format);
        }

        let registry = FormatRegistry::new(formats).context("build format registry")?;
        match self.default_version {
            Some(version) => registry
                .with_default_version(version)
                .with_context(|| format!("default version {version}")),
            None => Ok(registry),
        }
    }
}
