//! Error types for codec operations.

use std::fmt;

use schema::{OptionId, ValueReason};
use wire::FormatReason;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding, decoding, or registering formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The string does not fit the template or alphabet.
    Format(FormatReason),

    /// The string names a version that is not registered.
    UnsupportedVersion { version: u32 },

    /// A supplied option value is outside the option's domain.
    OptionDomain {
        option: OptionId,
        reason: ValueReason,
    },

    /// A supplied value names an option the format does not declare.
    UnknownOption { option: OptionId },

    /// Entropy width differs from the format's entropy field.
    EntropyWidthMismatch { expected: usize, found: usize },

    /// A registry needs at least one format.
    EmptyRegistry,

    /// Two registered formats share a version.
    DuplicateVersion { version: u32 },

    /// A registered format uses a different alphabet than the others.
    AlphabetMismatch { version: u32 },

    /// A registered format uses a different version field width than the others.
    VersionBitsMismatch {
        version: u32,
        expected: u8,
        found: u8,
    },

    /// Format construction error.
    Schema(schema::SchemaError),

    /// Template rendering error.
    Wire(wire::WireError),

    /// Bitstream error.
    Bitstream(bitstream::BitError),
}

impl CodecError {
    /// Returns `true` for errors caused by a user-supplied seed string.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Format(_) | Self::UnsupportedVersion { .. })
    }

    /// Short message suitable for showing next to a seed input field.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Format(_) => "Invalid seed",
            Self::UnsupportedVersion { .. } => "Unsupported seed version",
            _ => "Seed could not be created",
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(reason) => write!(f, "invalid seed: {reason}"),
            Self::UnsupportedVersion { version } => {
                write!(f, "seed version {version} is not supported")
            }
            Self::OptionDomain { option, reason } => {
                write!(f, "invalid value for option {option}: {reason}")
            }
            Self::UnknownOption { option } => {
                write!(f, "option {option} is not declared by this format")
            }
            Self::EntropyWidthMismatch { expected, found } => {
                write!(f, "entropy is {found} bits but the format expects {expected}")
            }
            Self::EmptyRegistry => write!(f, "format registry has no formats"),
            Self::DuplicateVersion { version } => {
                write!(f, "format version {version} is registered more than once")
            }
            Self::AlphabetMismatch { version } => {
                write!(f, "format version {version} uses a different alphabet")
            }
            Self::VersionBitsMismatch {
                version,
                expected,
                found,
            } => {
                write!(
                    f,
                    "format version {version} has a {found}-bit version field, expected {expected}"
                )
            }
            Self::Schema(e) => write!(f, "schema error: {e}"),
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(e) => Some(e),
            Self::Wire(e) => Some(e),
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormatReason> for CodecError {
    fn from(reason: FormatReason) -> Self {
        Self::Format(reason)
    }
}

impl From<schema::SchemaError> for CodecError {
    fn from(err: schema::SchemaError) -> Self {
        Self::Schema(err)
    }
}

impl From<wire::WireError> for CodecError {
    fn from(err: wire::WireError) -> Self {
        Self::Wire(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
