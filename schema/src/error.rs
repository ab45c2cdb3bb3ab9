//! Schema validation errors.

use std::fmt;

use crate::OptionId;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when building a seed format or one of its options.
///
/// All of these are programmer errors caught at definition time, never
/// produced by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Invalid alphabet or template.
    Wire(wire::WireError),

    /// Two value-bearing options share an identifier.
    DuplicateOptionId { option: OptionId },

    /// Slider with `min > max`.
    InvalidSliderRange { option: OptionId, min: i64, max: i64 },

    /// Slider step is not positive or does not divide the range.
    InvalidSliderStep { option: OptionId, step: i64 },

    /// Choice option without choices.
    EmptyChoices { option: OptionId },

    /// The same choice listed twice.
    DuplicateChoice { option: OptionId, choice: String },

    /// Grouped option without groups.
    EmptyGroups { option: OptionId },

    /// Default value outside the option's domain.
    InvalidDefault { option: OptionId },

    /// Version field width outside `1..=32`.
    InvalidVersionBits { bits: u8 },

    /// Version number does not fit in the version field.
    VersionOutOfRange { version: u32, version_bits: u8 },

    /// Version field and options need more bits than the template carries.
    CapacityExceeded {
        required_bits: usize,
        capacity_bits: usize,
        required_placeholders: usize,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "{e}"),
            Self::DuplicateOptionId { option } => {
                write!(f, "option id {option} is declared more than once")
            }
            Self::InvalidSliderRange { option, min, max } => {
                write!(f, "slider {option} has min {min} greater than max {max}")
            }
            Self::InvalidSliderStep { option, step } => {
                write!(
                    f,
                    "slider {option} step {step} must be positive and divide its range"
                )
            }
            Self::EmptyChoices { option } => write!(f, "option {option} has no choices"),
            Self::DuplicateChoice { option, choice } => {
                write!(f, "option {option} lists choice {choice:?} more than once")
            }
            Self::EmptyGroups { option } => write!(f, "grouped option {option} has no groups"),
            Self::InvalidDefault { option } => {
                write!(f, "default value of option {option} is outside its domain")
            }
            Self::InvalidVersionBits { bits } => {
                write!(f, "version field width {bits} must be between 1 and 32 bits")
            }
            Self::VersionOutOfRange {
                version,
                version_bits,
            } => {
                write!(
                    f,
                    "version {version} does not fit in a {version_bits}-bit version field"
                )
            }
            Self::CapacityExceeded {
                required_bits,
                capacity_bits,
                required_placeholders,
            } => {
                write!(
                    f,
                    "format needs {required_bits} bits but its template carries {capacity_bits}; \
                     at least {required_placeholders} placeholders are required"
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::WireError> for SchemaError {
    fn from(err: wire::WireError) -> Self {
        Self::Wire(err)
    }
}
