//! Seed option kinds and their bit mappings.

use std::borrow::Borrow;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{SchemaError, SchemaResult};

/// Identity of an option.
///
/// Two options are the same option when their identifiers match, across every
/// format version that declares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct OptionId(String);

impl OptionId {
    /// Creates an option identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for OptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A decoded or user-selected option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Choice(String),
}

impl OptionValue {
    /// Short name of the value's type, for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Choice(_) => "choice",
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Choice(value) => f.write_str(value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Choice(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Choice(value)
    }
}

/// Why a value cannot be encoded for an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueReason {
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    OutOfRange {
        min: i64,
        max: i64,
        value: i64,
    },
    OffStep {
        step: i64,
        value: i64,
    },
    UnknownChoice {
        value: String,
    },
    /// The option carries no value.
    Valueless,
}

impl fmt::Display for ValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} but got {found}")
            }
            Self::OutOfRange { min, max, value } => {
                write!(f, "value {value} outside [{min}, {max}]")
            }
            Self::OffStep { step, value } => {
                write!(f, "value {value} is not on a step of {step}")
            }
            Self::UnknownChoice { value } => write!(f, "{value:?} is not one of the choices"),
            Self::Valueless => write!(f, "option does not carry a value"),
        }
    }
}

/// How a choice option is presented. Both styles share one bit mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ChoiceStyle {
    #[default]
    Spinner,
    Dropdown,
}

/// A named set of sub-options inside a grouped option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionGroup {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<SeedOption>,
}

impl OptionGroup {
    /// Creates a group.
    #[must_use]
    pub fn new(name: impl Into<String>, options: Vec<SeedOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// The closed set of option kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum OptionKind {
    /// No value and no bits; a placeholder or menu entry.
    Base,

    /// One bit.
    Bool { default: bool },

    /// Integers `min, min + step, ..., max`.
    Slider {
        min: i64,
        max: i64,
        #[cfg_attr(feature = "serde", serde(default = "default_step"))]
        step: i64,
        default: i64,
    },

    /// One of a list of named choices.
    Choice {
        #[cfg_attr(feature = "serde", serde(default))]
        style: ChoiceStyle,
        choices: Vec<String>,
        default: String,
    },

    /// A selected group plus the sub-options of every group.
    ///
    /// Bits for all groups' sub-options are reserved whichever group is
    /// selected, so the layout never depends on an encoded value.
    Grouped {
        groups: Vec<OptionGroup>,
        default: String,
    },

    /// An optional parent option followed by children, all always reserved.
    Nested {
        #[cfg_attr(feature = "serde", serde(default))]
        parent: Option<Box<SeedOption>>,
        #[cfg_attr(feature = "serde", serde(default))]
        children: Vec<SeedOption>,
    },
}

#[cfg(feature = "serde")]
const fn default_step() -> i64 {
    1
}

/// One declared option of a seed format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedOption {
    pub id: OptionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: OptionKind,
}

impl SeedOption {
    /// Creates an option of any kind.
    #[must_use]
    pub fn new(id: impl Into<OptionId>, kind: OptionKind) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            kind,
        }
    }

    /// A valueless option.
    #[must_use]
    pub fn base(id: impl Into<OptionId>) -> Self {
        Self::new(id, OptionKind::Base)
    }

    /// A boolean option.
    #[must_use]
    pub fn bool(id: impl Into<OptionId>, default: bool) -> Self {
        Self::new(id, OptionKind::Bool { default })
    }

    /// An integer slider with a step of one.
    #[must_use]
    pub fn slider(id: impl Into<OptionId>, min: i64, max: i64, default: i64) -> Self {
        Self::stepped_slider(id, min, max, 1, default)
    }

    /// An integer slider over `min, min + step, ..., max`.
    #[must_use]
    pub fn stepped_slider(
        id: impl Into<OptionId>,
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    ) -> Self {
        Self::new(
            id,
            OptionKind::Slider {
                min,
                max,
                step,
                default,
            },
        )
    }

    /// A choice option presented as a spinner.
    #[must_use]
    pub fn spinner<I, S>(id: impl Into<OptionId>, choices: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::choice(id, ChoiceStyle::Spinner, choices, default)
    }

    /// A choice option presented as a dropdown.
    #[must_use]
    pub fn dropdown<I, S>(id: impl Into<OptionId>, choices: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::choice(id, ChoiceStyle::Dropdown, choices, default)
    }

    fn choice<I, S>(
        id: impl Into<OptionId>,
        style: ChoiceStyle,
        choices: I,
        default: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            id,
            OptionKind::Choice {
                style,
                choices: choices.into_iter().map(Into::into).collect(),
                default: default.into(),
            },
        )
    }

    /// A grouped option selecting one of several groups.
    #[must_use]
    pub fn grouped(
        id: impl Into<OptionId>,
        groups: Vec<OptionGroup>,
        default: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            OptionKind::Grouped {
                groups,
                default: default.into(),
            },
        )
    }

    /// A single visual group of options; costs no selector bits.
    #[must_use]
    pub fn group(id: impl Into<OptionId>, options: Vec<SeedOption>) -> Self {
        let id = id.into();
        let name = id.as_str().to_owned();
        Self::grouped(id, vec![OptionGroup::new(name.clone(), options)], name)
    }

    /// A nested option: an optional parent and its children.
    #[must_use]
    pub fn nested(
        id: impl Into<OptionId>,
        parent: Option<SeedOption>,
        children: Vec<SeedOption>,
    ) -> Self {
        Self::new(
            id,
            OptionKind::Nested {
                parent: parent.map(Box::new),
                children,
            },
        )
    }

    /// Sets the human description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns `true` if the option has its own value field.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        !matches!(self.kind, OptionKind::Base | OptionKind::Nested { .. })
    }

    /// Number of distinct values of the option's own field.
    fn domain_size(&self) -> u128 {
        match &self.kind {
            OptionKind::Base | OptionKind::Nested { .. } => 1,
            OptionKind::Bool { .. } => 2,
            OptionKind::Slider { min, max, step, .. } => slider_count(*min, *max, *step),
            OptionKind::Choice { choices, .. } => choices.len() as u128,
            OptionKind::Grouped { groups, .. } => groups.len() as u128,
        }
    }

    /// Bits of the option's own value field.
    #[must_use]
    pub fn own_width(&self) -> usize {
        ceil_log2(self.domain_size())
    }

    /// Bits reserved for the option and everything beneath it.
    ///
    /// Depends only on construction parameters, never on a value.
    #[must_use]
    pub fn width(&self) -> usize {
        self.own_width()
            + self
                .sub_options()
                .into_iter()
                .map(Self::width)
                .sum::<usize>()
    }

    /// Direct sub-options in layout order.
    #[must_use]
    pub fn sub_options(&self) -> Vec<&Self> {
        match &self.kind {
            OptionKind::Grouped { groups, .. } => {
                groups.iter().flat_map(|group| group.options.iter()).collect()
            }
            OptionKind::Nested { parent, children } => {
                parent.as_deref().into_iter().chain(children.iter()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Pushes the value-bearing options of this subtree, in layout order.
    pub(crate) fn collect_fields<'a>(&'a self, out: &mut Vec<&'a Self>) {
        if self.has_value() {
            out.push(self);
        }
        for sub in self.sub_options() {
            sub.collect_fields(out);
        }
    }

    /// The option's default value, or `None` for valueless options.
    #[must_use]
    pub fn default_value(&self) -> Option<OptionValue> {
        match &self.kind {
            OptionKind::Base | OptionKind::Nested { .. } => None,
            OptionKind::Bool { default } => Some(OptionValue::Bool(*default)),
            OptionKind::Slider { default, .. } => Some(OptionValue::Int(*default)),
            OptionKind::Choice { default, .. } | OptionKind::Grouped { default, .. } => {
                Some(OptionValue::Choice(default.clone()))
            }
        }
    }

    /// Inclusive integer range of a slider.
    #[must_use]
    pub fn range(&self) -> Option<RangeInclusive<i64>> {
        match self.kind {
            OptionKind::Slider { min, max, .. } => Some(min..=max),
            _ => None,
        }
    }

    /// Step of a slider.
    #[must_use]
    pub const fn step(&self) -> Option<i64> {
        match self.kind {
            OptionKind::Slider { step, .. } => Some(step),
            _ => None,
        }
    }

    /// Choice names, or group names for a grouped option.
    #[must_use]
    pub fn choices(&self) -> Vec<&str> {
        match &self.kind {
            OptionKind::Choice { choices, .. } => choices.iter().map(String::as_str).collect(),
            OptionKind::Grouped { groups, .. } => {
                groups.iter().map(|group| group.name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Maps a value to the raw bits of the option's own field.
    pub fn value_to_bits(&self, value: &OptionValue) -> Result<u64, ValueReason> {
        match (&self.kind, value) {
            (OptionKind::Base | OptionKind::Nested { .. }, _) => Err(ValueReason::Valueless),
            (OptionKind::Bool { .. }, OptionValue::Bool(flag)) => Ok(u64::from(*flag)),
            (
                OptionKind::Slider { min, max, step, .. },
                OptionValue::Int(value),
            ) => slider_index(*min, *max, *step, *value),
            (OptionKind::Choice { choices, .. }, OptionValue::Choice(name)) => choices
                .iter()
                .position(|choice| choice == name)
                .map(|idx| idx as u64)
                .ok_or_else(|| ValueReason::UnknownChoice {
                    value: name.clone(),
                }),
            (OptionKind::Grouped { groups, .. }, OptionValue::Choice(name)) => groups
                .iter()
                .position(|group| &group.name == name)
                .map(|idx| idx as u64)
                .ok_or_else(|| ValueReason::UnknownChoice {
                    value: name.clone(),
                }),
            (kind, value) => Err(ValueReason::TypeMismatch {
                expected: kind_value_name(kind),
                found: value.kind_name(),
            }),
        }
    }

    /// Maps raw bits of the option's own field to a value.
    ///
    /// Total: raw values beyond the domain wrap around modulo its size, so any
    /// bit pattern decodes. Returns `None` only for valueless options.
    #[must_use]
    pub fn bits_to_value(&self, raw: u64) -> Option<OptionValue> {
        let index = u128::from(raw) % self.domain_size();
        match &self.kind {
            OptionKind::Base | OptionKind::Nested { .. } => None,
            OptionKind::Bool { .. } => Some(OptionValue::Bool(index == 1)),
            OptionKind::Slider { min, max, step, .. } => {
                let value = i128::from(*min) + index as i128 * i128::from(*step);
                Some(OptionValue::Int(i64::try_from(value).unwrap_or(*max)))
            }
            OptionKind::Choice { choices, .. } => choices
                .get(index as usize)
                .map(|choice| OptionValue::Choice(choice.clone())),
            OptionKind::Grouped { groups, .. } => groups
                .get(index as usize)
                .map(|group| OptionValue::Choice(group.name.clone())),
        }
    }

    /// Validates the option's parameters and default, recursively.
    pub fn validate(&self) -> SchemaResult<()> {
        match &self.kind {
            OptionKind::Base | OptionKind::Bool { .. } => {}
            OptionKind::Slider { min, max, step, .. } => {
                if min > max {
                    return Err(SchemaError::InvalidSliderRange {
                        option: self.id.clone(),
                        min: *min,
                        max: *max,
                    });
                }
                let span = i128::from(*max) - i128::from(*min);
                if *step <= 0 || span % i128::from(*step) != 0 {
                    return Err(SchemaError::InvalidSliderStep {
                        option: self.id.clone(),
                        step: *step,
                    });
                }
            }
            OptionKind::Choice { choices, .. } => {
                if choices.is_empty() {
                    return Err(SchemaError::EmptyChoices {
                        option: self.id.clone(),
                    });
                }
                self.check_distinct(choices.iter().map(String::as_str))?;
            }
            OptionKind::Grouped { groups, .. } => {
                if groups.is_empty() {
                    return Err(SchemaError::EmptyGroups {
                        option: self.id.clone(),
                    });
                }
                self.check_distinct(groups.iter().map(|group| group.name.as_str()))?;
            }
            OptionKind::Nested { .. } => {}
        }

        if let Some(default) = self.default_value() {
            if self.value_to_bits(&default).is_err() {
                return Err(SchemaError::InvalidDefault {
                    option: self.id.clone(),
                });
            }
        }

        for sub in self.sub_options() {
            sub.validate()?;
        }
        Ok(())
    }

    fn check_distinct<'a>(&self, names: impl Iterator<Item = &'a str>) -> SchemaResult<()> {
        let mut seen: Vec<&str> = Vec::new();
        for name in names {
            if seen.contains(&name) {
                return Err(SchemaError::DuplicateChoice {
                    option: self.id.clone(),
                    choice: name.to_owned(),
                });
            }
            seen.push(name);
        }
        Ok(())
    }
}

const fn kind_value_name(kind: &OptionKind) -> &'static str {
    match kind {
        OptionKind::Bool { .. } => "bool",
        OptionKind::Slider { .. } => "int",
        _ => "choice",
    }
}

fn slider_count(min: i64, max: i64, step: i64) -> u128 {
    let span = i128::from(max) - i128::from(min);
    if span < 0 || step <= 0 {
        return 1;
    }
    (span / i128::from(step)) as u128 + 1
}

fn slider_index(min: i64, max: i64, step: i64, value: i64) -> Result<u64, ValueReason> {
    if value < min || value > max {
        return Err(ValueReason::OutOfRange { min, max, value });
    }
    let offset = i128::from(value) - i128::from(min);
    if step <= 0 || offset % i128::from(step) != 0 {
        return Err(ValueReason::OffStep { step, value });
    }
    u64::try_from(offset / i128::from(step)).map_err(|_| ValueReason::OutOfRange { min, max, value })
}

/// Smallest `k` with `2^k >= n`; zero for `n <= 1`.
const fn ceil_log2(n: u128) -> usize {
    if n <= 1 {
        0
    } else {
        (u128::BITS - (n - 1).leading_zeros()) as usize
    }
}
