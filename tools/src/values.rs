//! Parsing `id=value` option assignments from the command line.

use anyhow::{anyhow, bail, Context, Result};
use codec::OptionValues;
use schema::{OptionKind, OptionValue, SeedFormat};

/// Parses `id=value` assignments into option values for `format`.
///
/// Values are interpreted by the option's kind: booleans accept
/// `true`/`false`/`on`/`off`/`yes`/`no`/`1`/`0`, sliders accept integers, and
/// choice and grouped options take the choice or group name verbatim.
pub fn parse_assignments<S: AsRef<str>>(format: &SeedFormat, assignments: &[S]) -> Result<OptionValues> {
    let mut values = OptionValues::new();
    for assignment in assignments {
        let assignment = assignment.as_ref();
        let (id, raw) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected id=value, got {assignment:?}"))?;
        let id = id.trim();
        let option = format
            .option(id)
            .ok_or_else(|| anyhow!("format version {} has no option {id:?}", format.version()))?;
        let value = parse_value(&option.kind, raw.trim())
            .with_context(|| format!("option {id}"))?;
        values.insert(option.id.clone(), value);
    }
    Ok(values)
}

fn parse_value(kind: &OptionKind, raw: &str) -> Result<OptionValue> {
    match kind {
        OptionKind::Bool { .. } => match raw.to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(OptionValue::Bool(true)),
            "false" | "off" | "no" | "0" => Ok(OptionValue::Bool(false)),
            _ => bail!("expected a boolean, got {raw:?}"),
        },
        OptionKind::Slider { .. } => raw
            .parse::<i64>()
            .map(OptionValue::Int)
            .with_context(|| format!("expected an integer, got {raw:?}")),
        OptionKind::Choice { .. } | OptionKind::Grouped { .. } => {
            Ok(OptionValue::Choice(raw.to_owned()))
        }
        OptionKind::Base | OptionKind::Nested { .. } => bail!("option does not carry a value"),
    }
}
