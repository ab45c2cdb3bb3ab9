//! Structured reports for formats and seeds, as JSON or text.

use codec::{FormatRegistry, Seed};
use schema::{layout_hash, OptionKind, OptionValue, SeedFormat, SeedOption};
use serde::Serialize;

/// Summary of one registered format.
#[derive(Debug, Clone, Serialize)]
pub struct FormatReport {
    pub version: u32,
    pub default: bool,
    pub template: String,
    pub alphabet: String,
    pub version_bits: u8,
    pub capacity_bits: usize,
    pub options_width: usize,
    pub entropy_bits: usize,
    pub layout_hash: String,
    pub fields: Vec<FieldReport>,
}

/// One value-bearing option in layout order.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub id: String,
    pub kind: &'static str,
    pub width: usize,
    pub default: Option<OptionValue>,
    pub domain: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A decoded seed.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub seed: String,
    pub version: u32,
    pub values: Vec<ValueReport>,
    pub entropy_bits: usize,
    pub entropy: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueReport {
    pub id: String,
    pub value: OptionValue,
}

/// Describes every format in `registry`, in declaration order.
#[must_use]
pub fn describe_registry(registry: &FormatRegistry) -> Vec<FormatReport> {
    registry
        .formats()
        .iter()
        .map(|format| describe_format(format, format.version() == registry.default_version()))
        .collect()
}

fn describe_format(format: &SeedFormat, default: bool) -> FormatReport {
    FormatReport {
        version: format.version(),
        default,
        template: format.template().to_string(),
        alphabet: format.alphabet().to_string(),
        version_bits: format.version_bits(),
        capacity_bits: format.capacity_bits(),
        options_width: format.options_width(),
        entropy_bits: format.entropy_bits(),
        layout_hash: format!("0x{:016x}", layout_hash(format)),
        fields: format.fields().into_iter().map(describe_field).collect(),
    }
}

fn describe_field(option: &SeedOption) -> FieldReport {
    let (kind, domain) = match &option.kind {
        OptionKind::Bool { .. } => ("bool", "true | false".to_owned()),
        OptionKind::Slider { min, max, step, .. } => {
            let domain = if *step == 1 {
                format!("{min}..={max}")
            } else {
                format!("{min}..={max} step {step}")
            };
            ("slider", domain)
        }
        OptionKind::Choice { .. } => ("choice", option.choices().join(" | ")),
        OptionKind::Grouped { .. } => ("grouped", option.choices().join(" | ")),
        OptionKind::Base => ("base", String::new()),
        OptionKind::Nested { .. } => ("nested", String::new()),
    };
    FieldReport {
        id: option.id.to_string(),
        kind,
        width: option.own_width(),
        default: option.default_value(),
        domain,
        description: option.description.clone(),
    }
}

impl SeedReport {
    #[must_use]
    pub fn from_seed(seed: &Seed) -> Self {
        Self {
            seed: seed.to_string(),
            version: seed.version(),
            values: seed
                .values()
                .iter()
                .map(|(id, value)| ValueReport {
                    id: id.to_string(),
                    value: value.clone(),
                })
                .collect(),
            entropy_bits: seed.entropy().bits(),
            entropy: seed.entropy().to_string(),
        }
    }
}

/// Renders format reports as indented text.
#[must_use]
pub fn format_describe_pretty(reports: &[FormatReport]) -> String {
    let mut lines = Vec::new();
    for report in reports {
        let marker = if report.default { " (default)" } else { "" };
        lines.push(format!("version {}{marker}", report.version));
        lines.push(format!("  template: {}", report.template));
        lines.push(format!(
            "  bits: {} capacity = {} version + {} options + {} entropy",
            report.capacity_bits, report.version_bits, report.options_width, report.entropy_bits
        ));
        lines.push(format!("  layout hash: {}", report.layout_hash));
        if report.fields.is_empty() {
            lines.push("  options: none".to_owned());
            continue;
        }
        lines.push("  options:".to_owned());
        for field in &report.fields {
            let default = field
                .default
                .as_ref()
                .map_or_else(String::new, |value| format!(" default {value}"));
            lines.push(format!(
                "    {} [{} bits] {}: {}{default}",
                field.id, field.width, field.kind, field.domain
            ));
            if !field.description.is_empty() {
                lines.push(format!("      {}", field.description));
            }
        }
    }
    join_lines(&lines)
}

/// Renders a seed report as indented text.
#[must_use]
pub fn format_seed_pretty(report: &SeedReport) -> String {
    let mut lines = vec![
        format!("seed: {}", report.seed),
        format!("version: {}", report.version),
    ];
    lines.extend(
        report
            .values
            .iter()
            .map(|value| format!("  {} = {}", value.id, value.value)),
    );
    lines.push(format!(
        "entropy: {} bits {}",
        report.entropy_bits, report.entropy
    ));
    join_lines(&lines)
}

fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
