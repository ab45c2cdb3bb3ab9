//! Deterministic layout hashing.

use blake3::Hasher;
use wire::{Template, Token};

use crate::{OptionKind, SeedFormat, SeedOption};

/// Computes a deterministic fingerprint of everything that fixes a format's
/// bit layout and decoded values.
///
/// The template is hashed as its token sequence, so placeholder case does not
/// matter. Descriptions and choice styles are excluded; they never affect
/// encoded seeds.
#[must_use]
pub fn layout_hash(format: &SeedFormat) -> u64 {
    let mut hasher = Hasher::new();
    write_u32(&mut hasher, format.version());
    write_u8(&mut hasher, format.version_bits());
    write_str(&mut hasher, &format.alphabet().as_string());
    write_template(&mut hasher, format.template());
    write_u32(&mut hasher, format.options().len() as u32);
    for option in format.options() {
        write_option(&mut hasher, option);
    }

    let hash = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(prefix)
}

fn write_option(hasher: &mut Hasher, option: &SeedOption) {
    write_str(hasher, option.id.as_str());
    match &option.kind {
        OptionKind::Base => {
            write_u8(hasher, 0);
        }
        OptionKind::Bool { default } => {
            write_u8(hasher, 1);
            write_u8(hasher, u8::from(*default));
        }
        OptionKind::Slider {
            min,
            max,
            step,
            default,
        } => {
            write_u8(hasher, 2);
            write_i64(hasher, *min);
            write_i64(hasher, *max);
            write_i64(hasher, *step);
            write_i64(hasher, *default);
        }
        OptionKind::Choice { choices, default, .. } => {
            write_u8(hasher, 3);
            write_u32(hasher, choices.len() as u32);
            for choice in choices {
                write_str(hasher, choice);
            }
            write_str(hasher, default);
        }
        OptionKind::Grouped { groups, default } => {
            write_u8(hasher, 4);
            write_u32(hasher, groups.len() as u32);
            for group in groups {
                write_str(hasher, &group.name);
                write_u32(hasher, group.options.len() as u32);
                for sub in &group.options {
                    write_option(hasher, sub);
                }
            }
            write_str(hasher, default);
        }
        OptionKind::Nested { parent, children } => {
            write_u8(hasher, 5);
            match parent {
                Some(parent) => {
                    write_u8(hasher, 1);
                    write_option(hasher, parent);
                }
                None => write_u8(hasher, 0),
            }
            write_u32(hasher, children.len() as u32);
            for child in children {
                write_option(hasher, child);
            }
        }
    }
}

fn write_template(hasher: &mut Hasher, template: &Template) {
    write_u32(hasher, template.len() as u32);
    for token in template.tokens() {
        match *token {
            Token::Placeholder => write_u8(hasher, 0),
            Token::Literal(ch) => {
                write_u8(hasher, 1);
                write_u32(hasher, u32::from(ch));
            }
        }
    }
}

fn write_u8(hasher: &mut Hasher, value: u8) {
    hasher.update(&[value]);
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}

fn write_i64(hasher: &mut Hasher, value: i64) {
    hasher.update(&value.to_le_bytes());
}

fn write_str(hasher: &mut Hasher, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}
