use codec::{decode_seed, encode_seed, CodecError, Entropy, FormatRegistry, OptionValues};
use proptest::prelude::*;
use schema::{OptionGroup, OptionValue, SeedFormat, SeedOption};
use wire::{Alphabet, Template};

fn rich_format() -> SeedFormat {
    SeedFormat::builder(3, Template::parse("XXXXX-XXXXX-XXXXX-XXXXX").unwrap())
        .option(SeedOption::bool("hardcore", false))
        .option(SeedOption::stepped_slider("gold", -50, 200, 25, 0))
        .option(SeedOption::spinner(
            "difficulty",
            ["easy", "normal", "hard"],
            "normal",
        ))
        .option(SeedOption::grouped(
            "mode",
            vec![
                OptionGroup::new("classic", vec![SeedOption::bool("permadeath", false)]),
                OptionGroup::new(
                    "chaos",
                    vec![SeedOption::dropdown(
                        "curse",
                        ["none", "weak", "strong", "doom", "void"],
                        "none",
                    )],
                ),
            ],
            "classic",
        ))
        .option(SeedOption::nested(
            "enemies",
            Some(SeedOption::bool("randomize_enemies", true)),
            vec![SeedOption::slider("enemy_level", 1, 12, 1)],
        ))
        .build()
        .unwrap()
}

/// Picks an in-domain value for every field from arbitrary raw bits.
fn values_from_raw(format: &SeedFormat, raw: &[u64]) -> OptionValues {
    format
        .fields()
        .into_iter()
        .zip(raw.iter().copied())
        .map(|(field, bits)| (field.id.clone(), field.bits_to_value(bits).unwrap()))
        .collect()
}

fn field_count() -> usize {
    rich_format().fields().len()
}

proptest! {
    #[test]
    fn prop_roundtrip(
        raw in prop::collection::vec(any::<u64>(), field_count()),
        entropy in any::<u128>(),
    ) {
        let format = rich_format();
        let values = values_from_raw(&format, &raw);
        let entropy = Entropy::from_u128(format.entropy_bits(), entropy);

        let string = encode_seed(&format, &values, &entropy).unwrap();
        prop_assert_eq!(string.chars().count(), format.template().len());

        let registry = FormatRegistry::new([format]).unwrap();
        let seed = decode_seed(&registry, &string).unwrap();
        prop_assert_eq!(seed.version(), 3);
        prop_assert_eq!(seed.to_values(), values);
        prop_assert_eq!(seed.entropy(), &entropy);
        prop_assert_eq!(seed.as_str(), string.as_str());
    }

    #[test]
    fn prop_decode_is_total(symbols in prop::collection::vec(0u8..32, 20)) {
        let format = rich_format();
        let alphabet = Alphabet::base32();
        let string = format.template().render(&symbols, &alphabet).unwrap();
        let version = u32::from(symbols[0]);
        let registry = FormatRegistry::new([format]).unwrap();

        match decode_seed(&registry, &string) {
            Ok(seed) => {
                prop_assert_eq!(version, 3);
                prop_assert_eq!(seed.values().len(), field_count());
                // Decoded values are in-domain, so they re-encode to a seed
                // that decodes to the same values.
                let fmt = registry.default_format();
                let again = encode_seed(fmt, &seed.to_values(), seed.entropy()).unwrap();
                prop_assert_eq!(decode_seed(&registry, &again).unwrap().to_values(), seed.to_values());
            }
            Err(err) => prop_assert_eq!(err, CodecError::UnsupportedVersion { version }),
        }
    }

    #[test]
    fn prop_changing_one_option_leaves_others(
        raw in prop::collection::vec(any::<u64>(), field_count()),
        which in 0usize..8,
        bump in 1u64..16,
        entropy in any::<u128>(),
    ) {
        let format = rich_format();
        let registry = FormatRegistry::new([format.clone()]).unwrap();
        let entropy = Entropy::from_u128(format.entropy_bits(), entropy);
        let which = which % field_count();

        let before = values_from_raw(&format, &raw);
        let mut changed_raw = raw.clone();
        changed_raw[which] = changed_raw[which].wrapping_add(bump);
        let after = values_from_raw(&format, &changed_raw);

        let a = decode_seed(&registry, &encode_seed(&format, &before, &entropy).unwrap()).unwrap();
        let b = decode_seed(&registry, &encode_seed(&format, &after, &entropy).unwrap()).unwrap();

        let changed_id = format.fields()[which].id.clone();
        for ((id, va), (_, vb)) in a.values().iter().zip(b.values()) {
            if *id != changed_id {
                prop_assert_eq!(va, vb);
            }
        }
        prop_assert_eq!(a.entropy(), b.entropy());
    }

    #[test]
    fn prop_capacity_invariant(placeholders in 1usize..8, version_bits in 1u8..12, max in 0i64..100_000) {
        let template = Template::parse(&"X".repeat(placeholders)).unwrap();
        let option = SeedOption::slider("value", 0, max, 0);
        let required = usize::from(version_bits) + option.width();
        let built = SeedFormat::builder(0, template)
            .version_bits(version_bits)
            .option(option)
            .build();
        prop_assert_eq!(built.is_ok(), required <= placeholders * 5);
    }
}

#[test]
fn invalid_characters_are_never_accepted() {
    let registry = FormatRegistry::new([rich_format()]).unwrap();
    for bad in ["0", "1", "8", "9", "!", "é"] {
        let input = format!("{bad}AAAA-AAAAA-AAAAA-AAAAA");
        assert!(matches!(
            decode_seed(&registry, &input),
            Err(CodecError::Format(_))
        ));
    }
}

#[test]
fn rich_format_layout() {
    let format = rich_format();
    // 1 + 4 (11 gold steps) + 2 + 1 + 1 + 3 + 1 + 4
    assert_eq!(format.options_width(), 17);
    assert_eq!(format.entropy_bits(), 100 - 5 - 17);
    let ids: Vec<&str> = format.fields().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "hardcore",
            "gold",
            "difficulty",
            "mode",
            "permadeath",
            "curse",
            "randomize_enemies",
            "enemy_level"
        ]
    );
    assert_eq!(
        rich_format().option("curse").unwrap().default_value(),
        Some(OptionValue::from("none"))
    );
}
