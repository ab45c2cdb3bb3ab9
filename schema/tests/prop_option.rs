use proptest::prelude::*;
use schema::{OptionValue, SeedOption};

fn slider_strategy() -> impl Strategy<Value = SeedOption> {
    (-1_000i64..1_000, 0i64..200, 1i64..10).prop_map(|(min, steps, step)| {
        let max = min + steps * step;
        SeedOption::stepped_slider("s", min, max, step, min)
    })
}

fn choice_strategy() -> impl Strategy<Value = SeedOption> {
    (1usize..40).prop_map(|len| {
        let choices: Vec<String> = (0..len).map(|i| format!("c{i}")).collect();
        SeedOption::dropdown("c", choices, "c0")
    })
}

fn option_strategy() -> impl Strategy<Value = SeedOption> {
    prop_oneof![
        any::<bool>().prop_map(|default| SeedOption::bool("b", default)),
        slider_strategy(),
        choice_strategy(),
    ]
}

proptest! {
    #[test]
    fn prop_decode_is_total(option in option_strategy(), raw in any::<u64>()) {
        prop_assert!(option.validate().is_ok());
        let masked = if option.width() == 0 { 0 } else { raw >> (64 - option.width()) };
        let value = option.bits_to_value(masked);
        prop_assert!(value.is_some());
        let value = value.unwrap();
        // Every decoded value is inside the domain and re-encodes to a field
        // that fits the option's width.
        let bits = option.value_to_bits(&value);
        prop_assert!(bits.is_ok());
        let bits = bits.unwrap();
        prop_assert!(option.width() == 64 || bits < (1u64 << option.width()));
    }

    #[test]
    fn prop_in_domain_values_roundtrip(option in option_strategy(), pick in any::<u64>()) {
        let in_domain = option.bits_to_value(pick).unwrap();
        let bits = option.value_to_bits(&in_domain).unwrap();
        prop_assert_eq!(option.bits_to_value(bits), Some(in_domain));
    }

    #[test]
    fn prop_slider_out_of_range_rejected(option in slider_strategy(), delta in 1i64..100) {
        let range = option.range().unwrap();
        let above = OptionValue::Int(range.end() + delta);
        let below = OptionValue::Int(range.start() - delta);
        prop_assert!(option.value_to_bits(&above).is_err());
        prop_assert!(option.value_to_bits(&below).is_err());
    }
}
