#![no_main]

use codec::{decode_seed, encode_seed, FormatRegistry};
use libfuzzer_sys::fuzz_target;
use schema::{OptionGroup, SeedFormat, SeedOption};
use wire::Template;

fn registry() -> Option<FormatRegistry> {
    let v0 = SeedFormat::builder(0, Template::parse("XXXX-XXXX").ok()?)
        .option(SeedOption::bool("hardcore", false))
        .build()
        .ok()?;
    let v1 = SeedFormat::builder(1, Template::parse("XXXXX-XXXXX-XXXXX").ok()?)
        .option(SeedOption::bool("hardcore", false))
        .option(SeedOption::stepped_slider("gold", -50, 250, 25, 0))
        .option(SeedOption::spinner("size", ["small", "medium", "large"], "small"))
        .option(SeedOption::grouped(
            "mode",
            vec![
                OptionGroup::new("classic", Vec::new()),
                OptionGroup::new(
                    "chaos",
                    vec![SeedOption::dropdown("curse", ["weak", "strong"], "weak")],
                ),
            ],
            "classic",
        ))
        .build()
        .ok()?;
    FormatRegistry::new([v0, v1]).ok()
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Some(registry) = registry() else {
        return;
    };

    // Every accepted string re-encodes to its canonical form.
    if let Ok(seed) = decode_seed(&registry, input) {
        let format = registry.get(seed.version()).expect("decoded version is registered");
        let again = encode_seed(format, &seed.to_values(), seed.entropy()).expect("decoded values encode");
        assert_eq!(again, seed.as_str());
        assert!(again.eq_ignore_ascii_case(input));
    }
});
