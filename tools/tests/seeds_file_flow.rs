use codec::CodecError;
use seedcode_tools::{parse_assignments, FormatsFile, SeedList, SeedReport};

const FORMATS: &str = r#"{
    "formats": [
        {
            "version": 0,
            "template": "XXXXX-XXXXX-XXXXX",
            "options": [
                {"id": "hardcore", "kind": "bool", "default": false}
            ]
        },
        {
            "version": 1,
            "template": "XXXXX-XXXXX-XXXXX",
            "options": [
                {"id": "hardcore", "kind": "bool", "default": false},
                {"id": "mode", "kind": "grouped", "default": "classic", "groups": [
                    {"name": "classic"},
                    {"name": "chaos", "options": [
                        {"id": "curse", "kind": "choice", "choices": ["weak", "strong"], "default": "weak"}
                    ]}
                ]}
            ]
        }
    ]
}"#;

#[test]
fn generate_save_and_reload() {
    let registry = FormatsFile::from_json(FORMATS)
        .unwrap()
        .into_registry()
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let list = SeedList::new(dir.path().join("mod").join("seeds.txt"));

    let format = registry.format(None).unwrap();
    let values = parse_assignments(format, &["mode=chaos", "curse=strong"]).unwrap();
    let seed = registry.generate(None, &values).unwrap();
    assert!(list.append(seed.as_str(), Some("chaos run")).unwrap());

    let old = registry.generate(Some(0), &Default::default()).unwrap();
    assert!(list.append(old.as_str(), None).unwrap());

    let entries = list.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label.as_deref(), Some("chaos run"));

    let reloaded = registry.decode(&entries[0].seed).unwrap();
    assert_eq!(reloaded, seed);
    let report = SeedReport::from_seed(&reloaded);
    let curse = report.values.iter().find(|v| v.id == "curse").unwrap();
    assert_eq!(curse.value.to_string(), "strong");

    let reloaded_old = registry.decode(&entries[1].seed).unwrap();
    assert_eq!(reloaded_old.version(), 0);
    assert!(!reloaded_old.contains("mode"));
}

#[test]
fn invalid_entries_are_reported_on_decode() {
    let registry = FormatsFile::from_json(FORMATS)
        .unwrap()
        .into_registry()
        .unwrap();
    let entries = SeedList::parse("not-a-seed\nAAAAA-AAAAA\n");
    for entry in entries {
        let err = registry.decode(&entry.seed).unwrap_err();
        assert!(matches!(err, CodecError::Format(_)));
        assert_eq!(err.user_message(), "Invalid seed");
    }
}
