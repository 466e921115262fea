use flamestore::aggregator::build_tree;
use flamestore::convert::Profile;
use pretty_assertions::assert_eq;

const PROFILE_JSON: &str = r#"{
    "sampleType": [{ "type": 1, "unit": 2 }],
    "samples": [
        { "locationId": [3, 5, 2, 1], "value": [4] },
        { "locationId": [2, 1], "value": [6] }
    ],
    "locations": [
        { "id": 3, "line": [{ "functionId": 30 }] },
        { "id": 1, "line": [{ "functionId": 10 }] },
        { "id": 2, "line": [{ "functionId": 20 }] }
    ],
    "functions": [
        { "id": 20, "name": 4 },
        { "id": 10, "name": 3 },
        { "id": 30, "name": 5 }
    ],
    "stringTable": ["", "cpu", "nanoseconds", "main", "handle", "parse"]
}"#;

fn resolve(profile: &Profile) -> Vec<(String, i64)> {
    let mut out = Vec::new();
    profile.get("cpu", |name, value| {
        out.push((String::from_utf8_lossy(name).into_owned(), value));
    });
    out
}

#[test]
fn test_parse_profile_json_aliases() {
    let profile = Profile::from_json(PROFILE_JSON.as_bytes()).unwrap();

    assert_eq!(profile.sample.len(), 2);
    assert_eq!(profile.location.len(), 3);
    assert_eq!(profile.function.len(), 3);

    // tables come back sorted by id
    let location_ids: Vec<u64> = profile.location.iter().map(|l| l.id).collect();
    assert_eq!(location_ids, vec![1, 2, 3]);
    let function_ids: Vec<u64> = profile.function.iter().map(|f| f.id).collect();
    assert_eq!(function_ids, vec![10, 20, 30]);
}

#[test]
fn test_missing_location_is_skipped() {
    let profile = Profile::from_json(PROFILE_JSON.as_bytes()).unwrap();

    // location 5 does not exist; its neighbours still resolve
    assert_eq!(
        resolve(&profile),
        vec![
            ("main;handle;parse".to_string(), 4),
            ("main;handle".to_string(), 6),
        ]
    );
}

#[test]
fn test_unresolvable_function_name_is_skipped() {
    let mut profile = Profile::from_json(PROFILE_JSON.as_bytes()).unwrap();
    profile.function[1].name = 99;

    assert_eq!(
        resolve(&profile),
        vec![("main;parse".to_string(), 4), ("main".to_string(), 6)]
    );
}

#[test]
fn test_build_tree_from_profile() {
    let profile = Profile::from_json(PROFILE_JSON.as_bytes()).unwrap();
    let tree = build_tree(&profile, "cpu");

    assert_eq!(tree.samples(), 10);
    assert_eq!(tree.to_string(), "\"main;handle\" 6\n\"main;handle;parse\" 4\n");
    assert_eq!(profile.unit_for("cpu"), Some("nanoseconds"));
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(Profile::from_json(b"{ not json").is_err());
}

#[test]
fn test_read_missing_file_is_an_error() {
    assert!(Profile::read("/definitely/not/here.json").is_err());
}
