use flamestore::commands::{
    execute_decode, execute_ingest, parse_ratio, print_tree, validate_args, DecodeArgs, IngestArgs,
    TreeArgs,
};
use flamestore::flamebearer::FlamebearerResponse;
use flamestore::output::read_json;
use num_rational::Ratio;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const PROFILE_JSON: &str = r#"{
    "sampleType": [
        { "type": 1, "unit": 2 },
        { "type": 3, "unit": 4 }
    ],
    "sample": [
        { "locationId": [2, 1], "value": [5, 500] },
        { "locationId": [3, 1], "value": [3, 300] }
    ],
    "location": [
        { "id": 1, "line": [{ "functionId": 1 }] },
        { "id": 2, "line": [{ "functionId": 2 }] },
        { "id": 3, "line": [{ "functionId": 3 }] }
    ],
    "function": [
        { "id": 1, "name": 5 },
        { "id": 2, "name": 6 },
        { "id": 3, "name": 7 }
    ],
    "stringTable": ["", "samples", "count", "cpu", "nanoseconds", "main", "a", "b"]
}"#;

fn write_profile(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, PROFILE_JSON).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let dir = tempdir().unwrap();
    let args = IngestArgs {
        profiles: vec![write_profile(dir.path(), "p.json")],
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_top_paths_too_large() {
    let dir = tempdir().unwrap();
    let args = IngestArgs {
        profiles: vec![write_profile(dir.path(), "p.json")],
        top_paths: 5000,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_ingest_merges_profiles() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out/flamebearer.json");
    let tree_output = dir.path().join("out/tree.json");
    let args = IngestArgs {
        profiles: vec![
            write_profile(dir.path(), "one.json"),
            write_profile(dir.path(), "two.json"),
        ],
        output_json: output.clone(),
        output_tree: Some(tree_output.clone()),
        ..Default::default()
    };

    let tree = execute_ingest(args).unwrap();
    assert_eq!(tree.samples(), 16);
    assert!(tree_output.is_file());

    let response: FlamebearerResponse = read_json(&output).unwrap();
    assert_eq!(response.version.as_deref(), Some("1.0.0"));
    assert!(response.generated_at.is_some());
    assert_eq!(response.metadata.units, "count");
    assert_eq!(response.flamebearer.num_ticks, 16);
    assert_eq!(response.flamebearer.names, vec!["total", "main", "a", "b"]);
    assert_eq!(
        response.flamebearer.levels,
        vec![
            vec![0, 16, 0, 0],
            vec![0, 16, 0, 1],
            vec![0, 10, 10, 2, 0, 6, 6, 3],
        ]
    );
}

#[test]
fn test_ingest_selects_and_scales_column() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("flamebearer.json");
    let args = IngestArgs {
        profiles: vec![write_profile(dir.path(), "p.json")],
        sample_type: "cpu".to_string(),
        scale: Some(Ratio::new(1, 100)),
        spy_name: "pyspy".to_string(),
        output_json: output.clone(),
        ..Default::default()
    };

    let tree = execute_ingest(args).unwrap();
    assert_eq!(tree.samples(), 8);

    let response: FlamebearerResponse = read_json(&output).unwrap();
    assert_eq!(response.metadata.units, "nanoseconds");
    assert_eq!(response.metadata.spy_name, "pyspy");
}

#[test]
fn test_ingest_then_decode() {
    let dir = tempdir().unwrap();
    let encoded = dir.path().join("flamebearer.json");
    let decoded_path = dir.path().join("decoded.json");

    execute_ingest(IngestArgs {
        profiles: vec![write_profile(dir.path(), "p.json")],
        output_json: encoded.clone(),
        ..Default::default()
    })
    .unwrap();

    let decoded = execute_decode(DecodeArgs {
        input: encoded,
        output: Some(decoded_path.clone()),
    })
    .unwrap();

    let row = &decoded.flamebearer.levels[2];
    assert_eq!(row.len(), 2);
    assert_eq!((row[0].name.as_str(), row[0].offset), ("a", 0));
    assert_eq!((row[1].name.as_str(), row[1].offset), ("b", 5));
    assert!(decoded_path.is_file());
}

#[test]
fn test_decode_missing_file() {
    let result = execute_decode(DecodeArgs {
        input: PathBuf::from("/definitely/not/here.json"),
        output: None,
    });
    assert!(result.is_err());
}

#[test]
fn test_print_tree_to_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("tree.txt");

    print_tree(TreeArgs {
        profile: write_profile(dir.path(), "p.json"),
        sample_type: String::new(),
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "\"main;a\" 5\n\"main;b\" 3\n"
    );
}

#[test]
fn test_parse_ratio_rejects_garbage() {
    assert!(parse_ratio("0.5").is_err());
    assert_eq!(parse_ratio(" 1/4 ").unwrap(), Ratio::new(1, 4));
}
