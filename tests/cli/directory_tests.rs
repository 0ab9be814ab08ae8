//! Tests for the `directory` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, TestWorkspace};

#[test]
fn test_directory_counts() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["directory", &roster, "-f", "json"]);

    let json = assert_valid_json(&output, "directory");
    assert_json_type(&json, "directory");
    assert_eq!(json["entities"], 8);
    assert_eq!(json["matched"], 6);
    assert_eq!(json["unmatched_count"], 2);
    assert!(json.get("unmatched").is_none());
}

#[test]
fn test_directory_nodes_include_empty_districts() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["directory", &roster, "-f", "json"]);
    let json = assert_valid_json(&output, "directory");

    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(json["districts"].as_u64().unwrap() as usize, nodes.len());
    assert!(nodes.iter().any(|n| n["count"] == 0));

    let gulu = nodes.iter().find(|n| n["name"] == "Gulu").unwrap();
    assert_eq!(gulu["count"], 3);
    assert_eq!(gulu["region"], "Northern");
    assert_eq!(gulu["subRegion"], "Acholi");
}

#[test]
fn test_directory_non_empty_filter() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["directory", &roster, "--non-empty", "-f", "json"]);
    let json = assert_valid_json(&output, "directory --non-empty");

    let names: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Gulu", "Kampala", "Lira", "Soroti"]);
}

#[test]
fn test_directory_show_unmatched() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["d", &roster, "--show-unmatched", "-f", "json"]);
    let json = assert_valid_json(&output, "directory --show-unmatched");

    let unmatched = json["unmatched"].as_array().unwrap();
    assert_eq!(unmatched.len(), 2);
    assert_eq!(unmatched[0]["id"], "p7");
    assert_eq!(unmatched[0]["locationKey"], "Gulu Town");
    assert_eq!(unmatched[1]["id"], "p8");
}

#[test]
fn test_directory_text_output() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["directory", &roster, "--non-empty", "--show-unmatched"]);
    assert_contains(&output, "DISTRICT DIRECTORY");
    assert_contains(&output, "8 (6 matched, 2 unmatched)");
    assert_contains(&output, "unmatched:");
    assert_contains(&output, "p7");
}

#[test]
fn test_directory_aliases_from_config() {
    let ws = TestWorkspace::new();
    ws.with_personnel();
    ws.with_config("[aliases]\n\"gulu town\" = \"Gulu\"\n");

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["directory", &roster, "-f", "json"]);
    let json = assert_valid_json(&output, "directory with aliases");
    assert_eq!(json["matched"], 7);
    assert_eq!(json["unmatched_count"], 1);
}

#[test]
fn test_directory_accepts_wrapped_roster() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "wrapped.json",
        r#"{"entities": [{"id": 1, "district": "Omoro", "name": "Opio"}]}"#,
    );

    let roster = ws.arg("wrapped.json");
    let output = ws.run_cli_success(&["directory", &roster, "--non-empty", "-f", "json"]);
    let json = assert_valid_json(&output, "wrapped roster");
    assert_eq!(json["matched"], 1);
    assert_eq!(json["nodes"][0]["name"], "Omoro");
}
