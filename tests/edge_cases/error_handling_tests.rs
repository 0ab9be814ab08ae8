//! Error Handling and Edge Case Tests
//!
//! Exit codes and messages for bad inputs, plus degenerate rosters that
//! must still produce a directory.

use crate::common::{assert_contains, assert_valid_json, TestWorkspace};

// ============================================================================
// EXIT CODES
// ============================================================================

#[test]
fn test_missing_roster_file() {
    let ws = TestWorkspace::new();
    let missing = ws.arg("nope.json");

    let (code, stderr) = ws.run_cli_failure(&["directory", &missing]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "File not found");
}

#[test]
fn test_malformed_roster() {
    let ws = TestWorkspace::new();
    ws.add_file("bad.json", "{ not json");

    let roster = ws.arg("bad.json");
    let (code, stderr) = ws.run_cli_failure(&["directory", &roster]);
    assert_eq!(code, 2);
    assert_contains(&stderr, "Invalid input data");
}

#[test]
fn test_roster_with_non_object_entry() {
    let ws = TestWorkspace::new();
    ws.add_file("bad.json", r#"[{"id": "1", "locationKey": "Gulu"}, 42]"#);

    let roster = ws.arg("bad.json");
    let (code, stderr) = ws.run_cli_failure(&["directory", &roster]);
    assert_eq!(code, 2);
    assert_contains(&stderr, "entity #1");
}

#[test]
fn test_catalog_with_duplicate_district() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "catalog.json",
        r#"{ "North": { "A": ["Gulu"], "B": ["gulu "] } }"#,
    );

    let catalog = ws.arg("catalog.json");
    let (code, stderr) = ws.run_cli_failure(&["catalog", "--check", "--catalog", &catalog]);
    assert_eq!(code, 3);
    assert_contains(&stderr, "Invalid catalog");
}

#[test]
fn test_catalog_with_region_listed_twice() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "catalog.json",
        r#"{ "North": { "A": ["Gulu"] }, "North": { "B": ["Lira"] } }"#,
    );

    let catalog = ws.arg("catalog.json");
    let (code, stderr) = ws.run_cli_failure(&["catalog", "--catalog", &catalog]);
    assert_eq!(code, 3);
    assert_contains(&stderr, "listed more than once");
}

#[test]
fn test_malformed_config() {
    let ws = TestWorkspace::new();
    ws.with_config("[layout]\ncompact_breakpoint = \"wide\"\n");

    let (code, stderr) = ws.run_cli_failure(&["catalog"]);
    assert_eq!(code, 4);
    assert_contains(&stderr, "Configuration error");
}

#[test]
fn test_invalid_log_level_in_config() {
    let ws = TestWorkspace::new();
    ws.with_config("[logging]\nlevel = \"chatty\"\n");

    let (code, stderr) = ws.run_cli_failure(&["catalog"]);
    assert_eq!(code, 4);
    assert_contains(&stderr, "[logging] level 'chatty'");
}

#[test]
fn test_unknown_district() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let (code, stderr) = ws.run_cli_failure(&["roster", &roster, "--district", "Atlantis"]);
    assert_eq!(code, 5);
    assert_contains(&stderr, "Unknown district: Atlantis");
}

#[test]
fn test_unknown_region_scope() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let (code, _) = ws.run_cli_failure(&["query", &roster, "--scope", "Atlantis"]);
    assert_eq!(code, 5);

    let (code, _) = ws.run_cli_failure(&["catalog", "--region", "Atlantis"]);
    assert_eq!(code, 5);
}

#[test]
fn test_sub_region_without_region_scope() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let (code, stderr) = ws.run_cli_failure(&["query", &roster, "--sub-region", "Acholi"]);
    assert_eq!(code, 2);
    assert_contains(&stderr, "--sub-region");
}

#[test]
fn test_roster_requires_district_flag() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let (code, _) = ws.run_cli_failure(&["roster", &roster]);
    assert_eq!(code, 2);
}

// ============================================================================
// DEGENERATE ROSTERS
// ============================================================================

#[test]
fn test_empty_roster() {
    let ws = TestWorkspace::new();
    ws.add_file("empty.json", "[]");

    let roster = ws.arg("empty.json");
    let output = ws.run_cli_success(&["directory", &roster, "-f", "json"]);
    let json = assert_valid_json(&output, "empty roster");
    assert_eq!(json["entities"], 0);
    assert_eq!(json["unmatched_count"], 0);
}

#[test]
fn test_roster_without_ids_gets_positional_ids() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "noids.json",
        r#"[{"locationKey": "Gulu", "name": "First"}, {"locationKey": "Gulu", "name": "Second"}]"#,
    );

    let roster = ws.arg("noids.json");
    let output = ws.run_cli_success(&[
        "show", &roster, "--district", "Gulu", "--id", "1", "-f", "json",
    ]);
    let json = assert_valid_json(&output, "positional ids");
    assert_eq!(json["record"]["name"], "Second");
}

#[test]
fn test_null_and_numeric_location_keys() {
    let ws = TestWorkspace::new();
    ws.add_file(
        "odd.json",
        r#"[{"id": "1", "locationKey": null}, {"id": "2", "locationKey": 42}]"#,
    );

    let roster = ws.arg("odd.json");
    let output = ws.run_cli_success(&["directory", &roster, "--show-unmatched", "-f", "json"]);
    let json = assert_valid_json(&output, "odd location keys");
    assert_eq!(json["matched"], 0);
    assert_eq!(json["unmatched"][1]["locationKey"], "42");
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let ws = TestWorkspace::new();
    ws.with_config("");
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws
        .run_cli(&["directory", &roster, "-v", "-f", "json"])
        .expect("Failed to run CLI");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_valid_json(&stdout, "verbose stdout stays clean");
    assert!(!output.stderr.is_empty());
}
