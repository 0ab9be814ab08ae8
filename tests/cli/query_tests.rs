//! Tests for the `query` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, string_field, TestWorkspace};

#[test]
fn test_query_search_json() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["query", &roster, "-s", "GUL", "-f", "json"]);

    let json = assert_valid_json(&output, "query");
    assert_json_type(&json, "directory_query");
    assert_eq!(json["total"], 1);
    assert_eq!(json["entity_total"], 3);
    assert_eq!(json["groups"][0]["label"], "Northern");
    assert_eq!(json["groups"][0]["nodes"][0]["name"], "Gulu");
    assert_eq!(json["groups"][0]["nodes"][0]["subRegion"], "Acholi");
    assert_eq!(json["scope"]["level"], "all");
}

#[test]
fn test_query_region_scope_groups_by_sub_region() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["q", &roster, "--scope", "northern", "-f", "json"]);

    let json = assert_valid_json(&output, "query --scope");
    assert_eq!(json["scope"]["level"], "region");
    assert_eq!(json["scope"]["region"], "Northern");
    assert_eq!(
        string_field(&json["groups"], "label"),
        vec!["Acholi", "Karamoja", "Lango", "West Nile"]
    );
}

#[test]
fn test_query_sub_region_scope() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "query",
        &roster,
        "--scope",
        "Northern",
        "--sub-region",
        "lango",
        "-f",
        "json",
    ]);

    let json = assert_valid_json(&output, "query --sub-region");
    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["label"], "Lango");
    assert_eq!(json["entity_total"], 1);
}

#[test]
fn test_query_count_sort_descending() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "query", &roster, "--scope", "Northern", "--sub-region", "Acholi", "--sort", "count",
        "--desc", "-f", "json",
    ]);

    let json = assert_valid_json(&output, "query --sort count --desc");
    assert_eq!(json["groups"][0]["nodes"][0]["name"], "Gulu");
    assert_eq!(json["groups"][0]["nodes"][0]["count"], 3);
}

#[test]
fn test_query_no_match_text() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["query", &roster, "--search", "zzz"]);
    assert_contains(&output, "DIRECTORY QUERY");
    assert_contains(&output, "No districts match.");
}

#[test]
fn test_query_text_lists_groups() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["query", &roster, "--search", "li"]);
    assert_contains(&output, "search: li");
    assert_contains(&output, "Lira");
}
