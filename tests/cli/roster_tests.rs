//! Tests for the `roster` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, string_field, TestWorkspace};

#[test]
fn test_roster_default_sort_by_name() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["roster", &roster, "--district", "gulu", "-f", "json"]);

    let json = assert_valid_json(&output, "roster");
    assert_json_type(&json, "roster");
    assert_eq!(json["district"], "Gulu");
    assert_eq!(json["subRegion"], "Acholi");
    assert_eq!(json["count"], 3);
    assert_eq!(json["sort"]["key"], "name");
    assert_eq!(json["sort"]["direction"], "asc");
    assert_eq!(string_field(&json["entities"], "id"), vec!["p2", "p1", "p3"]);
}

#[test]
fn test_roster_descending() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["r", &roster, "--district", "Gulu", "--desc", "-f", "json"]);

    let json = assert_valid_json(&output, "roster --desc");
    assert_eq!(string_field(&json["entities"], "id"), vec!["p3", "p1", "p2"]);
}

#[test]
fn test_roster_search_by_role() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "roster", &roster, "--district", "Gulu", "-s", "officer", "-f", "json",
    ]);

    let json = assert_valid_json(&output, "roster --search");
    assert_eq!(json["shown"], 1);
    assert_eq!(json["entities"][0]["name"], "Charles Opio");
}

#[test]
fn test_roster_default_sort_from_config() {
    let ws = TestWorkspace::new();
    ws.with_personnel();
    ws.with_config("[roster]\ndefault_sort = \"subLocation\"\n");

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["roster", &roster, "--district", "Gulu", "-f", "json"]);

    let json = assert_valid_json(&output, "roster with config sort");
    assert_eq!(json["sort"]["key"], "subLocation");
    assert_eq!(
        string_field(&json["entities"], "subLocation"),
        vec!["Awach", "Bungatira", "Paicho"]
    );
}

#[test]
fn test_roster_text_columns() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["roster", &roster, "--district", "Lira"]);
    assert_contains(&output, "ROSTER: LIRA");
    assert_contains(&output, "shown: 1 of 1");
    assert_contains(&output, "p4\tDina Apio\tVHT\tAdekokwok");
}

#[test]
fn test_roster_empty_district() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["roster", &roster, "--district", "Moroto"]);
    assert_contains(&output, "shown: 0 of 0");
    assert_contains(&output, "No records match.");
}
