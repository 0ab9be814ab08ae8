//! Tests for the `show` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, TestWorkspace};

#[test]
fn test_show_wide_layout() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "show", &roster, "--district", "Gulu", "--id", "p2", "-f", "json",
    ]);

    let json = assert_valid_json(&output, "show");
    assert_json_type(&json, "selection");
    assert_eq!(json["selection"]["selectedId"], "p2");
    assert_eq!(json["record"]["name"], "alice Aciro");
    assert_eq!(json["layout"], "wide");
    assert_eq!(json["panes"]["master"], true);
    assert_eq!(json["panes"]["detail"], true);
}

#[test]
fn test_show_compact_layout_swaps_to_detail() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "show", &roster, "--district", "Gulu", "--id", "p1", "--width", "375", "-f", "json",
    ]);

    let json = assert_valid_json(&output, "show --width");
    assert_eq!(json["layout"], "compact");
    assert_eq!(json["panes"]["master"], false);
    assert_eq!(json["panes"]["detail"], true);
}

#[test]
fn test_show_id_outside_district_selects_nothing() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "show", &roster, "--district", "Gulu", "--id", "p4", "--width", "375", "-f", "json",
    ]);

    let json = assert_valid_json(&output, "show unknown id");
    assert!(json["selection"]["selectedId"].is_null());
    assert!(json["record"].is_null());
    assert_eq!(json["panes"]["master"], true);
    assert_eq!(json["panes"]["detail"], false);
}

#[test]
fn test_show_breakpoint_from_config() {
    let ws = TestWorkspace::new();
    ws.with_personnel();
    ws.with_config("[layout]\ncompact_breakpoint = 1440\n");

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&[
        "show", &roster, "--district", "Gulu", "--id", "p1", "-f", "json",
    ]);

    let json = assert_valid_json(&output, "show with breakpoint");
    assert_eq!(json["layout"], "compact");
}

#[test]
fn test_show_text_record() {
    let ws = TestWorkspace::new();
    ws.with_personnel();

    let roster = ws.arg("roster.json");
    let output = ws.run_cli_success(&["show", &roster, "--district", "Soroti", "--id", "p5"]);
    assert_contains(&output, "SELECTION");
    assert_contains(&output, "id: p5");
    assert_contains(&output, "role: Nurse");
}
