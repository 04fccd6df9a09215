//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against the bundled fixture and verify
//! outputs. Each test gets its own config directory.

mod common;

use common::*;

const MONDAY_MORNING: &str = "2025-02-10T10:00";

fn show(dir: &std::path::Path, extra: &[&str]) -> String {
    let fixture = fixture();
    let mut args = vec!["show", "--source", fixture.to_str().unwrap(), "--at", MONDAY_MORNING];
    args.extend_from_slice(extra);
    run_cli_success(dir, &args)
}

#[test]
fn test_show_full_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let out = show(dir.path(), &[]);

    assert_contains(&out, "Today's Student Hub");
    assert_contains(&out, "Monday, February 10, 2025");
    assert_contains(&out, "[Due Today] CS 101");
    assert_contains(&out, "[Due Tomorrow] HIST 110");
    // MATH 201 started at 09:00 so CS 101 is next.
    assert_contains(&out, "  CS 101  [Next Class]\n    1:00 PM - 2:15 PM");
    assert!(!out.contains("MATH 201"));
    assert_contains(&out, "[gym] Gym: Open (Until 5:00 PM)");
    assert_contains(&out, "[tutoring] Tutoring Center: Closed (Opens 12:00 PM)");
}

#[test]
fn test_show_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = show(dir.path(), &["--json"]);
    let json: serde_json::Value = parse_json(&out);

    assert_eq!(json["nextAssignment"]["id"], 1);
    assert_eq!(json["dueTomorrow"][0]["id"], 2);
    assert_eq!(json["todayClasses"].as_array().unwrap().len(), 2);
    assert_eq!(json["remainingClasses"].as_array().unwrap().len(), 1);
    assert_eq!(json["nextClass"]["course"], "CS 101");
    assert_eq!(json["services"][1]["isOpen"], true);
    assert_eq!(json["moment"]["minuteOfDay"], 600);
}

#[test]
fn test_show_focus() {
    let dir = tempfile::tempdir().unwrap();
    let out = show(dir.path(), &["--focus"]);

    assert_contains(&out, "Focus Mode");
    assert_contains(&out, "CS 101  [Due Today]");
    assert_contains(&out, "== Next Class ==");
    assert!(!out.contains("Campus Services"));
}

#[test]
fn test_show_focus_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = show(dir.path(), &["--focus", "--json"]);
    let json: serde_json::Value = parse_json(&out);
    assert_eq!(json["nextAssignment"]["urgency"], "dueToday");
    assert_eq!(json["nextClass"]["id"], 11);
}

#[test]
fn test_show_trace_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (stdout, stderr, code) = run_cli(
        dir.path(),
        &["show", "--source", fixture.to_str().unwrap(), "--at", MONDAY_MORNING, "--trace"],
    );
    assert_eq!(code, 0);
    assert_contains(&stdout, "Today's Student Hub");
    assert_contains(&stderr, "assignments_filtered");
    assert!(!stdout.contains("assignments_filtered"));
}

#[test]
fn test_show_missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let (_, stderr, code) = run_cli_failure(
        dir.path(),
        &["show", "--source", missing.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert_contains(&stderr, "Error loading student data");
    assert!(!stderr.contains("snapshot load failed"));
}

#[test]
fn test_show_rejects_bad_time() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (_, stderr, _) = run_cli_failure(
        dir.path(),
        &["show", "--source", fixture.to_str().unwrap(), "--at", "soon"],
    );
    assert_contains(&stderr, "error:");
}

#[test]
fn test_config_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "refresh.interval_secs"]).trim(),
        "60"
    );

    let echoed = run_cli_success(dir.path(), &["config", "set", "display.focus_mode", "true"]);
    assert_eq!(echoed.trim(), "display.focus_mode = true");
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "display.focus_mode"]).trim(),
        "true"
    );

    let listed: serde_json::Value = parse_json(&run_cli_success(dir.path(), &["config", "list"]));
    assert_eq!(listed["display"]["focus_mode"], true);

    run_cli_success(dir.path(), &["config", "reset"]);
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "display.focus_mode"]).trim(),
        "false"
    );
}

#[test]
fn test_config_path_honours_override_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["config", "path"]);
    assert_eq!(
        std::path::PathBuf::from(out.trim()),
        dir.path().join("config.toml")
    );
}

#[test]
fn test_config_rejects_unknown_key_and_zero_interval() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_failure(dir.path(), &["config", "set", "display.colour", "blue"]);
    let (_, stderr, code) = run_cli_failure(dir.path(), &["config", "get", "display.colour"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "error: unknown config key: display.colour");
    run_cli_failure(dir.path(), &["config", "set", "refresh.interval_secs", "0"]);
    run_cli_failure(
        dir.path(),
        &["config", "set", "refresh.interval_secs", "18446744073709551615"],
    );
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "refresh.interval_secs"]).trim(),
        "60"
    );
}

#[test]
fn test_watch_rejects_oversized_interval() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    let (stdout, stderr, _) = run_cli_failure(
        dir.path(),
        &["watch", "--source", fixture.to_str().unwrap(), "--interval", "18446744073709551615"],
    );
    assert!(!stdout.contains("Today's Student Hub"));
    assert_contains(&stderr, "--interval");
}

#[test]
fn test_show_uses_configured_source() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture();
    run_cli_success(
        dir.path(),
        &["config", "set", "source.snapshot", fixture.to_str().unwrap()],
    );
    let out = run_cli_success(dir.path(), &["show", "--at", "2025-02-12T08:00"]);
    // Wednesday: BIO 150 is the only class.
    assert_contains(&out, "  BIO 150  [Next Class]");
    assert_contains(&out, "No assignments due today or tomorrow");
    assert_contains(&out, "All assignments:");
}
