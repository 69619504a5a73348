//! End-to-end integration tests for the timeline viewer.
//!
//! Tests the full pipeline: snapshot files → reconstruction → rendered output.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn wt_binary() -> String {
    env!("CARGO_BIN_EXE_wt").to_string()
}

/// Write a snapshot directory plus a config file pointing at it, and
/// return the config file path.
fn write_fixture(temp: &std::path::Path) -> std::path::PathBuf {
    let data_dir = temp.join("snapshot");
    fs::create_dir_all(&data_dir).unwrap();

    fs::write(
        data_dir.join("entries.json"),
        r#"[
            {"date":"2025/04/01","worker":"Sato","area":"A-1","line":"3","variety":"momotaro","task":"harvest","start":"9:00","book":"field"},
            {"date":"2025/04/01","worker":"Sato","area":"sorting room","task":"sort","start":"13:00","end":"15:00","book":"pack"},
            {"date":"2025/04/01","worker":"Ito","area":"B-2","task":"pack","start":"9:30","end":"11:00","book":"pack"},
            {"date":"2025/03/31","worker":"Sato","area":"A-1","task":"prune","start":"9:00","end":"10:00","book":"field"}
        ]"#,
    )
    .unwrap();
    fs::write(
        data_dir.join("shifts.json"),
        r#"[
            {"worker":"Sato","shift_start":"8:00","shift_end":"17:00","rest_start":"12:00","rest_end":"13:00"}
        ]"#,
    )
    .unwrap();
    fs::write(
        data_dir.join("roster.json"),
        r#"[
            {"worker":"Sato","date":"2025/04/01","kind":"day"},
            {"worker":"Ito","date":"2025/04/01","kind":"day"},
            {"worker":"Tanaka","date":"2025/04/01","kind":"day"},
            {"worker":"Suzuki","date":"2025/04/01","kind":"night"}
        ]"#,
    )
    .unwrap();

    let config_path = temp.join("config.toml");
    fs::write(
        &config_path,
        format!("data_dir = {:?}\n", data_dir.to_string_lossy()),
    )
    .unwrap();
    config_path
}

fn run_wt(config: &std::path::Path, args: &[&str]) -> String {
    let output = Command::new(wt_binary())
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run wt");
    assert!(
        output.status.success(),
        "wt {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Full-day show: open end inferred from next start, break and afternoon
/// continuation synthesized from the shift config.
#[test]
fn test_show_reconstructs_full_day() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(temp.path());

    let stdout = run_wt(&config, &["show", "--date", "2025-04-01"]);

    // Sato: harvest runs until the break the shift config injects at 12:00,
    // and the raw 13:00 row covers the afternoon until its explicit 15:00 end.
    assert!(stdout.contains("Sato"), "missing worker header: {stdout}");
    assert!(stdout.contains("09:00-12:00"), "harvest should end at break: {stdout}");
    assert!(stdout.contains("12:00-13:00"), "break segment missing: {stdout}");
    assert!(stdout.contains("13:00-15:00"), "explicit end not honored: {stdout}");
    assert!(stdout.contains("Ito"), "missing worker header: {stdout}");
    assert!(stdout.contains("09:30-11:00"), "Ito segment missing: {stdout}");
    // The 2025/03/31 row must not leak into this day.
    assert!(!stdout.contains("prune"), "other-day row leaked: {stdout}");
}

/// Book filter narrows the rendered segments without dropping warnings.
#[test]
fn test_show_book_filter() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(temp.path());

    let stdout = run_wt(&config, &["show", "--date", "2025-04-01", "--book", "pack"]);

    assert!(stdout.contains("book: pack"), "title missing filter: {stdout}");
    assert!(stdout.contains("13:00-15:00"), "pack segment missing: {stdout}");
    assert!(stdout.contains("09:30-11:00"), "Ito pack segment missing: {stdout}");
    assert!(!stdout.contains("09:00-12:00"), "field segment leaked: {stdout}");
}

/// JSON output carries both the filtered view and the unfiltered full day.
#[test]
fn test_show_json_output() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(temp.path());

    let stdout = run_wt(
        &config,
        &["show", "--date", "2025-04-01", "--book", "field", "--json"],
    );

    let view: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    let filtered = view["filtered"].as_array().unwrap();
    let unfiltered = view["unfiltered"].as_array().unwrap();
    assert!(!filtered.is_empty());
    assert!(unfiltered.len() > filtered.len());
    for segment in filtered {
        assert_eq!(segment["book"], "field");
    }
}

/// Unassigned compares the day-shift roster against the full day.
#[test]
fn test_unassigned_ignores_night_shift() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(temp.path());

    let stdout = run_wt(&config, &["unassigned", "--date", "2025-04-01"]);

    assert!(stdout.contains("Tanaka"), "Tanaka should be unassigned: {stdout}");
    assert!(!stdout.contains("Suzuki"), "night shift should be ignored: {stdout}");
    assert!(!stdout.contains("Sato"), "assigned worker listed: {stdout}");
}

/// Options lists the distinct book and area tags of the day.
#[test]
fn test_options_lists_tags() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(temp.path());

    let stdout = run_wt(&config, &["options", "--date", "2025-04-01"]);

    assert!(stdout.contains("Books:"), "missing books section: {stdout}");
    assert!(stdout.contains("- field"), "missing book: {stdout}");
    assert!(stdout.contains("- pack"), "missing book: {stdout}");
    assert!(stdout.contains("Areas:"), "missing areas section: {stdout}");
    assert!(stdout.contains("- A-1"), "missing area: {stdout}");
    assert!(stdout.contains("- sorting room"), "missing area: {stdout}");
}

/// A day with no rows still renders instead of failing.
#[test]
fn test_show_empty_day() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(temp.path());

    let stdout = run_wt(&config, &["show", "--date", "2025-05-01"]);

    assert!(
        stdout.contains("No work recorded for this day."),
        "empty day message missing: {stdout}"
    );
}
