//! End-to-end tests for the logdigest binary

use predicates::prelude::*;

use crate::helpers::Workspace;

// ============================================
// analyze
// ============================================

#[test]
fn analyze_mock_writes_two_entries_for_550_chars() {
    let ws = Workspace::new();
    ws.write_log("a.log", &"L".repeat(550));

    ws.analyze_mock()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log Analyze: "));

    let report = ws.read_report();
    let entries: Vec<&str> = report.split("\n\n").collect();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.starts_with("Log Analyze: ")));
}

#[test]
fn analyze_empty_directory_writes_empty_report() {
    let ws = Workspace::new();

    ws.analyze_mock().arg("--quiet").assert().success();

    assert!(ws.report().exists());
    assert_eq!(ws.read_report(), "");
}

#[test]
fn analyze_ignores_non_matching_files() {
    let ws = Workspace::new();
    ws.write_log("app.log", "real log");
    ws.write_log("notes.txt", "not a log");

    ws.analyze_mock().arg("--quiet").assert().success();

    assert_eq!(ws.read_report(), "Log Analyze: real log...");
}

#[test]
fn analyze_respects_suffix_flag() {
    let ws = Workspace::new();
    ws.write_log("app.log", "ignored");
    ws.write_log("notes.txt", "picked");

    ws.analyze_mock()
        .args(["--suffix", ".txt", "--quiet"])
        .assert()
        .success();

    assert_eq!(ws.read_report(), "Log Analyze: picked...");
}

#[test]
fn analyze_mock_api_env_selects_mock() {
    let ws = Workspace::new();
    ws.write_log("a.log", "hello");

    ws.command()
        .env("MOCK_API", "true")
        .arg("analyze")
        .arg(ws.logs())
        .args(["--pacing-ms", "0", "--quiet", "--output"])
        .arg(ws.report())
        .assert()
        .success();

    assert_eq!(ws.read_report(), "Log Analyze: hello...");
}

#[test]
fn analyze_without_api_key_records_failures() {
    let ws = Workspace::new();
    ws.write_log("a.log", "hello");
    let config = ws.write_config(
        r#"
[service]
api_key_env = "LOGDIGEST_TEST_KEY_THAT_IS_NEVER_SET"
"#,
    );

    ws.command()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(ws.logs())
        .args(["--pacing-ms", "0", "--quiet", "--output"])
        .arg(ws.report())
        .assert()
        .success();

    let report = ws.read_report();
    assert!(report.starts_with("Log analysis failed due to missing API key"));
    assert!(report.contains("LOGDIGEST_TEST_KEY_THAT_IS_NEVER_SET"));
}

#[test]
fn analyze_invalid_overlap_fails_without_report() {
    let ws = Workspace::new();
    ws.write_log("a.log", "hello");

    ws.analyze_mock()
        .args(["--chunk-size", "10", "--overlap", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_overlap"));

    assert!(!ws.report().exists());
}

#[test]
fn analyze_missing_directory_fails() {
    let ws = Workspace::new();

    ws.command()
        .args(["analyze", "does-not-exist", "--mock", "--pacing-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

// ============================================
// config
// ============================================

#[test]
fn config_show_prints_defaults() {
    let ws = Workspace::new();

    ws.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[analysis]"))
        .stdout(predicate::str::contains("chunk_size = 500"));
}

#[test]
fn config_init_then_refuses_overwrite() {
    let ws = Workspace::new();

    ws.command().args(["config", "init"]).assert().success();
    let path = ws.home().join(".config").join("logdigest").join("config.toml");
    assert!(path.exists());

    ws.command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    ws.command()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_path_honors_explicit_file() {
    let ws = Workspace::new();

    ws.command()
        .args(["config", "path", "--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_file_values_are_used_by_analyze() {
    let ws = Workspace::new();
    ws.write_log("a.log", &"z".repeat(30));
    let config = ws.write_config(
        r#"
[analysis]
chunk_size = 10
chunk_overlap = 0
pacing_delay_ms = 0

[service]
mock = true
"#,
    );

    ws.command()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(ws.logs())
        .args(["--quiet", "--output"])
        .arg(ws.report())
        .assert()
        .success();

    assert_eq!(ws.read_report().split("\n\n").count(), 3);
}

#[test]
fn config_init_writes_explicit_file() {
    let ws = Workspace::new();
    let path = ws.temp.path().join("nested").join("custom.toml");

    ws.command()
        .arg("config")
        .arg("init")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));

    assert!(path.exists());
    assert!(!ws.home().join(".config").join("logdigest").exists());
}
