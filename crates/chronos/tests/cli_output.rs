//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Run chronos with an isolated data directory and working directory.
fn run_chronos(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chronos"))
        .env("CHRONOS_HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .args(args)
        .output()
        .expect("Failed to execute chronos")
}

fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} failed with exit code {:?}. stderr: {}",
        what,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
/// and that stderr is empty by default (quiet mode)
#[test]
fn test_list_stdout_is_clean() {
    let home = tempfile::tempdir().unwrap();
    let output = run_chronos(&home, &["list"]);
    assert_success(&output, "chronos list");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {}",
        stderr
    );
    assert!(stdout.contains("No timers yet"));
}

/// Verify that verbose mode sends logs to stderr, never stdout
#[test]
fn test_verbose_logs_go_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    let output = run_chronos(&home, &["-v", "list"]);
    assert_success(&output, "chronos -v list");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""event":"cli.list_started""#),
        "Verbose mode should log list events to stderr, got: {}",
        stderr
    );
    for line in stdout.lines() {
        assert!(
            !line.trim_start().starts_with('{'),
            "stdout line looks like a JSON log: {}",
            line
        );
    }
}

#[test]
fn test_add_list_delete_lifecycle() {
    let home = tempfile::tempdir().unwrap();

    let output = run_chronos(&home, &["add", "Launch", "2099-03-02T01:02"]);
    assert_success(&output, "chronos add");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added timer 'Launch'"), "got: {}", stdout);

    // Stored exactly as entered, under the my_timers key.
    let stored = std::fs::read_to_string(home.path().join("my_timers")).unwrap();
    let timers: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(timers[0]["title"], "Launch");
    assert_eq!(timers[0]["date"], "2099-03-02T01:02");
    let id = timers[0]["id"].as_u64().unwrap().to_string();

    let output = run_chronos(&home, &["list"]);
    assert_success(&output, "chronos list");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Launch"));
    assert!(stdout.contains("March 2, 2099"));
    assert!(stdout.contains("until"));

    let output = run_chronos(&home, &["delete", &id, "--force"]);
    assert_success(&output, "chronos delete --force");

    let output = run_chronos(&home, &["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No timers yet"), "got: {}", stdout);
}

#[test]
fn test_delete_without_confirmation_keeps_timer() {
    let home = tempfile::tempdir().unwrap();
    assert_success(
        &run_chronos(&home, &["add", "Keep", "2000-01-01"]),
        "chronos add",
    );
    let stored = std::fs::read_to_string(home.path().join("my_timers")).unwrap();
    let timers: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let id = timers[0]["id"].as_u64().unwrap().to_string();

    // stdin is empty, so the prompt reads no confirmation.
    let output = Command::new(env!("CARGO_BIN_EXE_chronos"))
        .env("CHRONOS_HOME", home.path())
        .current_dir(home.path())
        .args(["delete", &id])
        .stdin(std::process::Stdio::null())
        .output()
        .expect("Failed to execute chronos");
    assert_success(&output, "chronos delete");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Aborted."));

    let stored = std::fs::read_to_string(home.path().join("my_timers")).unwrap();
    assert!(stored.contains("Keep"));
}

#[test]
fn test_add_rejects_bad_date() {
    let home = tempfile::tempdir().unwrap();
    let output = run_chronos(&home, &["add", "Soon", "next tuesday"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date"), "got: {}", stderr);
    assert!(!home.path().join("my_timers").exists());
}

#[test]
fn test_add_rejects_empty_title() {
    let home = tempfile::tempdir().unwrap();
    let output = run_chronos(&home, &["add", "", "2030-01-01"]);
    assert!(!output.status.success());
    assert!(!home.path().join("my_timers").exists());
}

#[test]
fn test_add_accepts_whitespace_title() {
    let home = tempfile::tempdir().unwrap();
    assert_success(
        &run_chronos(&home, &["add", "  ", "2030-01-01"]),
        "chronos add",
    );
    let stored = std::fs::read_to_string(home.path().join("my_timers")).unwrap();
    assert!(stored.contains(r#""title":"  ""#), "got: {}", stored);
}

#[test]
fn test_show_renders_cards_without_color_when_piped() {
    let home = tempfile::tempdir().unwrap();
    assert_success(
        &run_chronos(&home, &["add", "Past", "2000-01-01T00:00"]),
        "chronos add",
    );
    let stored = std::fs::read_to_string(home.path().join("my_timers")).unwrap();
    let timers: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let id = timers[0]["id"].as_u64().unwrap().to_string();

    let output = run_chronos(&home, &["show", &id, "--skin", "casio"]);
    assert_success(&output, "chronos show");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("Past"));
    assert!(stdout.contains("elapsed"));
    assert!(stdout.contains("YRS"));
    assert!(stdout.contains('╔'));
    assert!(!stdout.contains('\x1b'), "piped output should carry no ANSI codes");
}

#[test]
fn test_show_unknown_id_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_chronos(&home, &["show", "12345"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Timer '12345' not found"));
}

#[test]
fn test_theme_and_skin_persist() {
    let home = tempfile::tempdir().unwrap();

    let output = run_chronos(&home, &["skin", "nixie"]);
    assert_success(&output, "chronos skin nixie");
    assert_eq!(
        std::fs::read_to_string(home.path().join("visual_style")).unwrap(),
        "nixie"
    );

    let output = run_chronos(&home, &["theme", "light"]);
    assert_success(&output, "chronos theme light");
    let output = run_chronos(&home, &["theme", "toggle"]);
    assert_success(&output, "chronos theme toggle");
    assert_eq!(
        std::fs::read_to_string(home.path().join("theme")).unwrap(),
        "dark"
    );

    let output = run_chronos(&home, &["theme"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "dark");
}
