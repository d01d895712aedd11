//! Integration tests for the pagebundle binary

use super::test_utils::Workspace;
use std::process::Command;

fn pagebundle() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pagebundle"));
    cmd.env_remove("PAGEBUNDLE_LOG")
        .env_remove("PAGEBUNDLE_LOG_FORMAT")
        .env_remove("PAGEBUNDLE_LOG_OUTPUT");
    cmd
}

#[test]
fn test_cli_example_scenario() {
    let ws = Workspace::new("OLD");
    ws.source_file("index.md", "HOME");
    ws.source_file("guide.md", "GUIDE");
    ws.source_file("sub/topic.md", "TOPIC");

    let output = pagebundle()
        .arg(&ws.source)
        .arg(&ws.dest)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "pagebundle should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(ws.read_dest("_index.md"), "OLD");
    assert_eq!(ws.read_dest("guide/_index.md"), "GUIDE");
    assert_eq!(ws.read_dest("topic/_index.md"), "TOPIC");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Writing"), "progress lines go to stdout: {}", stdout);
    assert!(stdout.contains("2 bundle(s)"), "summary line expected: {}", stdout);
    assert!(
        !stdout.contains('\u{1b}'),
        "piped progress lines carry no ANSI escapes: {:?}",
        stdout
    );
}

#[test]
fn test_cli_invalid_env_log_format_fails() {
    let ws = Workspace::new("OLD");
    ws.source_file("guide.md", "GUIDE");

    let output = pagebundle()
        .env("PAGEBUNDLE_LOG_FORMAT", "yaml")
        .arg(&ws.source)
        .arg(&ws.dest)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log format"), "stderr: {}", stderr);
    assert!(!ws.dest.join("guide").exists());
}

#[test]
fn test_cli_missing_index_exits_nonzero() {
    let ws = Workspace::new("OLD");
    std::fs::remove_file(ws.dest.join("_index.md")).unwrap();
    ws.source_file("guide.md", "GUIDE");

    let output = pagebundle()
        .arg("--quiet")
        .arg(&ws.source)
        .arg(&ws.dest)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("_index.md"), "diagnostic names the path: {}", stderr);
    assert!(!ws.dest.join("guide").exists());
}

#[test]
fn test_cli_quiet_prints_nothing() {
    let ws = Workspace::new("OLD");
    ws.source_file("guide.md", "GUIDE");

    let output = pagebundle()
        .arg("--quiet")
        .arg(&ws.source)
        .arg(&ws.dest)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(ws.read_dest("guide/_index.md"), "GUIDE");
}

#[test]
fn test_cli_requires_two_arguments() {
    let output = pagebundle().arg("only-one").output().unwrap();
    assert!(!output.status.success());
}
