// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tests that drive the compiled `calc` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn calc_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calc"))
}

#[test]
fn test_evaluates_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.calc");
    std::fs::write(&path, "(1 + 2) * 3\n").unwrap();

    let output = calc_binary().arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "9\n");
}

#[test]
fn test_file_errors_carry_file_coordinates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.calc");
    std::fs::write(&path, "1 / 0\n").unwrap();

    let output = calc_binary().arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("division by zero"), "stderr was: {stderr}");
    assert!(stderr.contains(":1:3:"), "stderr was: {stderr}");
}

#[test]
fn test_empty_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.calc");
    std::fs::write(&path, "\n\n").unwrap();

    let output = calc_binary().arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("contains no expression"), "stderr was: {stderr}");
}

#[test]
fn test_missing_file_is_an_error() {
    let output = calc_binary().arg("does-not-exist.calc").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot read"), "stderr was: {stderr}");
}

#[test]
fn test_repl_round_trip() {
    let mut child = calc_binary()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"1 + 2 * 3\n2 ** 5\n").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("7\n"), "stdout was: {stdout}");
    assert!(stdout.contains("32\n"), "stdout was: {stdout}");
}

#[test]
fn test_repl_recovers_after_an_error() {
    let mut child = calc_binary()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"1 / 0\n2 + 2\n").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("division by zero"), "stderr was: {stderr}");
    assert!(stdout.contains("4\n"), "stdout was: {stdout}");
}

#[test]
fn test_help() {
    let output = calc_binary().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage: calc"), "stdout was: {stdout}");
}

#[test]
fn test_version() {
    let output = calc_binary().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("calc "), "stdout was: {stdout}");
}

#[test]
fn test_unknown_option_fails() {
    let output = calc_binary().arg("--frobnicate").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown option"), "stderr was: {stderr}");
}
