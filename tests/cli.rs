//! # Command Line Tests
//!
//! Runs the `sim` binary and checks its exit status and output streams.

use std::io::Write;
use std::process::Command;
use std::process::Output;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const HALT: i32 = 6 << 22;

fn sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sim")).args(args).output().unwrap()
}

#[test]
fn missing_argument_is_a_usage_error() {
    let output = sim(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: usage:"));
    assert!(output.stdout.is_empty());
}

#[test]
fn extra_argument_is_a_usage_error() {
    let output = sim(&["a.mc", "b.mc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: usage:"));
}

#[test]
fn unreadable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.mc");

    let output = sim(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("can't open file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn halting_program_succeeds() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HALT).unwrap();
    file.flush().unwrap();

    let output = sim(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("instruction memory:\n"));
    assert!(stdout.contains("Machine halted\nTotal of 4 cycles executed\n"));
}
