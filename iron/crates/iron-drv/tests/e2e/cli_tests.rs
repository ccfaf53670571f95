//! CLI-surface tests that never reach the external toolchain: usage
//! errors and the empty-input no-op.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn iron_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iron"))
}

#[test]
fn missing_input_fails_with_nonzero_exit() {
    iron_bin().assert().failure();
}

#[test]
fn extra_positional_argument_fails() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.iron");
    let b = dir.path().join("b.iron");
    std::fs::write(&a, "fn main { ret ; }").unwrap();
    std::fs::write(&b, "fn main { ret ; }").unwrap();

    iron_bin().arg(&a).arg(&b).assert().failure();
}

#[test]
fn unreadable_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.iron");

    iron_bin().arg(&missing).assert().failure();
}

#[test]
fn silent_suppresses_stderr_on_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.iron");

    iron_bin()
        .arg(&missing)
        .env("SILENT", "1")
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_source_file_is_a_successful_no_op() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.iron");
    std::fs::write(&input, "").unwrap();
    let output = dir.path().join("a.out");

    iron_bin()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert!(!output.exists(), "no module should be emitted for empty input");
}

#[test]
fn non_ascii_source_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.iron");
    std::fs::write(&input, "fn main { ret ; } // caf\u{e9}").unwrap();

    iron_bin().arg(&input).assert().failure();
}
