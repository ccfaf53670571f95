//! Exercises `iron_drv::compile` directly, without spawning the binary,
//! so phase-level errors can be matched precisely.

use iron_drv::{compile, Config, DriverError};
use tempfile::TempDir;

fn config(input: &std::path::Path, output: &std::path::Path) -> Config {
    Config {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        info: false,
        silent: true,
    }
}

#[test]
fn unreadable_file_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.iron");
    let cfg = config(&missing, &dir.path().join("a.out"));

    let err = compile(&cfg).unwrap_err();
    assert!(matches!(err, DriverError::UnreadableFile { .. }));
}

#[test]
fn non_ascii_source_is_a_lex_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.iron");
    std::fs::write(&input, "fn main { ret \u{e9} ; }").unwrap();
    let cfg = config(&input, &dir.path().join("a.out"));

    let err = compile(&cfg).unwrap_err();
    assert!(matches!(err, DriverError::Lex(_)));
}

#[test]
fn malformed_source_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.iron");
    std::fs::write(&input, "fn main { ret").unwrap();
    let cfg = config(&input, &dir.path().join("a.out"));

    let err = compile(&cfg).unwrap_err();
    assert!(matches!(err, DriverError::Parse(_)));
}

#[test]
fn undefined_callee_is_an_emit_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("call.iron");
    std::fs::write(&input, "fn main { ret ghost() ; }").unwrap();
    let cfg = config(&input, &dir.path().join("a.out"));

    let err = compile(&cfg).unwrap_err();
    assert!(matches!(err, DriverError::Emit(_)));
}
