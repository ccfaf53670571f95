//! Full lex -> parse -> emit -> toolchain pipeline, against stub
//! assembler/linker scripts so the test doesn't depend on a real native
//! toolchain being installed.

use assert_cmd::Command;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn iron_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iron"))
}

/// Writes a shell script that copies its first argument to the path
/// named by `-o`, standing in for `ironc-as`/`cc`.
fn write_stub_tool(path: &Path) {
    std::fs::write(
        path,
        "#!/bin/sh\nsrc=\"$1\"\nshift\nwhile [ \"$#\" -gt 0 ]; do\n  if [ \"$1\" = \"-o\" ]; then\n    out=\"$2\"\n  fi\n  shift\ndone\ncp \"$src\" \"$out\"\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[test]
fn minimal_program_runs_through_the_whole_toolchain() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("main.iron");
    std::fs::write(&input, "fn main { ret ; }").unwrap();

    let assembler = dir.path().join("stub-as");
    let linker = dir.path().join("stub-cc");
    write_stub_tool(&assembler);
    write_stub_tool(&linker);

    let output = dir.path().join("a.out");

    iron_bin()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .env("IRONC_ASSEMBLER", &assembler)
        .env("IRONC_LINKER", &linker)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn redefinition_of_a_function_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("dup.iron");
    std::fs::write(&input, "fn main { ret ; } fn main { ret ; }").unwrap();

    let assembler = dir.path().join("stub-as");
    let linker = dir.path().join("stub-cc");
    write_stub_tool(&assembler);
    write_stub_tool(&linker);

    iron_bin()
        .arg(&input)
        .env("IRONC_ASSEMBLER", &assembler)
        .env("IRONC_LINKER", &linker)
        .assert()
        .failure();
}

#[test]
fn call_to_undefined_function_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("call.iron");
    std::fs::write(&input, "fn main { ret ghost() ; }").unwrap();

    iron_bin().arg(&input).assert().failure();
}

#[test]
fn failing_assembler_surfaces_as_a_compile_failure() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("main.iron");
    std::fs::write(&input, "fn main { ret ; }").unwrap();

    let failing_assembler = dir.path().join("failing-as");
    std::fs::write(&failing_assembler, "#!/bin/sh\nexit 7\n").unwrap();
    let mut perms = std::fs::metadata(&failing_assembler).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&failing_assembler, perms).unwrap();

    iron_bin()
        .arg(&input)
        .env("IRONC_ASSEMBLER", &failing_assembler)
        .assert()
        .failure();
}
