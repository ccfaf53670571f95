//! Drives the external assembler and linker over a serialized `Module`.
//!
//! Native codegen is delegated entirely to out-of-process tools: this
//! crate only ever produces text. The assembler and linker commands are
//! overridable through `IRONC_ASSEMBLER`/`IRONC_LINKER` so tests and
//! alternate backends can swap in a stub.

use std::path::PathBuf;
use std::process::Command;

use crate::error::EmitError;
use crate::ir::Module;

const DEFAULT_ASSEMBLER: &str = "ironc-as";
const DEFAULT_LINKER: &str = "cc";

/// The three artifacts a full compile produces on disk, in order.
pub struct ToolchainPaths {
    pub ir_path: PathBuf,
    pub asm_path: PathBuf,
    pub output_path: PathBuf,
}

impl ToolchainPaths {
    /// Fixed temp paths keyed by the current process id, per the
    /// external-interfaces contract. No attempt is made to avoid
    /// collisions between concurrent invocations of the driver; that is
    /// the operating system's /tmp namespace to arbitrate.
    pub fn for_pid(pid: u32, output_path: PathBuf) -> Self {
        Self {
            ir_path: PathBuf::from(format!("/tmp/iron-{pid}.ir")),
            asm_path: PathBuf::from(format!("/tmp/iron-{pid}.s")),
            output_path,
        }
    }
}

fn assembler_cmd() -> String {
    std::env::var("IRONC_ASSEMBLER").unwrap_or_else(|_| DEFAULT_ASSEMBLER.to_string())
}

fn linker_cmd() -> String {
    std::env::var("IRONC_LINKER").unwrap_or_else(|_| DEFAULT_LINKER.to_string())
}

/// Writes the module's textual form, assembles it, then links the
/// result into `paths.output_path`. Intermediate files are left on
/// disk regardless of outcome, to aid diagnosis of a failing tool.
pub fn run(module: &Module, paths: &ToolchainPaths) -> Result<(), EmitError> {
    std::fs::write(&paths.ir_path, module.to_string())?;

    run_tool(
        &assembler_cmd(),
        &[
            paths.ir_path.to_string_lossy().into_owned(),
            "-o".to_string(),
            paths.asm_path.to_string_lossy().into_owned(),
        ],
    )?;

    run_tool(
        &linker_cmd(),
        &[
            paths.asm_path.to_string_lossy().into_owned(),
            "-o".to_string(),
            paths.output_path.to_string_lossy().into_owned(),
        ],
    )?;

    Ok(())
}

fn run_tool(tool: &str, args: &[String]) -> Result<(), EmitError> {
    let output = Command::new(tool).args(args).output()?;

    if !output.status.success() {
        return Err(EmitError::ToolFailed {
            tool: tool.to_string(),
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}
