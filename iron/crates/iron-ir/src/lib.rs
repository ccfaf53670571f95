//! IR emission and native-codegen handoff for the Source Language.
//!
//! Parses no source itself: takes an `iron_par::Program`, lowers it to
//! an in-memory IR `Module`, then drives an external assembler and
//! linker over its textual form. There is no in-process code generator
//! here; the IR text is the entire contract with the native toolchain.

pub mod emitter;
pub mod error;
pub mod ir;
pub mod mangle;
pub mod toolchain;

pub use emitter::Emitter;
pub use error::EmitError;
pub use ir::Module;
pub use toolchain::ToolchainPaths;

use iron_par::ast::Program;
use std::path::PathBuf;

/// Emits `program` and runs it through the external assembler and
/// linker, producing an executable at `output_path`.
pub fn compile_to_executable(
    program: &Program,
    output_path: PathBuf,
) -> Result<Module, EmitError> {
    let module = Emitter::new().emit(program)?;
    let paths = ToolchainPaths::for_pid(std::process::id(), output_path);
    toolchain::run(&module, &paths)?;
    Ok(module)
}
