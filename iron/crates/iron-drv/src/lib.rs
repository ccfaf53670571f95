//! Compiler driver: argument parsing, pipeline orchestration, and
//! diagnostic reporting for the `iron` binary.
//!
//! The pipeline is straight-line and single-threaded: lex the one input
//! file, parse it, emit IR, and hand the IR to the external assembler and
//! linker. The first error in any phase stops the whole invocation.

pub mod config;
pub mod diagnostics;
pub mod error;

pub use config::Config;
pub use error::DriverError;

use std::path::Path;

use iron_ir::EmitError;
use iron_lex::LexOutcome;
use iron_par::Parser;

/// Runs a full compile for the process's own `argv`/environment.
///
/// Installs a `tracing` subscriber gated on `Config.info`, then delegates
/// to [`compile`]. On failure, reports the error through
/// [`diagnostics::render`] and returns `Err` so the caller exits non-zero.
///
/// A `Config::parse` failure is reported unconditionally: `SILENT` itself
/// lives in the `Config` that failed to come into being, so there is
/// nothing to gate on yet. Every failure after that point honors
/// `config.silent`, read once here rather than re-read at the report site.
pub fn run() -> anyhow::Result<()> {
    let args = std::env::args().skip(1);
    let config = match Config::parse(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", diagnostics::render(Path::new(""), None, &err));
            anyhow::bail!(err);
        }
    };
    init_tracing(config.info);

    if let Err(err) = compile(&config) {
        if !config.silent {
            let source = std::fs::read_to_string(&config.input).ok();
            eprintln!(
                "{}",
                diagnostics::render(&config.input, source.as_deref(), &err)
            );
        }
        anyhow::bail!(err);
    }
    Ok(())
}

/// Runs the lex -> parse -> emit pipeline for an already-resolved
/// `Config`. Exposed separately from [`run`] so tests can drive it
/// without touching `std::env`.
pub fn compile(config: &Config) -> Result<(), DriverError> {
    tracing::info!(input = %config.input.display(), "reading source file");
    let source = std::fs::read_to_string(&config.input).map_err(|source| {
        DriverError::UnreadableFile {
            path: config.input.clone(),
            source,
        }
    })?;

    tracing::info!("lexing");
    let tokens = match LexOutcome::of(&source) {
        LexOutcome::Ok(tokens) => tokens,
        LexOutcome::NoMatch => {
            tracing::info!("empty input, nothing to compile");
            return Ok(());
        }
        LexOutcome::LexError(e) => return Err(DriverError::Lex(e)),
    };

    tracing::info!("parsing");
    let program = Parser::new(tokens).parse()?;

    tracing::info!(output = %config.output.display(), "emitting");
    match iron_ir::compile_to_executable(&program, config.output.clone()) {
        Ok(_module) => Ok(()),
        Err(EmitError::Unsupported(what)) => {
            tracing::warn!(%what, "construct not yet reachable through IR emission");
            Err(DriverError::Emit(EmitError::Unsupported(what)))
        }
        Err(e) => Err(DriverError::Emit(e)),
    }
}

fn init_tracing(info: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if info { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .try_init();
}
