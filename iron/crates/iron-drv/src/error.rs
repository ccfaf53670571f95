//! Top-level driver error, wrapping every phase's error type plus usage
//! and I/O failures.

use iron_ir::EmitError;
use iron_lex::LexError;
use iron_par::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no input file given")]
    MissingInput,

    #[error("-o requires a value")]
    MissingOutputValue,

    #[error("unexpected extra argument `{0}`")]
    ExtraArgument(String),

    #[error("could not read `{path}`: {source}")]
    UnreadableFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}
