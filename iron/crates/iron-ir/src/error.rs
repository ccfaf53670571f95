//! IR emitter and toolchain error type.

use iron_util::Span;
use thiserror::Error;

/// Errors the emitter and external-tool pipeline can report. Every
/// variant is fatal: emission is all-or-nothing, and no partial
/// executable is ever produced.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Two declarations in the same namespace emit the same external
    /// symbol. The IR layer would silently rename one; that is
    /// explicitly rejected here.
    #[error("duplicate symbol `{name}` at {span:?}")]
    DuplicateSymbol { name: String, span: Span },

    /// A call names a function not present (yet, or at all) in the
    /// module being built.
    #[error("call to undefined function `{name}` at {span:?}")]
    UndefinedCallee { name: String, span: Span },

    /// An integer literal's digit sequence doesn't fit in 32 bits.
    #[error("integer literal `{digits}` at {span:?} does not fit in 32 bits")]
    IntOverflow { digits: String, span: Span },

    /// A block's statement sequence ended without a terminator.
    #[error("function `{name}` has no terminating return at {span:?}")]
    MissingTerminator { name: String, span: Span },

    /// A tree node the emitter has no lowering for yet.
    #[error("{0} is not yet reachable through IR emission")]
    Unsupported(&'static str),

    /// An external tool exited with a non-zero status.
    #[error("{tool} exited with status {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: i32,
        stderr: String,
    },

    /// Writing an intermediate file, or launching an external tool, failed
    /// at the OS level.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
