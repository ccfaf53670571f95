//! Lexer error type.

use iron_util::Span;
use thiserror::Error;

/// Errors the lexer can report. Every variant is fatal: the driver reports
/// it and stops, per the no-recovery policy in the design notes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A byte outside the 7-bit ASCII range was found during the
    /// pre-validation pass, before any tokenizing began.
    #[error("non-ASCII byte 0x{byte:02x} at {span:?}")]
    NonAscii { byte: u8, span: Span },

    /// No production matched at a forward-progress point.
    #[error("unexpected character {found:?} at {span:?}")]
    UnexpectedChar { found: char, span: Span },
}
