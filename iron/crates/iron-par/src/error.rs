//! Parser error type.

use iron_util::Span;
use thiserror::Error;

/// Errors the parser can report. Every variant is fatal: the parser never
/// recovers, so the tree is either complete or entirely absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token was required and something else was found.
    #[error("expected `{expected}`, found `{found}` at {span:?}")]
    ExpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// No production in the current choice matched the lookahead.
    #[error("unexpected token `{found}` at {span:?}")]
    UnexpectedToken { found: String, span: Span },

    /// Input ended where a production required more tokens.
    #[error("unexpected end of input, expected `{expected}`")]
    UnexpectedEof { expected: &'static str },
}
