//! iron-lex - Lexical analysis for the Source Language.
//!
//! Turns raw source text into a flat token stream: an ASCII pre-validation
//! pass followed by a single left-to-right scan. There is no recovery —
//! the first lex error aborts the whole pass, matching the driver's
//! fail-fast pipeline.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod outcome;
pub mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use outcome::LexOutcome;
pub use token::{Token, TokenKind};
