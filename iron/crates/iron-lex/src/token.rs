//! Token kinds produced by the lexer.
//!
//! The Source Language's token set is deliberately small: two keywords, an
//! identifier class, a decimal integer literal, and a closed set of
//! punctuators. There is no string/char literal token — `"` and `'` are
//! reserved bytes that fall through to `no-match`.

use iron_util::{Span, Symbol};

/// A single lexical token, carrying its source position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The closed set of token kinds the lexer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `fn`
    KwFn,
    /// `ret`
    KwRet,
    /// `[A-Za-z_][A-Za-z0-9_]*`, excluding the two keywords above.
    Ident(Symbol),
    /// A run of decimal digits. The lexer never interprets the value; it
    /// hands the digit span to the parser/emitter.
    IntLit(Symbol),

    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Semicolon,
    Comma,
    Plus,
    Minus,
    Star,
    Slash,
    Dot,
    /// `=>`
    FatArrow,

    Eof,
}

impl TokenKind {
    /// Maps a complete identifier lexeme to a keyword kind, if it is one.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "fn" => Some(TokenKind::KwFn),
            "ret" => Some(TokenKind::KwRet),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}
