//! Identifier and keyword lexing.

use iron_util::Symbol;

use crate::token::TokenKind;

use super::core::Lexer;

#[inline]
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes a greedy run of `[A-Za-z0-9_]` starting with `[A-Za-z_]`,
    /// resolving it to a keyword token if it matches the closed keyword set.
    pub(super) fn lex_identifier(&mut self) -> TokenKind {
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = &self.cursor.source()[start..self.cursor.position()];

        if let Some(kw) = TokenKind::keyword_from_str(text) {
            kw
        } else {
            TokenKind::Ident(Symbol::intern_known(text))
        }
    }
}
