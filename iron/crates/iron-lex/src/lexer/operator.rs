//! Punctuation lexing.
//!
//! Every punctuator but `=>` is a single byte and matched directly in the
//! core dispatch. `=` is the sole two-character case: the lexer must try
//! `=>` before falling back to treating `=` alone as a punctuator — but `=`
//! alone does not appear in the grammar, so an unmatched `=` is a lex error.

use crate::token::TokenKind;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Dispatches on `=`, trying the two-byte `=>` before anything shorter
    /// (longest-match-first within the punctuation class).
    pub(super) fn lex_equals(&mut self) -> Option<TokenKind> {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            Some(TokenKind::FatArrow)
        } else {
            None
        }
    }
}
