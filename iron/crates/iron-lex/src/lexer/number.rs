//! Integer literal lexing.
//!
//! The lexer only ever emits a plain digit run. The optional `.` fraction
//! and `:type` suffix used by float literals are lexed as separate tokens
//! (`Dot`, `Colon`, another digit run) and recombined by the parser — see
//! §4.1/§4.2 of the design notes.

use iron_util::Symbol;

use crate::token::TokenKind;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a greedy run of decimal digits.
    pub(super) fn lex_number(&mut self) -> TokenKind {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = &self.cursor.source()[start..self.cursor.position()];
        TokenKind::IntLit(Symbol::intern(text))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn lexes_digit_run() {
        let mut lexer = Lexer::new("1234 x").unwrap();
        let tok = lexer.next_token().unwrap();
        assert!(matches!(tok.kind, TokenKind::IntLit(s) if s.eq_str("1234")));
    }
}
