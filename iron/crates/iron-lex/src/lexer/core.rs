//! Core lexer implementation: dispatch, ASCII pre-validation, and the
//! public `tokenize` entry point.

use iron_util::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for the Source Language.
///
/// Built over a byte [`Cursor`] rather than a `chars()` iterator: input is
/// pre-validated ASCII by [`Lexer::new`], so byte indexing is safe and
/// avoids UTF-8 decode overhead on the hot path.
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Validates `source` as 7-bit ASCII and builds a lexer over it.
    ///
    /// Any byte outside the ASCII range fails the whole lex before a single
    /// token is produced, matching the "bad-file" status code.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        for (i, &b) in source.as_bytes().iter().enumerate() {
            if b >= 0x80 {
                let (line, column) = line_col_at(source, i);
                let span = Span::new(i, i + 1, line, column);
                return Err(LexError::NonAscii { byte: b, span });
            }
        }
        Ok(Self {
            cursor: Cursor::new(source),
        })
    }

    /// Lexes the entire source into an ordered token sequence, terminated
    /// implicitly (the `Eof` token is not included in the returned vector).
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind.is_eof() {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or a terminal `Eof` token at end of input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start_pos = self.cursor.position();
        let start_line = self.cursor.line();
        let start_col = self.cursor.column();

        if self.cursor.is_at_end() {
            let span = Span::new(start_pos, start_pos, start_line, start_col);
            return Ok(Token::new(TokenKind::Eof, span));
        }

        let c = self.cursor.current_char();
        let kind = match c {
            c if super::identifier::is_ident_start(c) => Some(self.lex_identifier()),
            c if c.is_ascii_digit() => Some(self.lex_number()),
            '(' => {
                self.cursor.advance();
                Some(TokenKind::LParen)
            }
            ')' => {
                self.cursor.advance();
                Some(TokenKind::RParen)
            }
            '{' => {
                self.cursor.advance();
                Some(TokenKind::LBrace)
            }
            '}' => {
                self.cursor.advance();
                Some(TokenKind::RBrace)
            }
            ':' => {
                self.cursor.advance();
                Some(TokenKind::Colon)
            }
            ';' => {
                self.cursor.advance();
                Some(TokenKind::Semicolon)
            }
            ',' => {
                self.cursor.advance();
                Some(TokenKind::Comma)
            }
            '+' => {
                self.cursor.advance();
                Some(TokenKind::Plus)
            }
            '-' => {
                self.cursor.advance();
                Some(TokenKind::Minus)
            }
            '*' => {
                self.cursor.advance();
                Some(TokenKind::Star)
            }
            '/' => {
                self.cursor.advance();
                Some(TokenKind::Slash)
            }
            '.' => {
                self.cursor.advance();
                Some(TokenKind::Dot)
            }
            '=' => self.lex_equals(),
            _ => None,
        };

        match kind {
            Some(kind) => {
                let end_pos = self.cursor.position();
                let span = Span::new(start_pos, end_pos, start_line, start_col);
                Ok(Token::new(kind, span))
            }
            None => {
                let span = Span::new(start_pos, start_pos + 1, start_line, start_col);
                Err(LexError::UnexpectedChar { found: c, span })
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\n') {
            self.cursor.advance();
        }
    }
}

/// Computes the 1-based (line, column) of byte offset `i` by scanning for
/// newlines from the start of `source`. Used for the ASCII pre-validation
/// pass, which runs before any `Cursor` exists to track position.
fn line_col_at(source: &str, i: usize) -> (u32, u32) {
    let mut line = 1;
    let mut column = 1;
    for &b in &source.as_bytes()[..i] {
        if b == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_empty_source() {
        let tokens = Lexer::new("").unwrap().tokenize().unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn tokenizes_function_signature() {
        let tokens = Lexer::new("fn: () => () {}").unwrap().tokenize().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::KwFn,
                TokenKind::Colon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::FatArrow,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn rejects_non_ascii() {
        let err = Lexer::new("fn café").unwrap_err();
        assert!(matches!(err, LexError::NonAscii { .. }));
    }

    #[test]
    fn non_ascii_error_reports_its_real_position() {
        let err = Lexer::new("fn f\nret é").unwrap_err();
        match err {
            LexError::NonAscii { span, .. } => {
                assert_eq!(span.line, 2);
                assert_eq!(span.column, 5);
            }
            other => panic!("expected NonAscii, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unmatched_equals() {
        let err = Lexer::new("x = 1").unwrap().tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { found: '=', .. }));
    }

    #[test]
    fn tracks_line_and_column_across_newline() {
        let tokens = Lexer::new("fn\nret").unwrap().tokenize().unwrap();
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[1].span.line, 2);
        assert_eq!(tokens[1].span.column, 1);
    }
}
