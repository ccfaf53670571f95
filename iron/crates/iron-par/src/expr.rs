//! Expression parsing: `expr`, `addExpr`, `multExpr`, `primary`,
//! `funcCall`, `lvalue`, `literal`.
//!
//! `addExpr`/`multExpr` loop left-associatively rather than recurse, so
//! `a+b+c` parses as `(a+b)+c`.

use iron_lex::TokenKind;

use crate::ast::{BinExpr, BinOp, Expr, FloatLit, FuncCall, IntLit, Lvalue, Type};
use crate::{ParseError, Parser};

impl Parser {
    /// `expr := addExpr`.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_add_expr()
    }

    /// `addExpr := multExpr (('+' | '-') multExpr)*`.
    fn parse_add_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_mult_expr()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            let span = lhs.span();
            self.advance();
            let rhs = self.parse_mult_expr()?;
            lhs = Expr::Bin(BinExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            });
        }
        Ok(lhs)
    }

    /// `multExpr := primary (('*' | '/') primary)*`.
    fn parse_mult_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_primary()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            let span = lhs.span();
            self.advance();
            let rhs = self.parse_primary()?;
            lhs = Expr::Bin(BinExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            });
        }
        Ok(lhs)
    }

    /// `primary := '(' expr ')' | literal | funcCall | lvalue`.
    ///
    /// Literal is tried before a call, which is tried before an lvalue, so
    /// a bare identifier followed by `(` `)` becomes a call and any other
    /// identifier becomes an lvalue.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(TokenKind::LParen).is_some() {
            let inner = self.parse_expr()?;
            self.expect(TokenKind::RParen, ")")?;
            return Ok(inner);
        }
        if let Some(lit) = self.try_literal()? {
            return Ok(lit);
        }
        if let Some(call) = self.try_func_call()? {
            return Ok(call);
        }
        if let Some(lv) = self.try_lvalue()? {
            return Ok(lv);
        }
        Err(self.unexpected("expression"))
    }

    /// `literal := ('-')? number ('.' number?)? (':' type)?`.
    ///
    /// Graceful: returns `Ok(None)` without consuming input if the
    /// current position isn't a literal at all.
    fn try_literal(&mut self) -> Result<Option<Expr>, ParseError> {
        let snapshot = self.snapshot();
        let span = self.current_span();
        let negative = self.eat(TokenKind::Minus).is_some();

        let digits = match self.eat_int_lit() {
            Some(digits) => digits,
            None => {
                self.restore(snapshot);
                return Ok(None);
            }
        };

        if self.eat(TokenKind::Dot).is_some() {
            let frac_part = self.eat_int_lit();
            let ty = self.parse_typed_suffix()?;
            return Ok(Some(Expr::Float(FloatLit {
                negative,
                int_part: digits,
                frac_part,
                ty,
                span,
            })));
        }

        let ty = self.parse_typed_suffix()?;
        Ok(Some(Expr::Int(IntLit {
            negative,
            digits,
            ty,
            span,
        })))
    }

    /// `(':' type)?` — once the `:` is seen, the type itself is mandatory.
    fn parse_typed_suffix(&mut self) -> Result<Option<Type>, ParseError> {
        if self.eat(TokenKind::Colon).is_some() {
            Ok(Some(self.parse_type()?))
        } else {
            Ok(None)
        }
    }

    /// `funcCall := identifier '(' ')'`. Requires a two-token peek past
    /// the identifier to tell a call apart from an lvalue.
    fn try_func_call(&mut self) -> Result<Option<Expr>, ParseError> {
        if !matches!(self.current_kind(), TokenKind::Ident(_)) {
            return Ok(None);
        }
        if self.peek_kind(1) != TokenKind::LParen || self.peek_kind(2) != TokenKind::RParen {
            return Ok(None);
        }

        let span = self.current_span();
        let callee = self.eat_ident().expect("checked above");
        self.expect(TokenKind::LParen, "(")?;
        self.expect(TokenKind::RParen, ")")?;
        Ok(Some(Expr::Call(FuncCall {
            callee,
            args: Vec::new(),
            span,
        })))
    }

    /// `lvalue := identifier`.
    fn try_lvalue(&mut self) -> Result<Option<Expr>, ParseError> {
        if !matches!(self.current_kind(), TokenKind::Ident(_)) {
            return Ok(None);
        }
        let span = self.current_span();
        let name = self.eat_ident().expect("checked above");
        Ok(Some(Expr::Lvalue(Lvalue { name, span })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iron_lex::Lexer;

    fn parse(src: &str) -> Expr {
        let tokens = Lexer::new(src).unwrap().tokenize().unwrap();
        Parser::new(tokens).parse_expr().unwrap()
    }

    #[test]
    fn left_associative_addition() {
        let expr = parse("1 + 2 + 3");
        match expr {
            Expr::Bin(outer) => {
                assert_eq!(outer.op, BinOp::Add);
                assert!(matches!(*outer.rhs, Expr::Int(_)));
                assert!(matches!(*outer.lhs, Expr::Bin(_)));
            }
            _ => panic!("expected BinExpr"),
        }
    }

    #[test]
    fn mult_binds_tighter_than_add() {
        let expr = parse("1 + 2 * 3");
        match expr {
            Expr::Bin(outer) => {
                assert_eq!(outer.op, BinOp::Add);
                match *outer.rhs {
                    Expr::Bin(inner) => assert_eq!(inner.op, BinOp::Mul),
                    _ => panic!("expected nested mul"),
                }
            }
            _ => panic!("expected BinExpr"),
        }
    }

    #[test]
    fn call_vs_lvalue_disambiguation() {
        assert!(matches!(parse("foo()"), Expr::Call(_)));
        assert!(matches!(parse("foo"), Expr::Lvalue(_)));
    }

    #[test]
    fn nested_parens_collapse() {
        let a = parse("((1))");
        let b = parse("1");
        assert!(matches!(a, Expr::Int(_)));
        assert!(matches!(b, Expr::Int(_)));
    }
}
