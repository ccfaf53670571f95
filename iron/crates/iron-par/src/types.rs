//! Type and variable-declaration parsing: `type`, `funcType`, `typename`,
//! `varDecl`.

use iron_lex::TokenKind;

use crate::ast::{FuncType, Type, Typename, VarDecl};
use crate::{ParseError, Parser};

impl Parser {
    /// `type := funcType | typename`.
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        if self.current_kind() == TokenKind::LParen {
            let ft = self.parse_func_type()?;
            Ok(Type::Func(Box::new(ft)))
        } else {
            let tn = self.parse_typename()?;
            Ok(Type::Named(tn))
        }
    }

    /// `funcType := '(' ')' '=>' '(' (varDecl (',' varDecl)*)? ')'`.
    ///
    /// The first group is always empty in the current grammar; inputs
    /// exist in the data model for a future extension but are never
    /// populated by this parser.
    pub(crate) fn parse_func_type(&mut self) -> Result<FuncType, ParseError> {
        self.expect(TokenKind::LParen, "(")?;
        self.expect(TokenKind::RParen, ")")?;
        self.expect(TokenKind::FatArrow, "=>")?;
        self.expect(TokenKind::LParen, "(")?;

        let mut outputs = Vec::new();
        if self.current_kind() != TokenKind::RParen {
            outputs.push(self.parse_var_decl()?);
            while self.eat(TokenKind::Comma).is_some() {
                outputs.push(self.parse_var_decl()?);
            }
        }
        self.expect(TokenKind::RParen, ")")?;

        Ok(FuncType {
            inputs: Vec::new(),
            outputs,
        })
    }

    /// `typename := identifier`.
    pub(crate) fn parse_typename(&mut self) -> Result<Typename, ParseError> {
        let span = self.current_span();
        let name = self
            .eat_ident()
            .ok_or_else(|| self.unexpected("typename"))?;
        Ok(Typename { name, span })
    }

    /// `varDecl := identifier ':' type?`.
    pub(crate) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let span = self.current_span();
        let name = self.eat_ident().ok_or_else(|| self.unexpected("varDecl"))?;
        self.expect(TokenKind::Colon, ":")?;

        let ty = if self.starts_type() {
            Some(self.parse_type()?)
        } else {
            None
        };

        Ok(VarDecl { name, ty, span })
    }

    /// Whether the current token can begin a `type` production.
    pub(crate) fn starts_type(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::LParen | TokenKind::Ident(_)
        )
    }
}
