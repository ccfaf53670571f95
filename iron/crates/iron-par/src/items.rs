//! Top-level declaration parsing: `decl`, `funcDefn`.

use iron_lex::TokenKind;

use crate::ast::{Decl, FuncDefn, FuncType, NamespaceId};
use crate::{ParseError, Parser};

impl Parser {
    /// `decl := funcDefn`.
    pub(crate) fn parse_decl(&mut self, enclosing: NamespaceId) -> Result<Decl, ParseError> {
        self.parse_func_defn(enclosing).map(Decl::Func)
    }

    /// `funcDefn := 'fn' identifier? (':' funcType)? block`.
    ///
    /// An omitted `:funcType` synthesizes an empty `() => ()` type at the
    /// function's position.
    fn parse_func_defn(&mut self, enclosing: NamespaceId) -> Result<FuncDefn, ParseError> {
        let kw = self.expect(TokenKind::KwFn, "fn")?;
        let name = self.eat_ident();

        let func_type = if self.eat(TokenKind::Colon).is_some() {
            self.parse_func_type()?
        } else {
            FuncType::empty()
        };

        let body = self.parse_block()?;

        Ok(FuncDefn {
            name,
            func_type,
            body,
            enclosing,
            span: kw.span,
        })
    }
}
