//! Statement and block parsing: `block`, `stmnt`, `retStmnt`,
//! `varDeclStmnt`, `initializer`.

use iron_lex::TokenKind;

use crate::ast::{Block, ExprStmnt, Initializer, RetStmnt, Stmt, VarDeclStmnt};
use crate::{ParseError, Parser};

impl Parser {
    /// `block := '{' stmnt* '}'`.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::LBrace, "{")?;
        let mut stmts = Vec::new();
        while self.current_kind() != TokenKind::RBrace {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Block {
            stmts,
            span: open.span,
        })
    }

    /// `stmnt := retStmnt | varDeclStmnt | exprStmnt`.
    ///
    /// `varDecl` and an expression both begin with an identifier; the
    /// tie-break is the token after it — `:` commits to a declaration.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.current_kind() == TokenKind::KwRet {
            return self.parse_ret_stmt().map(Stmt::Ret);
        }

        if matches!(self.current_kind(), TokenKind::Ident(_))
            && self.peek_kind(1) == TokenKind::Colon
        {
            return self.parse_var_decl_stmt().map(Stmt::VarDecl);
        }

        self.parse_expr_stmt().map(Stmt::Expr)
    }

    /// `retStmnt := 'ret' expr? ';'`.
    fn parse_ret_stmt(&mut self) -> Result<RetStmnt, ParseError> {
        let kw = self.expect(TokenKind::KwRet, "ret")?;
        let expr = if self.current_kind() != TokenKind::Semicolon {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(RetStmnt {
            expr,
            span: kw.span,
        })
    }

    /// `varDeclStmnt := varDecl initializer? ';'`.
    fn parse_var_decl_stmt(&mut self) -> Result<VarDeclStmnt, ParseError> {
        let span = self.current_span();
        let decl = self.parse_var_decl()?;
        let init = if self.current_kind() == TokenKind::LBrace {
            Some(self.parse_initializer()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(VarDeclStmnt { decl, init, span })
    }

    /// `initializer := '{' (expr (',' expr)*)? '}'`.
    fn parse_initializer(&mut self) -> Result<Initializer, ParseError> {
        let open = self.expect(TokenKind::LBrace, "{")?;
        let mut exprs = Vec::new();
        if self.current_kind() != TokenKind::RBrace {
            exprs.push(self.parse_expr()?);
            while self.eat(TokenKind::Comma).is_some() {
                exprs.push(self.parse_expr()?);
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Initializer {
            exprs,
            span: open.span,
        })
    }

    /// An expression consumed as a statement, terminated by `;`.
    fn parse_expr_stmt(&mut self) -> Result<ExprStmnt, ParseError> {
        let expr = self.parse_expr()?;
        let span = expr.span();
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(ExprStmnt { expr, span })
    }
}
