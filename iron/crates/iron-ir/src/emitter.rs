//! Lowers a parsed `Program` into a `Module`.
//!
//! Only the translation rules spec.md actually names are reachable:
//! `IntLit` and `FuncCall` as a `RetStmnt`'s expression. `BinExpr`,
//! `ExprStmnt`, `Lvalue`, and `VarDeclStmnt` are reserved in the data
//! model but fail cleanly with `EmitError::Unsupported` here rather than
//! being silently accepted.

use std::collections::HashSet;

use iron_par::ast::{Block, Decl, Expr, FuncDefn, Program, Stmt};

use crate::error::EmitError;
use crate::ir::{BasicBlock, Function, Instruction, Module, ValueId};
use crate::mangle;

/// Walks a `Program`'s root namespace and emits a `Module`, in source
/// order, failing on the first unsupported or invalid construct.
pub struct Emitter {
    seen_symbols: HashSet<String>,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            seen_symbols: HashSet::new(),
        }
    }

    pub fn emit(mut self, program: &Program) -> Result<Module, EmitError> {
        let mut module = Module::new();
        let root = &program.namespaces[program.root];

        for decl in &root.decls {
            let Decl::Func(func_defn) = decl;
            let function = self.emit_func_defn(func_defn)?;
            module.functions.push(function);
        }

        Ok(module)
    }

    fn emit_func_defn(&mut self, func_defn: &FuncDefn) -> Result<Function, EmitError> {
        let raw_name = func_defn.name.map(|s| s.as_str().to_string());
        let symbol = match raw_name.as_deref() {
            Some("main") => "main".to_string(),
            Some(name) => mangle::degenerate(name),
            None => format!("anon${}", self.seen_symbols.len()),
        };

        if !self.seen_symbols.insert(symbol.clone()) {
            return Err(EmitError::DuplicateSymbol {
                name: symbol,
                span: func_defn.span,
            });
        }

        let returns_value = !func_defn.func_type.outputs.is_empty();
        let body = self.emit_block(&func_defn.body, &symbol, returns_value)?;

        Ok(Function {
            symbol,
            returns_value,
            body,
        })
    }

    fn emit_block(
        &self,
        block: &Block,
        func_name: &str,
        _returns_value: bool,
    ) -> Result<BasicBlock, EmitError> {
        let mut bb = BasicBlock::new(format!("{func_name}__body"));
        let mut next_value = 0u32;

        if block.stmts.is_empty() {
            bb.instructions.push(Instruction::RetVoid);
            return Ok(bb);
        }

        for stmt in &block.stmts {
            match stmt {
                Stmt::Ret(ret) => match &ret.expr {
                    None => bb.instructions.push(Instruction::RetVoid),
                    Some(expr) => {
                        let value =
                            self.emit_expr(expr, &mut bb.instructions, &mut next_value)?;
                        bb.instructions.push(Instruction::RetValue { value });
                    }
                },
                Stmt::Expr(_) => return Err(EmitError::Unsupported("expression statement")),
                Stmt::VarDecl(_) => return Err(EmitError::Unsupported("variable declaration")),
            }
        }

        if !bb.has_terminator() {
            return Err(EmitError::MissingTerminator {
                name: func_name.to_string(),
                span: block.span,
            });
        }

        Ok(bb)
    }

    fn emit_expr(
        &self,
        expr: &Expr,
        instructions: &mut Vec<Instruction>,
        next_value: &mut u32,
    ) -> Result<ValueId, EmitError> {
        match expr {
            Expr::Int(lit) => {
                let digits = lit.digits.as_str();
                let magnitude: i64 = digits.parse().map_err(|_| EmitError::IntOverflow {
                    digits: digits.to_string(),
                    span: lit.span,
                })?;
                let signed = if lit.negative { -magnitude } else { magnitude };
                let value = i32::try_from(signed).map_err(|_| EmitError::IntOverflow {
                    digits: digits.to_string(),
                    span: lit.span,
                })?;

                let dest = ValueId(*next_value);
                *next_value += 1;
                instructions.push(Instruction::ConstInt { dest, value });
                Ok(dest)
            }
            Expr::Call(call) => {
                let name = call.callee.as_str();
                if !self.seen_symbols.contains(name) {
                    return Err(EmitError::UndefinedCallee {
                        name: name.to_string(),
                        span: call.span,
                    });
                }

                let dest = ValueId(*next_value);
                *next_value += 1;
                instructions.push(Instruction::Call {
                    dest: Some(dest),
                    callee: name.to_string(),
                });
                Ok(dest)
            }
            Expr::Bin(_) => Err(EmitError::Unsupported("binary expression")),
            Expr::Lvalue(_) => Err(EmitError::Unsupported("lvalue reference")),
            Expr::Float(_) => Err(EmitError::Unsupported("float literal")),
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iron_lex::Lexer;
    use iron_par::Parser;

    fn emit(src: &str) -> Result<Module, EmitError> {
        let tokens = Lexer::new(src).unwrap().tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        Emitter::new().emit(&program)
    }

    #[test]
    fn minimal_main_returns_void() {
        let module = emit("fn main { ret ; }").unwrap();
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].symbol, "main");
        assert!(!module.functions[0].returns_value);
        assert!(module.functions[0].body.has_terminator());
    }

    #[test]
    fn integer_literal_return() {
        let module = emit("fn main : () => (x: i32) { ret 7 ; }").unwrap();
        let func = &module.functions[0];
        assert!(func.returns_value);
        assert!(matches!(
            func.body.instructions.last(),
            Some(Instruction::RetValue { .. })
        ));
    }

    #[test]
    fn redefinition_is_rejected() {
        let err = emit("fn main { ret ; } fn main { ret ; }").unwrap_err();
        assert!(matches!(err, EmitError::DuplicateSymbol { .. }));
    }

    #[test]
    fn nested_parens_collapse_to_same_constant() {
        let a = emit("fn f { ret ((1)) ; }").unwrap();
        let b = emit("fn f { ret 1 ; }").unwrap();
        assert_eq!(a.functions[0].body.instructions.len(), b.functions[0].body.instructions.len());
    }

    #[test]
    fn call_to_undefined_function_fails() {
        let err = emit("fn main { ret helper() ; }").unwrap_err();
        assert!(matches!(err, EmitError::UndefinedCallee { .. }));
    }

    #[test]
    fn call_to_previously_defined_function_succeeds() {
        let module = emit("fn helper { ret ; } fn main { ret helper() ; }").unwrap();
        assert_eq!(module.functions.len(), 2);
    }

    #[test]
    fn binary_expression_is_unsupported() {
        let err = emit("fn main { ret 1 + 2 ; }").unwrap_err();
        assert!(matches!(err, EmitError::Unsupported("binary expression")));
    }

    #[test]
    fn int_overflow_is_rejected() {
        let err = emit("fn main { ret 99999999999 ; }").unwrap_err();
        assert!(matches!(err, EmitError::IntOverflow { .. }));
    }
}
