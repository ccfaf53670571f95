//! AST node definitions for the Source Language.
//!
//! Every node carries its source position. Parent nodes exclusively own
//! their children; the sole back-pointer (`FuncDefn` → enclosing
//! `Namespace`) is a non-owning arena index, never `Rc`/`Weak`.

use iron_util::{define_idx, IndexVec, Span, Symbol};

define_idx!(NamespaceId);

/// The complete parse result: every namespace the parser allocated, plus
/// the id of the root. Arena-based so `FuncDefn`'s enclosing-scope
/// reference can be a plain index instead of `Rc`/`Weak`.
#[derive(Debug, Clone)]
pub struct Program {
    pub namespaces: IndexVec<NamespaceId, Namespace>,
    pub root: NamespaceId,
}

/// A lexical scope. The root namespace is named `_`, created at (1, 1)
/// before any declaration is parsed, and has no parent.
#[derive(Debug, Clone)]
pub struct Namespace {
    pub name: Symbol,
    pub parent: Option<NamespaceId>,
    pub decls: Vec<Decl>,
    pub span: Span,
}

impl Namespace {
    pub fn root(name: Symbol, span: Span) -> Self {
        Self {
            name,
            parent: None,
            decls: Vec::new(),
            span,
        }
    }
}

/// A top-level declaration. The grammar currently has exactly one kind.
#[derive(Debug, Clone)]
pub enum Decl {
    Func(FuncDefn),
}

/// A function definition: `'fn' identifier? (':' funcType)? block`.
#[derive(Debug, Clone)]
pub struct FuncDefn {
    /// `None` for an anonymous function.
    pub name: Option<Symbol>,
    /// Synthesized as `() => ()` when the source omits `:funcType`.
    pub func_type: FuncType,
    pub body: Block,
    pub enclosing: NamespaceId,
    pub span: Span,
}

/// A function's type: ordered input declarations and ordered output
/// declarations. The current grammar never produces a non-empty input
/// list (`funcType`'s first parenthesized group is always empty), but the
/// field exists so the data model doesn't need to change when it does.
#[derive(Debug, Clone, Default)]
pub struct FuncType {
    pub inputs: Vec<VarDecl>,
    pub outputs: Vec<VarDecl>,
}

impl FuncType {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// `identifier ':' type?` — a name, optionally typed (`None` ⇒ inferred).
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: Symbol,
    pub ty: Option<Type>,
    pub span: Span,
}

/// `varDecl initializer? ';'`.
#[derive(Debug, Clone)]
pub struct VarDeclStmnt {
    pub decl: VarDecl,
    pub init: Option<Initializer>,
    pub span: Span,
}

/// `'{' (expr (',' expr)*)? '}'`.
#[derive(Debug, Clone)]
pub struct Initializer {
    pub exprs: Vec<Expr>,
    pub span: Span,
}

/// `'{' stmnt* '}'`.
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// `retStmnt | varDeclStmnt | exprStmnt`.
#[derive(Debug, Clone)]
pub enum Stmt {
    Ret(RetStmnt),
    VarDecl(VarDeclStmnt),
    Expr(ExprStmnt),
}

/// An expression used as a statement.
#[derive(Debug, Clone)]
pub struct ExprStmnt {
    pub expr: Expr,
    pub span: Span,
}

/// `'ret' expr? ';'`. No expression means a void return.
#[derive(Debug, Clone)]
pub struct RetStmnt {
    pub expr: Option<Expr>,
    pub span: Span,
}

/// An expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    Bin(BinExpr),
    Call(FuncCall),
    Lvalue(Lvalue),
    Int(IntLit),
    Float(FloatLit),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Bin(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Lvalue(e) => e.span,
            Expr::Int(e) => e.span,
            Expr::Float(e) => e.span,
        }
    }
}

/// A binary operation over `+`, `-`, `*`, `/`.
#[derive(Debug, Clone)]
pub struct BinExpr {
    pub op: BinOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// `identifier '(' ')'`. Arguments are not yet modeled by the grammar;
/// the field always holds an empty `Vec` today.
#[derive(Debug, Clone)]
pub struct FuncCall {
    pub callee: Symbol,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A bare-identifier expression referring to a named storage location.
#[derive(Debug, Clone)]
pub struct Lvalue {
    pub name: Symbol,
    pub span: Span,
}

/// `('-')? number (':' type)?`.
#[derive(Debug, Clone)]
pub struct IntLit {
    pub negative: bool,
    pub digits: Symbol,
    pub ty: Option<Type>,
    pub span: Span,
}

/// `('-')? number '.' number? (':' type)?`.
#[derive(Debug, Clone)]
pub struct FloatLit {
    pub negative: bool,
    pub int_part: Symbol,
    pub frac_part: Option<Symbol>,
    pub ty: Option<Type>,
    pub span: Span,
}

/// `funcType | typename`.
#[derive(Debug, Clone)]
pub enum Type {
    Func(Box<FuncType>),
    Named(Typename),
}

/// A named type reference, e.g. `i32`.
#[derive(Debug, Clone)]
pub struct Typename {
    pub name: Symbol,
    pub span: Span,
}
