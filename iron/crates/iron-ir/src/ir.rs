//! In-memory IR data model and its textual serialization.
//!
//! This is not the Source Language's source syntax and not any particular
//! real-world IR — it is the small internal form the emitter builds
//! in-memory before writing it out as text for the external assembler.

use std::fmt;

/// A value produced within a single function, numbered in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueId(pub u32);

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A compilation unit: every function emitted from a Namespace, in
/// source order.
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One emitted function. `returns_value` mirrors whether its `FuncDefn`
/// had a non-empty output list; the language currently lowers any
/// non-empty output list to a single 32-bit signed return.
#[derive(Debug, Clone)]
pub struct Function {
    /// The external symbol — either the degenerate-mangled source name,
    /// or the literal `main` for the platform entry point.
    pub symbol: String,
    pub returns_value: bool,
    pub body: BasicBlock,
}

/// A single basic block. The emitter currently only ever produces one
/// per function, named `<name>__body`.
#[derive(Debug, Clone)]
pub struct BasicBlock {
    pub label: String,
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instructions: Vec::new(),
        }
    }

    /// Whether the block ends in a terminator, per invariant 4.
    pub fn has_terminator(&self) -> bool {
        matches!(
            self.instructions.last(),
            Some(Instruction::RetVoid) | Some(Instruction::RetValue { .. })
        )
    }
}

/// An IR instruction.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// Materializes a 32-bit constant into `dest`.
    ConstInt { dest: ValueId, value: i32 },
    /// Calls `callee` by name. `dest` is `Some` when the result is used.
    Call {
        dest: Option<ValueId>,
        callee: String,
    },
    /// `dest = lhs + rhs`, 32-bit signed. Never constructed yet: the
    /// emitter rejects `BinExpr` as `Unsupported` before reaching this
    /// point, same status as the AST's own unreachable `BinExpr` node.
    Add {
        dest: ValueId,
        lhs: ValueId,
        rhs: ValueId,
    },
    /// `dest = lhs - rhs`, 32-bit signed.
    Sub {
        dest: ValueId,
        lhs: ValueId,
        rhs: ValueId,
    },
    /// `dest = lhs * rhs`, 32-bit signed.
    Mul {
        dest: ValueId,
        lhs: ValueId,
        rhs: ValueId,
    },
    /// `dest = lhs / rhs`, 32-bit signed division.
    Sdiv {
        dest: ValueId,
        lhs: ValueId,
        rhs: ValueId,
    },
    /// Returns without a value.
    RetVoid,
    /// Returns the value produced by `value`.
    RetValue { value: ValueId },
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for func in &self.functions {
            writeln!(f, "{func}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ret_ty = if self.returns_value { "i32" } else { "void" };
        writeln!(f, "func {} -> {ret_ty} {{", self.symbol)?;
        writeln!(f, "{}:", self.body.label)?;
        for inst in &self.body.instructions {
            writeln!(f, "    {inst}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::ConstInt { dest, value } => write!(f, "{dest} = const.i32 {value}"),
            Instruction::Call { dest: Some(d), callee } => write!(f, "{d} = call {callee}()"),
            Instruction::Call { dest: None, callee } => write!(f, "call {callee}()"),
            Instruction::Add { dest, lhs, rhs } => write!(f, "{dest} = add.i32 {lhs}, {rhs}"),
            Instruction::Sub { dest, lhs, rhs } => write!(f, "{dest} = sub.i32 {lhs}, {rhs}"),
            Instruction::Mul { dest, lhs, rhs } => write!(f, "{dest} = mul.i32 {lhs}, {rhs}"),
            Instruction::Sdiv { dest, lhs, rhs } => write!(f, "{dest} = sdiv.i32 {lhs}, {rhs}"),
            Instruction::RetVoid => write!(f, "ret.void"),
            Instruction::RetValue { value } => write!(f, "ret {value}"),
        }
    }
}
