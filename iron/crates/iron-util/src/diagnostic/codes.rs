//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and suppress
//! specific warnings. Codes are grouped by compiler phase, mirroring the
//! four-stage pipeline (usage, lex, parse, emission) rather than a flat
//! numbering scheme.
//!
//! # Examples
//!
//! ```
//! use iron_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E_LEX_UNEXPECTED_CHAR");
//! ```

/// A unique code identifying a diagnostic message.
///
/// Diagnostic codes are phase-prefixed constants (`E_LEX_*`, `E_PARSE_*`,
/// `E_EMIT_*`, `E_USAGE_*`, `W_*`) rather than sequential numbers, so the
/// phase that produced a diagnostic is visible at the call site and in any
/// output that prints the code.
///
/// # Examples
///
/// ```
/// use iron_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", "LEX_UNEXPECTED_CHAR");
/// assert_eq!(code.as_str(), "E_LEX_UNEXPECTED_CHAR");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The severity prefix ("E" for error, "W" for warning).
    pub prefix: &'static str,
    /// The phase-and-reason name, e.g. `"LEX_UNEXPECTED_CHAR"`.
    pub name: &'static str,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, name: &'static str) -> Self {
        Self { prefix, name }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The full code string, e.g. `"E_LEX_UNEXPECTED_CHAR"`.
    pub fn as_str(&self) -> String {
        format!("{}_{}", self.prefix, self.name)
    }

    // =========================================================================
    // USAGE (driver CLI / file I/O)
    // =========================================================================

    /// No input file was given on the command line.
    pub const E_USAGE_MISSING_INPUT: Self = Self::new("E", "USAGE_MISSING_INPUT");
    /// More positional arguments were given than the driver accepts.
    pub const E_USAGE_EXTRA_ARGS: Self = Self::new("E", "USAGE_EXTRA_ARGS");
    /// The input file could not be opened or read.
    pub const E_USAGE_UNREADABLE_FILE: Self = Self::new("E", "USAGE_UNREADABLE_FILE");

    // =========================================================================
    // LEX
    // =========================================================================

    /// A byte outside the ASCII range was encountered.
    pub const E_LEX_NON_ASCII: Self = Self::new("E", "LEX_NON_ASCII");
    /// No lexical production matched at a forward-progress point.
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", "LEX_UNEXPECTED_CHAR");

    // =========================================================================
    // PARSE
    // =========================================================================

    /// A production committed to a shape but the expected token was absent.
    pub const E_PARSE_EXPECTED_TOKEN: Self = Self::new("E", "PARSE_EXPECTED_TOKEN");
    /// A token appeared where no production could start.
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", "PARSE_UNEXPECTED_TOKEN");
    /// Input ended while a production was still expecting more tokens.
    pub const E_PARSE_UNEXPECTED_EOF: Self = Self::new("E", "PARSE_UNEXPECTED_EOF");

    // =========================================================================
    // EMISSION
    // =========================================================================

    /// Two definitions in the same namespace share a name.
    pub const E_EMIT_DUPLICATE_SYMBOL: Self = Self::new("E", "EMIT_DUPLICATE_SYMBOL");
    /// A call site names a function with no matching definition.
    pub const E_EMIT_UNDEFINED_CALLEE: Self = Self::new("E", "EMIT_UNDEFINED_CALLEE");
    /// An integer literal's digit sequence does not fit in 32 bits.
    pub const E_EMIT_INT_OVERFLOW: Self = Self::new("E", "EMIT_INT_OVERFLOW");
    /// The external assembler or linker exited with a non-zero status.
    pub const E_EMIT_TOOL_FAILED: Self = Self::new("E", "EMIT_TOOL_FAILED");

    // =========================================================================
    // WARNINGS
    // =========================================================================

    /// A local variable is declared but never read.
    pub const W_UNUSED_VARIABLE: Self = Self::new("W", "UNUSED_VARIABLE");
    /// A function is defined but never called and is not `main`.
    pub const W_UNUSED_FUNCTION: Self = Self::new("W", "UNUSED_FUNCTION");
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Standalone constant exports for convenience (re-exported from `mod.rs`).
pub const E_USAGE_MISSING_INPUT: DiagnosticCode = DiagnosticCode::E_USAGE_MISSING_INPUT;
pub const E_USAGE_EXTRA_ARGS: DiagnosticCode = DiagnosticCode::E_USAGE_EXTRA_ARGS;
pub const E_USAGE_UNREADABLE_FILE: DiagnosticCode = DiagnosticCode::E_USAGE_UNREADABLE_FILE;
pub const E_LEX_NON_ASCII: DiagnosticCode = DiagnosticCode::E_LEX_NON_ASCII;
pub const E_LEX_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
pub const E_PARSE_EXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::E_PARSE_EXPECTED_TOKEN;
pub const E_PARSE_UNEXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN;
pub const E_PARSE_UNEXPECTED_EOF: DiagnosticCode = DiagnosticCode::E_PARSE_UNEXPECTED_EOF;
pub const E_EMIT_DUPLICATE_SYMBOL: DiagnosticCode = DiagnosticCode::E_EMIT_DUPLICATE_SYMBOL;
pub const E_EMIT_UNDEFINED_CALLEE: DiagnosticCode = DiagnosticCode::E_EMIT_UNDEFINED_CALLEE;
pub const E_EMIT_INT_OVERFLOW: DiagnosticCode = DiagnosticCode::E_EMIT_INT_OVERFLOW;
pub const E_EMIT_TOOL_FAILED: DiagnosticCode = DiagnosticCode::E_EMIT_TOOL_FAILED;
pub const W_UNUSED_VARIABLE: DiagnosticCode = DiagnosticCode::W_UNUSED_VARIABLE;
pub const W_UNUSED_FUNCTION: DiagnosticCode = DiagnosticCode::W_UNUSED_FUNCTION;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", "LEX_NON_ASCII");
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.name(), "LEX_NON_ASCII");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(DiagnosticCode::E_USAGE_MISSING_INPUT.as_str(), "E_USAGE_MISSING_INPUT");
        assert_eq!(DiagnosticCode::W_UNUSED_VARIABLE.as_str(), "W_UNUSED_VARIABLE");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiagnosticCode::E_PARSE_UNEXPECTED_EOF), "E_PARSE_UNEXPECTED_EOF");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::E_EMIT_TOOL_FAILED),
            "DiagnosticCode(E_EMIT_TOOL_FAILED)"
        );
    }

    #[test]
    fn test_code_equality() {
        let a = DiagnosticCode::new("E", "LEX_NON_ASCII");
        let b = DiagnosticCode::new("E", "LEX_NON_ASCII");
        let c = DiagnosticCode::new("E", "LEX_UNEXPECTED_CHAR");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_const_codes() {
        const CODE: DiagnosticCode = DiagnosticCode::E_EMIT_DUPLICATE_SYMBOL;
        assert_eq!(CODE.prefix(), "E");
        assert_eq!(CODE.name(), "EMIT_DUPLICATE_SYMBOL");
    }
}
