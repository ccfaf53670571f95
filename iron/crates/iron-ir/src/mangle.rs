//! Name mangling.
//!
//! Two manglers are exposed: the degenerate one (just the raw name) is
//! the one the emitter actually uses, matching the source repository's
//! mangling-disabled-by-default switch. The structured mangler encodes
//! input/output arity but is not wired into emission — it exists so a
//! future switch-over doesn't need a new design, only a call-site change.

use iron_par::ast::FuncType;

/// The mangler currently in effect: the function's raw source name.
pub fn degenerate(name: &str) -> String {
    name.to_string()
}

/// `<scope-mangle><F><name-length><name><funcTypeMangle>`. Not called by
/// the emitter today; `funcTypeMangle` placeholder-encodes arity only,
/// since per-parameter type encoding has no counterpart in the current
/// type system.
pub fn structured(scope: &str, name: &str, func_type: &FuncType) -> String {
    format!(
        "{scope}F{}{name}P{}R{}",
        name.len(),
        func_type.inputs.len(),
        func_type.outputs.len(),
    )
}
