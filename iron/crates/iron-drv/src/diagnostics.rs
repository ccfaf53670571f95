//! Renders a [`DriverError`] through `iron_util::diagnostic`, so CLI
//! failures carry a stable code and a source location the same way the
//! `Handler`/`DiagnosticBuilder` API renders them for every other phase,
//! and so the one printed line honors `SILENT` independently of whatever
//! level the `tracing` subscriber is filtering at.

use std::path::Path;

use iron_ir::EmitError;
use iron_lex::LexError;
use iron_par::ParseError;
use iron_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
use iron_util::span::{Span, SourceMap};

use crate::error::DriverError;

/// Maps a `DriverError` to its diagnostic code and, where the error carries
/// one, its source span. Usage errors have no span: they happen before a
/// file has even been read.
fn classify(err: &DriverError) -> (DiagnosticCode, Option<Span>) {
    match err {
        DriverError::MissingInput => (DiagnosticCode::E_USAGE_MISSING_INPUT, None),
        DriverError::MissingOutputValue => (DiagnosticCode::E_USAGE_MISSING_INPUT, None),
        DriverError::ExtraArgument(_) => (DiagnosticCode::E_USAGE_EXTRA_ARGS, None),
        DriverError::UnreadableFile { .. } => (DiagnosticCode::E_USAGE_UNREADABLE_FILE, None),

        DriverError::Lex(e) => match e {
            LexError::NonAscii { span, .. } => (DiagnosticCode::E_LEX_NON_ASCII, Some(*span)),
            LexError::UnexpectedChar { span, .. } => {
                (DiagnosticCode::E_LEX_UNEXPECTED_CHAR, Some(*span))
            }
        },

        DriverError::Parse(e) => match e {
            ParseError::ExpectedToken { span, .. } => {
                (DiagnosticCode::E_PARSE_EXPECTED_TOKEN, Some(*span))
            }
            ParseError::UnexpectedToken { span, .. } => {
                (DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN, Some(*span))
            }
            ParseError::UnexpectedEof { .. } => (DiagnosticCode::E_PARSE_UNEXPECTED_EOF, None),
        },

        // `MissingTerminator`/`Unsupported`/`Io` have no dedicated code in
        // the fixed emit-family taxonomy; `E_EMIT_TOOL_FAILED` is the
        // closest existing bucket for "emission could not complete".
        DriverError::Emit(e) => match e {
            EmitError::DuplicateSymbol { span, .. } => {
                (DiagnosticCode::E_EMIT_DUPLICATE_SYMBOL, Some(*span))
            }
            EmitError::UndefinedCallee { span, .. } => {
                (DiagnosticCode::E_EMIT_UNDEFINED_CALLEE, Some(*span))
            }
            EmitError::IntOverflow { span, .. } => {
                (DiagnosticCode::E_EMIT_INT_OVERFLOW, Some(*span))
            }
            EmitError::MissingTerminator { span, .. } => {
                (DiagnosticCode::E_EMIT_TOOL_FAILED, Some(*span))
            }
            EmitError::Unsupported(_) => (DiagnosticCode::E_EMIT_TOOL_FAILED, None),
            EmitError::ToolFailed { .. } => (DiagnosticCode::E_EMIT_TOOL_FAILED, None),
            EmitError::Io(_) => (DiagnosticCode::E_EMIT_TOOL_FAILED, None),
        },
    }
}

/// Renders `err` as a single diagnostic report: a `code: message` line,
/// followed by a `-->` location and caret when `source` is available and
/// the error carries a span.
///
/// Goes through a fresh [`Handler`] rather than printing directly so the
/// message is always built via [`DiagnosticBuilder`], matching how every
/// other phase's errors are meant to be reported.
pub fn render(input: &Path, source: Option<&str>, err: &DriverError) -> String {
    let (code, span) = classify(err);
    let handler = Handler::new();
    let mut builder = DiagnosticBuilder::error(err.to_string()).code(code);

    let location = source.zip(span).and_then(|(source, span)| {
        let mut map = SourceMap::new();
        let file_id = map.add_file(input.display().to_string(), source.to_string());
        let span = span.with_file_id(file_id);
        builder = builder.span(span);
        map.format_span(span)
    });

    builder.emit(&handler);
    let diag = &handler.diagnostics()[0];

    let mut out = format!("error[{}]: {}", diag.code.unwrap().as_str(), diag.message);
    if let Some(location) = location {
        out.push('\n');
        out.push_str(&location);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn usage_error_has_no_location() {
        let err = DriverError::MissingInput;
        let report = render(&PathBuf::from("main.iron"), None, &err);
        assert!(report.starts_with("error[E_USAGE_MISSING_INPUT]:"));
        assert!(!report.contains("-->"));
    }

    #[test]
    fn spanned_error_renders_a_location() {
        let err = DriverError::Lex(LexError::NonAscii {
            byte: 0xC3,
            span: Span::new(3, 4, 1, 4),
        });
        let report = render(&PathBuf::from("main.iron"), Some("fn \u{e9}"), &err);
        assert!(report.starts_with("error[E_LEX_NON_ASCII]:"));
        assert!(report.contains("--> main.iron:1:4"));
    }
}
