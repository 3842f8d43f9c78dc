//! Variable substitution for translated templates.
//!
//! A token is `$` followed by one or more ASCII letters, then zero or more
//! ASCII letters, digits, or `.`. Anything else involving `$` is literal
//! text. Substitution is a single left-to-right pass: replaced text is
//! never rescanned, so values containing `$name` are inserted verbatim.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::types::Value;

/// Replace `$name` / `$name.path` tokens in a template with values looked
/// up in the runtime context.
///
/// Injection never fails. A token that does not resolve inserts the
/// literal text `undefined`; a token resolving to a non-scalar value is
/// stringified best-effort. Both cases report one `InvalidVariableType`
/// diagnostic naming the path.
pub fn inject(template: &str, ctx: Option<&Value>, sink: &dyn DiagnosticSink) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('$') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        // Tokens must start with a letter; `$1`, `$ `, `$$` stay literal.
        let letters = prefix_len(after, |c| c.is_ascii_alphabetic());
        if letters == 0 {
            output.push('$');
            rest = after;
            continue;
        }

        let tail = prefix_len(&after[letters..], |c| c.is_ascii_alphanumeric() || c == '.');
        let path = &after[..letters + tail];
        substitute(path, ctx, sink, &mut output);
        rest = &after[path.len()..];
    }

    output.push_str(rest);
    output
}

/// Length of the leading run of accepted characters.
fn prefix_len(input: &str, accept: impl Fn(char) -> bool) -> usize {
    input.find(|c: char| !accept(c)).unwrap_or(input.len())
}

/// Resolve one token path and append its replacement to the output.
fn substitute(path: &str, ctx: Option<&Value>, sink: &dyn DiagnosticSink, output: &mut String) {
    match ctx.and_then(|root| root.lookup_path(path)) {
        Some(value) => {
            if !value.is_scalar() {
                sink.report(Diagnostic::InvalidVariableType {
                    path: path.to_string(),
                    actual: value.kind(),
                });
            }
            output.push_str(&value.to_string());
        }
        None => {
            sink.report(Diagnostic::InvalidVariableType {
                path: path.to_string(),
                actual: "undefined",
            });
            output.push_str("undefined");
        }
    }
}
