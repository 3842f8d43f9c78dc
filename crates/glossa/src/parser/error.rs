//! Compile error types for Plural-Forms headers.

use thiserror::Error;

/// An error that occurred while compiling a `Plural-Forms` header.
///
/// `CompileError` is `Clone` so compilation results (including failures)
/// can be memoized and replayed from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The input does not match the `nplurals=N; plural=EXPR;` clause shape.
    ///
    /// This is detected before any expression parsing is attempted.
    #[error("plural-forms header does not match 'nplurals=N; plural=EXPRESSION;': {raw:?}")]
    InvalidHeader { raw: String },

    /// The clause shape matched but the selection expression is malformed.
    #[error("syntax error at byte {position} of plural expression {raw:?}: {message}")]
    Syntax {
        raw: String,
        position: usize,
        message: String,
    },
}
