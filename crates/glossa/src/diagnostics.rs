//! Diagnostic reporting for translation failures.
//!
//! Nothing in this crate raises across the `resolve_*` boundary: every
//! failure is converted into a [`Diagnostic`], handed to the injected
//! [`DiagnosticSink`], and the call proceeds with a fallback value. The
//! sink collaborator decides logging and alerting policy.

use std::mem;
use std::sync::Mutex;

use serde::Serialize;
use thiserror::Error;

use crate::parser::CompileError;

/// A reported error or warning. Delivered to a [`DiagnosticSink`], never
/// returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    /// A `Plural-Forms` header did not match the clause shape at all.
    #[error("invalid plural-forms header: {raw:?}")]
    InvalidHeader { raw: String },

    /// A `Plural-Forms` expression failed to parse.
    #[error("syntax error at byte {position} of plural expression {raw:?}: {message}")]
    SyntaxError {
        raw: String,
        position: usize,
        message: String,
    },

    /// A `$variable` resolved to something other than a string or number
    /// (including not resolving at all).
    #[error("cannot inject ${path}: {actual} is not a string or number")]
    InvalidVariableType { path: String, actual: &'static str },

    /// A resolve call was made without its mandatory runtime context.
    #[error("{function} called without a runtime context")]
    MissingArgument { function: &'static str },

    /// A plural rule divided by zero while evaluating at a count.
    #[error("division by zero while evaluating plural rule at n = {n}")]
    DivisionByZero { n: i64 },

    /// A computed form index fell outside the available forms.
    #[error("plural form {index} out of range, {available} forms available")]
    FormOutOfRange { index: i64, available: usize },
}

impl From<CompileError> for Diagnostic {
    fn from(error: CompileError) -> Self {
        match error {
            CompileError::InvalidHeader { raw } => Diagnostic::InvalidHeader { raw },
            CompileError::Syntax {
                raw,
                position,
                message,
            } => Diagnostic::SyntaxError {
                raw,
                position,
                message,
            },
        }
    }
}

/// The single side-effecting collaborator of this crate.
///
/// Implementations must be `Send + Sync` so a [`crate::Resolver`] can be
/// shared across threads.
pub trait DiagnosticSink: Send + Sync {
    /// Deliver one diagnostic. Must not panic.
    fn report(&self, diagnostic: Diagnostic);
}

/// A sink that discards every diagnostic.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// A sink that logs every diagnostic through `tracing` at warn level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "translation diagnostic");
    }
}

/// A sink that accumulates diagnostics for later inspection.
///
/// Useful in tests and for batch reporting.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the diagnostics reported so far.
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().expect("diagnostic lock poisoned").clone()
    }

    /// Drain all reported diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        mem::take(&mut *self.reports.lock().expect("diagnostic lock poisoned"))
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.reports
            .lock()
            .expect("diagnostic lock poisoned")
            .push(diagnostic);
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: Diagnostic) {
        self(diagnostic);
    }
}
