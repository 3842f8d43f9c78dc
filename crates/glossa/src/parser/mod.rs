//! Plural-Forms header parser.
//!
//! This module parses gettext-style `Plural-Forms` strings into an AST.
//! The AST is public so external tooling (catalog validators, linters)
//! can inspect selection expressions without evaluating them.

pub mod ast;
pub mod error;
mod header;

pub use ast::{BinOp, Expr, Header};
pub use error::CompileError;
pub use header::parse_header;
