//! Evaluation of compiled plural rules.
//!
//! This module turns parsed headers into reusable [`PluralRule`] values
//! and provides the tree-walking evaluator behind them.

mod evaluator;
mod rule;

pub use evaluator::{EvalError, eval_expr};
pub use rule::{PluralRule, compile};
