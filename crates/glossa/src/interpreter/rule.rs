//! Compiled plural rules and the compile cache.
//!
//! Compilation is memoized per thread, keyed by the raw header string.
//! The set of distinct headers in a process is small (one per locale in
//! use), and compiling the same string twice always yields behaviorally
//! identical rules, so caching both successes and failures is idempotent.
//! The cache is initialized lazily on first access within each thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::evaluator::{EvalError, eval_expr};
use crate::parser::ast::{Expr, Header};
use crate::parser::{CompileError, parse_header};

thread_local! {
    /// Per-thread cache of compilation results keyed by header string.
    static RULE_CACHE: RefCell<HashMap<String, Result<Rc<PluralRule>, CompileError>>> =
        RefCell::new(HashMap::new());
}

/// A compiled plural rule: a pure function from a count to a raw form value.
///
/// Immutable once compiled; the same rule always computes the same value
/// for the same `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralRule {
    nplurals: Option<usize>,
    expr: Expr,
}

impl PluralRule {
    /// Form count declared by the header's `nplurals` clause, if any.
    pub fn nplurals(&self) -> Option<usize> {
        self.nplurals
    }

    /// Evaluate the rule at a count, returning the raw expression value.
    ///
    /// The value is not yet a form index: callers are responsible for
    /// clamping negative or out-of-range results.
    pub fn evaluate(&self, n: i64) -> Result<i64, EvalError> {
        eval_expr(&self.expr, n)
    }
}

impl From<Header> for PluralRule {
    fn from(header: Header) -> Self {
        PluralRule {
            nplurals: header.nplurals,
            expr: header.expr,
        }
    }
}

/// Compile a `Plural-Forms` header into a shared [`PluralRule`].
///
/// Results are memoized per thread on the raw input string, so repeated
/// lookups against the same catalog never re-parse the header.
///
/// # Example
///
/// ```
/// use glossa::compile;
///
/// let rule = compile("nplurals=2; plural=(n != 1)").unwrap();
/// assert_eq!(rule.nplurals(), Some(2));
/// assert_eq!(rule.evaluate(1).unwrap(), 0);
/// assert_eq!(rule.evaluate(5).unwrap(), 1);
/// ```
pub fn compile(expression: &str) -> Result<Rc<PluralRule>, CompileError> {
    RULE_CACHE.with_borrow_mut(|cache| {
        if let Some(cached) = cache.get(expression) {
            return cached.clone();
        }
        let compiled = parse_header(expression).map(|header| Rc::new(PluralRule::from(header)));
        cache.insert(expression.to_string(), compiled.clone());
        compiled
    })
}
