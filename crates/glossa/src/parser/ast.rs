//! Public AST types for Plural-Forms expressions.
//!
//! These types are public to enable external tooling (linters, catalog
//! validators, etc.).

/// A parsed `Plural-Forms` header.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Declared form count from the `nplurals = N;` clause, when present.
    pub nplurals: Option<usize>,
    /// The selection expression from the `plural = ...` clause.
    pub expr: Expr,
}

/// A node in a plural selection expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// The bound count variable `n`.
    Var,
    /// Unary minus.
    Negate(Box<Expr>),
    /// A binary operation: lhs op rhs.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// The C ternary: cond ? then : otherwise.
    Ternary {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    /// Build a binary node from already-parsed operands.
    pub(crate) fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// A binary operator, ordered here from lowest to highest precedence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `||` (short-circuit)
    Or,
    /// `&&` (short-circuit)
    And,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (truncating integer division)
    Div,
    /// `%`
    Rem,
}
