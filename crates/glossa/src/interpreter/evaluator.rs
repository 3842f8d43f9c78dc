//! Tree-walking evaluator for plural expressions.

use thiserror::Error;

use crate::parser::ast::{BinOp, Expr};

/// A runtime failure while evaluating a plural expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Division or modulo by zero at the given count.
    #[error("division by zero while evaluating plural expression at n = {n}")]
    DivisionByZero { n: i64 },
}

/// Evaluate an expression with `n` bound to the count.
///
/// All values are signed integers. Comparison and boolean operators yield
/// `1`/`0`; `&&` and `||` short-circuit, so a division in an untaken
/// operand is never evaluated. Arithmetic wraps rather than panics; the
/// only runtime failure is division or modulo by zero.
pub fn eval_expr(expr: &Expr, n: i64) -> Result<i64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Var => Ok(n),
        Expr::Negate(inner) => Ok(eval_expr(inner, n)?.wrapping_neg()),
        Expr::Ternary {
            cond,
            then,
            otherwise,
        } => {
            if eval_expr(cond, n)? != 0 {
                eval_expr(then, n)
            } else {
                eval_expr(otherwise, n)
            }
        }
        Expr::Binary { op, lhs, rhs } => eval_binary(*op, lhs, rhs, n),
    }
}

fn eval_binary(op: BinOp, lhs: &Expr, rhs: &Expr, n: i64) -> Result<i64, EvalError> {
    match op {
        BinOp::And => {
            if eval_expr(lhs, n)? == 0 {
                return Ok(0);
            }
            Ok(i64::from(eval_expr(rhs, n)? != 0))
        }
        BinOp::Or => {
            if eval_expr(lhs, n)? != 0 {
                return Ok(1);
            }
            Ok(i64::from(eval_expr(rhs, n)? != 0))
        }
        BinOp::Eq => Ok(i64::from(eval_expr(lhs, n)? == eval_expr(rhs, n)?)),
        BinOp::Ne => Ok(i64::from(eval_expr(lhs, n)? != eval_expr(rhs, n)?)),
        BinOp::Lt => Ok(i64::from(eval_expr(lhs, n)? < eval_expr(rhs, n)?)),
        BinOp::Le => Ok(i64::from(eval_expr(lhs, n)? <= eval_expr(rhs, n)?)),
        BinOp::Gt => Ok(i64::from(eval_expr(lhs, n)? > eval_expr(rhs, n)?)),
        BinOp::Ge => Ok(i64::from(eval_expr(lhs, n)? >= eval_expr(rhs, n)?)),
        BinOp::Add => Ok(eval_expr(lhs, n)?.wrapping_add(eval_expr(rhs, n)?)),
        BinOp::Sub => Ok(eval_expr(lhs, n)?.wrapping_sub(eval_expr(rhs, n)?)),
        BinOp::Mul => Ok(eval_expr(lhs, n)?.wrapping_mul(eval_expr(rhs, n)?)),
        BinOp::Div => {
            let dividend = eval_expr(lhs, n)?;
            let divisor = eval_expr(rhs, n)?;
            if divisor == 0 {
                return Err(EvalError::DivisionByZero { n });
            }
            Ok(dividend.wrapping_div(divisor))
        }
        BinOp::Rem => {
            let dividend = eval_expr(lhs, n)?;
            let divisor = eval_expr(rhs, n)?;
            if divisor == 0 {
                return Err(EvalError::DivisionByZero { n });
            }
            Ok(dividend.wrapping_rem(divisor))
        }
    }
}
