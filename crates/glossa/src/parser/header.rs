//! Plural-Forms header parser using winnow.
//!
//! Parses gettext-convention headers such as
//! `nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : ...);` into an AST.
//! The expression grammar is the usual C-like one, lowest to highest
//! precedence: ternary, `||`, `&&`, equality, relational, additive,
//! multiplicative, unary minus, primary. Each precedence level is one
//! parser function; left-associative levels parse an operand followed by
//! repeated `(operator, operand)` pairs and fold them into the AST.
//!
//! The clause scaffolding (`nplurals = N ;`? `plural =`) is validated
//! first; input that does not match it at all is rejected as
//! `CompileError::InvalidHeader` without attempting expression parsing.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{BinOp, Expr, Header};
use super::error::CompileError;

/// Parse a complete `Plural-Forms` header into a [`Header`].
pub fn parse_header(input: &str) -> Result<Header, CompileError> {
    let mut remaining = input;

    let Ok(nplurals) = clause_prefix(&mut remaining) else {
        return Err(CompileError::InvalidHeader {
            raw: input.to_string(),
        });
    };

    let expr = match expr(&mut remaining) {
        Ok(expr) => expr,
        Err(e) => {
            return Err(syntax_error(input, remaining, format!("parse error: {e}")));
        }
    };

    // Optional trailing `;` and whitespace, then the input must be exhausted.
    let _ = terminator(&mut remaining);
    if remaining.is_empty() {
        Ok(Header { nplurals, expr })
    } else {
        Err(syntax_error(
            input,
            remaining,
            format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        ))
    }
}

/// Build a syntax error at the current byte offset.
fn syntax_error(original: &str, remaining: &str, message: String) -> CompileError {
    CompileError::Syntax {
        raw: original.to_string(),
        position: original.len() - remaining.len(),
        message,
    }
}

/// Fold an operand and its trailing `(operator, operand)` pairs into a
/// left-associative chain.
fn fold_chain(first: Expr, rest: Vec<(BinOp, Expr)>) -> Expr {
    let mut lhs = first;
    for (op, rhs) in rest {
        lhs = Expr::binary(lhs, op, rhs);
    }
    lhs
}

/// Parse the clause scaffolding up to the selection expression:
/// optional `nplurals = N ;` followed by `plural =`.
fn clause_prefix(input: &mut &str) -> ModalResult<Option<usize>> {
    let _ = ws(input)?;
    let nplurals = opt(nplurals_clause).parse_next(input)?;
    let _ = ("plural", ws, '=', ws).parse_next(input)?;
    Ok(nplurals)
}

/// Parse `nplurals = N ;` where N is a positive integer.
fn nplurals_clause(input: &mut &str) -> ModalResult<usize> {
    delimited(
        ("nplurals", ws, '=', ws),
        digit1.try_map(str::parse::<usize>).verify(|&n| n >= 1),
        (ws, ';', ws),
    )
    .parse_next(input)
}

/// Parse the optional trailing `;` terminator.
fn terminator(input: &mut &str) -> ModalResult<()> {
    (ws, opt((';', ws))).void().parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a full expression (entry point is the lowest-precedence level).
fn expr(input: &mut &str) -> ModalResult<Expr> {
    ternary.parse_next(input)
}

/// Parse a ternary: logicOr ('?' ternary ':' ternary)?
///
/// The branches recurse into `ternary` itself, giving the usual
/// right-associative nesting of chained conditionals.
fn ternary(input: &mut &str) -> ModalResult<Expr> {
    let cond = logic_or(input)?;
    let branches =
        opt(preceded((ws, '?', ws), (ternary, ws, ':', ws, ternary))).parse_next(input)?;
    Ok(match branches {
        Some((then, (), _, (), otherwise)) => Expr::Ternary {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        },
        None => cond,
    })
}

/// Parse a `||` chain (left-associative).
fn logic_or(input: &mut &str) -> ModalResult<Expr> {
    let first = logic_and(input)?;
    let rest: Vec<(BinOp, Expr)> =
        repeat(0.., (delimited(ws, "||".value(BinOp::Or), ws), logic_and)).parse_next(input)?;
    Ok(fold_chain(first, rest))
}

/// Parse a `&&` chain (left-associative).
fn logic_and(input: &mut &str) -> ModalResult<Expr> {
    let first = equality(input)?;
    let rest: Vec<(BinOp, Expr)> =
        repeat(0.., (delimited(ws, "&&".value(BinOp::And), ws), equality)).parse_next(input)?;
    Ok(fold_chain(first, rest))
}

/// Parse `==` / `!=` chains.
fn equality(input: &mut &str) -> ModalResult<Expr> {
    let first = relational(input)?;
    let operator = alt(("==".value(BinOp::Eq), "!=".value(BinOp::Ne)));
    let rest: Vec<(BinOp, Expr)> =
        repeat(0.., (delimited(ws, operator, ws), relational)).parse_next(input)?;
    Ok(fold_chain(first, rest))
}

/// Parse `<` / `<=` / `>` / `>=` chains.
///
/// Two-character operators are tried first so `<=` is never split
/// into `<` followed by a dangling `=`.
fn relational(input: &mut &str) -> ModalResult<Expr> {
    let first = additive(input)?;
    let operator = alt((
        "<=".value(BinOp::Le),
        ">=".value(BinOp::Ge),
        "<".value(BinOp::Lt),
        ">".value(BinOp::Gt),
    ));
    let rest: Vec<(BinOp, Expr)> =
        repeat(0.., (delimited(ws, operator, ws), additive)).parse_next(input)?;
    Ok(fold_chain(first, rest))
}

/// Parse `+` / `-` chains.
fn additive(input: &mut &str) -> ModalResult<Expr> {
    let first = multiplicative(input)?;
    let operator = alt(("+".value(BinOp::Add), "-".value(BinOp::Sub)));
    let rest: Vec<(BinOp, Expr)> =
        repeat(0.., (delimited(ws, operator, ws), multiplicative)).parse_next(input)?;
    Ok(fold_chain(first, rest))
}

/// Parse `*` / `/` / `%` chains.
fn multiplicative(input: &mut &str) -> ModalResult<Expr> {
    let first = unary(input)?;
    let operator = alt((
        "*".value(BinOp::Mul),
        "/".value(BinOp::Div),
        "%".value(BinOp::Rem),
    ));
    let rest: Vec<(BinOp, Expr)> =
        repeat(0.., (delimited(ws, operator, ws), unary)).parse_next(input)?;
    Ok(fold_chain(first, rest))
}

/// Parse an optional unary minus followed by a primary.
fn unary(input: &mut &str) -> ModalResult<Expr> {
    let negate = opt(terminated('-', ws)).parse_next(input)?;
    let value = primary(input)?;
    Ok(match negate {
        Some(_) => Expr::Negate(Box::new(value)),
        None => value,
    })
}

/// Parse a primary: integer literal, the variable `n`, or parentheses.
fn primary(input: &mut &str) -> ModalResult<Expr> {
    alt((
        number,
        'n'.value(Expr::Var),
        delimited(('(', ws), expr, (ws, ')')),
    ))
    .parse_next(input)
}

/// Parse an integer literal.
fn number(input: &mut &str) -> ModalResult<Expr> {
    digit1
        .try_map(str::parse::<i64>)
        .map(Expr::Number)
        .parse_next(input)
}
