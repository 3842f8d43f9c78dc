//! Tests for Plural-Forms header parsing.

use glossa::parser::{BinOp, CompileError, Expr, parse_header};

fn num(n: i64) -> Expr {
    Expr::Number(n)
}

fn bin(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

// =============================================================================
// Accepted headers
// =============================================================================

#[test]
fn parse_minimal_header() {
    let header = parse_header("plural=0").unwrap();
    assert_eq!(header.nplurals, None);
    assert_eq!(header.expr, num(0));
}

#[test]
fn parse_header_with_nplurals() {
    let header = parse_header("nplurals=2; plural=n != 1").unwrap();
    assert_eq!(header.nplurals, Some(2));
    assert_eq!(header.expr, bin(BinOp::Ne, Expr::Var, num(1)));
}

#[test]
fn parse_header_with_trailing_semicolon() {
    let header = parse_header("nplurals=2; plural=(n != 1);").unwrap();
    assert_eq!(header.nplurals, Some(2));
    assert_eq!(header.expr, bin(BinOp::Ne, Expr::Var, num(1)));
}

#[test]
fn parse_header_tolerates_whitespace() {
    let header = parse_header("  nplurals = 2 ;  plural = ( n != 1 ) ;  ").unwrap();
    assert_eq!(header.nplurals, Some(2));
    assert_eq!(header.expr, bin(BinOp::Ne, Expr::Var, num(1)));
}

#[test]
fn parse_header_without_spaces() {
    let header = parse_header("nplurals=3;plural=n%10==1?0:1").unwrap();
    assert_eq!(header.nplurals, Some(3));
}

// =============================================================================
// Expression structure
// =============================================================================

#[test]
fn multiplication_binds_tighter_than_addition() {
    let header = parse_header("plural=1+2*3").unwrap();
    assert_eq!(
        header.expr,
        bin(BinOp::Add, num(1), bin(BinOp::Mul, num(2), num(3)))
    );
}

#[test]
fn modulo_binds_tighter_than_comparison() {
    let header = parse_header("plural=n%10==1").unwrap();
    assert_eq!(
        header.expr,
        bin(BinOp::Eq, bin(BinOp::Rem, Expr::Var, num(10)), num(1))
    );
}

#[test]
fn comparison_binds_tighter_than_logic() {
    let header = parse_header("plural=n>1 && n<5").unwrap();
    assert_eq!(
        header.expr,
        bin(
            BinOp::And,
            bin(BinOp::Gt, Expr::Var, num(1)),
            bin(BinOp::Lt, Expr::Var, num(5)),
        )
    );
}

#[test]
fn and_binds_tighter_than_or() {
    let header = parse_header("plural=n==1 || n==2 && n==3").unwrap();
    assert_eq!(
        header.expr,
        bin(
            BinOp::Or,
            bin(BinOp::Eq, Expr::Var, num(1)),
            bin(
                BinOp::And,
                bin(BinOp::Eq, Expr::Var, num(2)),
                bin(BinOp::Eq, Expr::Var, num(3)),
            ),
        )
    );
}

#[test]
fn subtraction_is_left_associative() {
    let header = parse_header("plural=5-2-1").unwrap();
    assert_eq!(
        header.expr,
        bin(BinOp::Sub, bin(BinOp::Sub, num(5), num(2)), num(1))
    );
}

#[test]
fn chained_ternary_nests_to_the_right() {
    let header = parse_header("plural=n ? 1 : n ? 2 : 3").unwrap();
    assert_eq!(
        header.expr,
        Expr::Ternary {
            cond: Box::new(Expr::Var),
            then: Box::new(num(1)),
            otherwise: Box::new(Expr::Ternary {
                cond: Box::new(Expr::Var),
                then: Box::new(num(2)),
                otherwise: Box::new(num(3)),
            }),
        }
    );
}

#[test]
fn unary_minus() {
    let header = parse_header("plural=-1").unwrap();
    assert_eq!(header.expr, Expr::Negate(Box::new(num(1))));
}

#[test]
fn parentheses_override_precedence() {
    let header = parse_header("plural=(1+2)*3").unwrap();
    assert_eq!(
        header.expr,
        bin(BinOp::Mul, bin(BinOp::Add, num(1), num(2)), num(3))
    );
}

// =============================================================================
// Invalid clause shape
// =============================================================================

#[test]
fn garbage_is_an_invalid_header() {
    let err = parse_header("garbage").unwrap_err();
    assert_eq!(
        err,
        CompileError::InvalidHeader {
            raw: "garbage".to_string()
        }
    );
}

#[test]
fn empty_input_is_an_invalid_header() {
    assert!(matches!(
        parse_header("").unwrap_err(),
        CompileError::InvalidHeader { .. }
    ));
}

#[test]
fn bare_expression_is_an_invalid_header() {
    // The `plural=` clause is mandatory.
    assert!(matches!(
        parse_header("(n != 1)").unwrap_err(),
        CompileError::InvalidHeader { .. }
    ));
}

#[test]
fn nplurals_without_plural_clause_is_invalid() {
    assert!(matches!(
        parse_header("nplurals=2;").unwrap_err(),
        CompileError::InvalidHeader { .. }
    ));
}

#[test]
fn zero_nplurals_is_invalid() {
    assert!(matches!(
        parse_header("nplurals=0; plural=0").unwrap_err(),
        CompileError::InvalidHeader { .. }
    ));
}

#[test]
fn misspelled_plural_keyword_is_invalid() {
    assert!(matches!(
        parse_header("plurals=1").unwrap_err(),
        CompileError::InvalidHeader { .. }
    ));
}

// =============================================================================
// Expression syntax errors
// =============================================================================

#[test]
fn unbalanced_parenthesis_is_a_syntax_error() {
    let err = parse_header("plural=(n").unwrap_err();
    assert!(matches!(err, CompileError::Syntax { .. }));
}

#[test]
fn dangling_operator_is_a_syntax_error() {
    let err = parse_header("plural=n +").unwrap_err();
    assert!(matches!(err, CompileError::Syntax { .. }));
}

#[test]
fn incomplete_ternary_is_a_syntax_error() {
    let err = parse_header("plural=n ? 1").unwrap_err();
    assert!(matches!(err, CompileError::Syntax { .. }));
}

#[test]
fn trailing_garbage_is_a_syntax_error() {
    let err = parse_header("plural=n != 1 huh").unwrap_err();
    let CompileError::Syntax { raw, position, .. } = err else {
        panic!("expected syntax error");
    };
    assert_eq!(raw, "plural=n != 1 huh");
    assert!(position <= raw.len());
}

#[test]
fn syntax_error_carries_the_raw_input() {
    let CompileError::Syntax { raw, .. } = parse_header("plural=(n != 1").unwrap_err() else {
        panic!("expected syntax error");
    };
    assert_eq!(raw, "plural=(n != 1");
}
