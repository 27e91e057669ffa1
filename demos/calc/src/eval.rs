//! Tree-walking evaluation of calculator expressions.
//!
//! All arithmetic is checked `i64`. Every failure is reported through the
//! [`DiagnosticEngine`] at the offending operator's location, and the
//! evaluation of the enclosing expression stops.

use parlance_diagnostic::DiagnosticEngine;
use parlance_source::Location;

use crate::ast::{BinaryOp, Expr, UnaryOp};

/// Evaluates `expr`, reporting arithmetic failures through `engine`.
pub fn evaluate(expr: &Expr, engine: &mut DiagnosticEngine) -> Option<i64> {
    match expr {
        Expr::Int { value, .. } => Some(*value),
        Expr::Unary {
            op,
            location,
            operand,
        } => {
            let value = evaluate(operand, engine)?;
            match op {
                UnaryOp::Pos => Some(value),
                UnaryOp::Neg => checked(value.checked_neg(), "negation", *location, engine),
            }
        }
        Expr::Binary {
            op,
            location,
            left,
            right,
        } => {
            let lhs = evaluate(left, engine)?;
            let rhs = evaluate(right, engine)?;
            apply(*op, lhs, rhs, *location, engine)
        }
    }
}

fn apply(
    op: BinaryOp,
    lhs: i64,
    rhs: i64,
    location: Location,
    engine: &mut DiagnosticEngine,
) -> Option<i64> {
    match op {
        BinaryOp::Add => checked(lhs.checked_add(rhs), "addition", location, engine),
        BinaryOp::Sub => checked(lhs.checked_sub(rhs), "subtraction", location, engine),
        BinaryOp::Mul => checked(lhs.checked_mul(rhs), "multiplication", location, engine),
        BinaryOp::Div => {
            if rhs == 0 {
                engine.error(location, "division by zero");
                return None;
            }
            checked(lhs.checked_div(rhs), "division", location, engine)
        }
        BinaryOp::Rem => {
            if rhs == 0 {
                engine.error(location, "modulo by zero");
                return None;
            }
            checked(lhs.checked_rem(rhs), "remainder", location, engine)
        }
        BinaryOp::Pow => pow(lhs, rhs, location, engine),
    }
}

/// `base ** exponent`, requiring a non-negative exponent.
fn pow(base: i64, exponent: i64, location: Location, engine: &mut DiagnosticEngine) -> Option<i64> {
    if exponent < 0 {
        engine.error(location, "negative exponent in integer power");
        return None;
    }
    let Ok(exponent) = u32::try_from(exponent) else {
        engine.error(location, "exponent too large");
        return None;
    };
    checked(base.checked_pow(exponent), "power", location, engine)
}

fn checked(
    result: Option<i64>,
    operation: &str,
    location: Location,
    engine: &mut DiagnosticEngine,
) -> Option<i64> {
    if result.is_none() {
        engine.error(location, format!("integer overflow in {operation}"));
    }
    result
}
