use log::{debug, info};

use crate::ast::{BinExpr, BinOp, Expr};

use super::error::{Diagnostic, SolveError};

/// The result of partially evaluating an expression.
#[derive(Debug)]
pub struct Solved {
    pub expr: Expr,
    /// Diagnostics in the order their operands appear in the expression.
    pub diagnostics: Vec<Diagnostic>,
}

/// Evaluates every operator whose operands are both numbers, bottom-up.
/// Operators above an unbound variable are kept, with their children reduced.
pub fn solve(expr: Expr) -> Result<Solved, SolveError> {
    let mut solver = Solver::new();
    let expr = solver.reduce(expr)?;
    Ok(Solved {
        expr,
        diagnostics: solver.diagnostics,
    })
}

struct Solver {
    diagnostics: Vec<Diagnostic>,
}
impl Solver {
    fn new() -> Self {
        Self {
            diagnostics: vec![],
        }
    }

    fn reduce(&mut self, expr: Expr) -> Result<Expr, SolveError> {
        match expr {
            Expr::Operand(text) => {
                if number(&text).is_none() {
                    info!("Unbound variable {}", text);
                    self.diagnostics.push(Diagnostic::UnboundVariable(text.clone()));
                }
                Ok(Expr::Operand(text))
            }
            Expr::Binary(bin) => {
                let BinExpr { lhs, op, rhs } = *bin;
                let lhs = self.reduce(lhs)?;
                let rhs = self.reduce(rhs)?;

                match (as_number(&lhs), as_number(&rhs)) {
                    (Some(l), Some(r)) => {
                        if op == BinOp::Divide && r == 0.0 {
                            let expr = Expr::binary(lhs, op, rhs);
                            return Err(SolveError::DivisionByZero(expr.to_string()));
                        }
                        let result = format_number(apply(op, l, r));
                        debug!("Evaluated ({} {} {}) to {}", lhs, op, rhs, result);
                        Ok(Expr::Operand(result))
                    }
                    _ => Ok(Expr::binary(lhs, op, rhs)),
                }
            }
        }
    }
}

fn apply(op: BinOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOp::Add => lhs + rhs,
        BinOp::Subtract => lhs - rhs,
        BinOp::Multiply => lhs * rhs,
        BinOp::Divide => lhs / rhs,
        BinOp::Power => lhs.powf(rhs),
    }
}

/// Reads `text` as a number literal.
///
/// A literal starts with a digit or `.`, optionally after a `-` left by an earlier
/// evaluation. Non-finite values are only recognised as `Infinity` and `NaN`, so
/// names like `inf` or `nan` stay variables.
fn number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let is_literal = matches!(unsigned, "Infinity" | "NaN")
        || unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');

    if is_literal {
        text.parse().ok()
    } else {
        None
    }
}

fn as_number(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Operand(text) => number(text),
        Expr::Binary(_) => None,
    }
}

/// Formats a computed value so that [`number`] reads it back as the same value.
/// Integral values keep their fractional part: `6.0`, not `6`.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:?}", value)
    }
}
