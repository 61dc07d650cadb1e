//! Expression tree nodes.
use std::fmt::{self, Display};

use super::Postfix;

/// A node of the expression tree.
///
/// Leaves are always operands and inner nodes are always binary operators,
/// so an operator can never appear without both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A number literal or a variable name, kept as written.
    Operand(String),
    Binary(Box<BinExpr>),
}
impl Expr {
    pub fn operand(text: impl Into<String>) -> Self {
        Self::Operand(text.into())
    }

    pub fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        Self::Binary(Box::new(BinExpr { lhs, op, rhs }))
    }

    /// Iterates over the elements of the tree in post-order.
    pub fn postfix(&self) -> Postfix<'_> {
        Postfix::new(self)
    }

    /// Renders the tree in postfix notation, separating elements by a single space.
    pub fn postfix_string(&self) -> String {
        self.postfix().collect::<Vec<_>>().join(" ")
    }
}

/// Renders the expression in infix notation, wrapping every operator
/// application in parentheses.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Operand(text) => f.write_str(text),
            Expr::Binary(bin) => write!(f, "{}", bin),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinExpr {
    pub lhs: Expr,
    pub op: BinOp,
    pub rhs: Expr,
}
impl Display for BinExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op, self.rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}
impl BinOp {
    /// Looks up the operator written as `symbol`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => BinOp::Add,
            "-" => BinOp::Subtract,
            "*" => BinOp::Multiply,
            "/" => BinOp::Divide,
            "^" => BinOp::Power,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Power => "^",
        }
    }
}
impl Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expr {
        // x + 2 * 3
        Expr::binary(
            Expr::operand("x"),
            BinOp::Add,
            Expr::binary(Expr::operand("2"), BinOp::Multiply, Expr::operand("3")),
        )
    }

    #[test]
    fn leaf_prints_verbatim() {
        assert_eq!("3.50", Expr::operand("3.50").to_string());
    }

    #[test]
    fn every_operator_is_parenthesised() {
        assert_eq!("(x + (2 * 3))", sample().to_string());
    }

    #[test]
    fn postfix_places_operators_after_operands() {
        assert_eq!("x 2 3 * +", sample().postfix_string());
    }

    #[test]
    fn postfix_of_leaf_is_the_leaf() {
        assert_eq!(vec!["y"], Expr::operand("y").postfix().collect::<Vec<_>>());
    }

    #[test]
    fn postfix_can_be_repeated() {
        let expr = sample();
        assert_eq!(expr.postfix_string(), expr.postfix_string());
    }

    #[test]
    fn symbols_round_trip() {
        for op in [
            BinOp::Add,
            BinOp::Subtract,
            BinOp::Multiply,
            BinOp::Divide,
            BinOp::Power,
        ] {
            assert_eq!(Some(op), BinOp::from_symbol(op.symbol()));
        }
        assert_eq!(None, BinOp::from_symbol("%"));
    }
}
