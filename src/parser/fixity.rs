//! Operator associativity and precedence.
use std::cmp::Ordering;

use crate::ast::BinOp;

pub type Precedence = u8;

/// A combination of associativity and precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixity {
    assoc: Assoc,
    precedence: Precedence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    #[allow(dead_code)]
    Right,
}

impl Fixity {
    /// Every operator groups to the left, including `^`: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    pub fn for_binop(op: BinOp) -> Self {
        let (assoc, precedence) = match op {
            BinOp::Add | BinOp::Subtract => (Assoc::Left, 1),
            BinOp::Multiply | BinOp::Divide => (Assoc::Left, 2),
            BinOp::Power => (Assoc::Left, 3),
        };
        Self { assoc, precedence }
    }

    /// Assuming `self` is found in left-hand position, and `rhs` is found in right-hand position,
    /// returns whether `self` precedes `other`.
    pub fn precedes_rhs(&self, rhs: &Fixity) -> bool {
        match self.precedence.cmp(&rhs.precedence) {
            Ordering::Greater => true,
            Ordering::Equal => self.assoc == Assoc::Left,
            Ordering::Less => false,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn higher_precedence_always_precedes_lower_precedence() {
        let higher = Fixity {
            assoc: Assoc::Left,
            precedence: 2,
        };
        let lower = Fixity {
            assoc: Assoc::Right,
            precedence: 1,
        };

        assert!(higher.precedes_rhs(&lower));
        assert!(!lower.precedes_rhs(&higher));
    }

    #[test]
    fn lhs_precedes_rhs_when_left_associative_with_equal_precedence() {
        let lhs = Fixity::for_binop(BinOp::Subtract);
        let rhs = Fixity::for_binop(BinOp::Add);

        assert!(lhs.precedes_rhs(&rhs))
    }

    #[test]
    fn rhs_precedes_lhs_when_right_associative_with_equal_precedence() {
        let lhs = Fixity {
            assoc: Assoc::Right,
            precedence: 3,
        };
        let rhs = Fixity::for_binop(BinOp::Power);

        assert!(!lhs.precedes_rhs(&rhs))
    }

    #[test]
    fn power_binds_tightest() {
        let power = Fixity::for_binop(BinOp::Power);
        for op in [BinOp::Add, BinOp::Subtract, BinOp::Multiply, BinOp::Divide] {
            let other = Fixity::for_binop(op);
            assert!(power.precedes_rhs(&other));
            assert!(!other.precedes_rhs(&power));
        }
    }

    #[test]
    fn power_precedes_power() {
        let power = Fixity::for_binop(BinOp::Power);
        assert!(power.precedes_rhs(&power));
    }
}
