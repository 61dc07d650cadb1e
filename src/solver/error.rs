use std::fmt::{self, Display};

use thiserror::Error;

/// A failure that stops evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("division by zero in {0}")]
    DivisionByZero(String),
}

/// An expected condition encountered during evaluation, which does not stop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A variable has no value, so the operators above it cannot be evaluated.
    UnboundVariable(String),
}
impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::UnboundVariable(name) => write!(f, "Unbound variable: {}", name),
        }
    }
}
