//! Partial numeric evaluation of expression trees.
mod error;
mod solver;

pub use error::{Diagnostic, SolveError};
pub use solver::{solve, Solved};
