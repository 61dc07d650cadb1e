//! Converts a token stream into an expression tree.
mod error;
mod fixity;
mod parser;

pub use error::ParseError;
pub use parser::build;
