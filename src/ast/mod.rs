//! Expression tree definitions
mod expr;
mod postfix;

pub use expr::*;
pub use postfix::Postfix;
