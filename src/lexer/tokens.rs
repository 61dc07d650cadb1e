//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::{ast::BinOp, span::Span};

/// A single token of source text.
///
/// Tokens are not classified by the lexer. Their meaning is decided by
/// [`Token::class`] when they are consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub source: Span,
    pub text: String,
}
impl Token {
    pub fn new(text: impl Into<String>, source: Span) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    /// Constructs a token that was not read from any source text.
    pub fn unsourced(text: impl Into<String>) -> Self {
        Self::new(text, Span::zero())
    }

    pub fn class(&self) -> TokenClass {
        match self.text.as_str() {
            "(" => TokenClass::OpenParen,
            ")" => TokenClass::CloseParen,
            text => BinOp::from_symbol(text)
                .map(TokenClass::Operator)
                .unwrap_or(TokenClass::Operand),
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

/// The syntactic role of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// A number literal or a variable name.
    Operand,
    Operator(BinOp),
    OpenParen,
    CloseParen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_are_operators() {
        assert_eq!(
            TokenClass::Operator(BinOp::Power),
            Token::unsourced("^").class()
        );
        assert_eq!(
            TokenClass::Operator(BinOp::Subtract),
            Token::unsourced("-").class()
        );
    }

    #[test]
    fn parentheses_are_grouping_symbols() {
        assert_eq!(TokenClass::OpenParen, Token::unsourced("(").class());
        assert_eq!(TokenClass::CloseParen, Token::unsourced(")").class());
    }

    #[test]
    fn everything_else_is_an_operand() {
        assert_eq!(TokenClass::Operand, Token::unsourced("x").class());
        assert_eq!(TokenClass::Operand, Token::unsourced("3.5").class());
        assert_eq!(TokenClass::Operand, Token::unsourced("**").class());
    }
}
