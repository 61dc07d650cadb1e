//! Error handling for building expression trees.
use std::fmt;

use thiserror::Error;

use crate::{error::PositionalError, lexer::tokens::Token, span::Span};

/// A malformed expression, indicating both the stage in which the problem was
/// encountered and its cause.
#[derive(Debug, Error)]
#[error("{reason} when parsing {stage}")]
pub struct ParseError {
    stage: Stage,
    reason: Reason,
}

impl ParseError {
    pub fn new(stage: Stage, reason: Reason) -> Self {
        Self { stage, reason }
    }

    #[cfg(test)]
    pub fn stage(&self) -> Stage {
        self.stage
    }
    #[cfg(test)]
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl PositionalError for ParseError {
    fn range(&self) -> Span {
        match &self.reason {
            Reason::MissingOperand(tok)
            | Reason::UnmatchedCloseParen(tok)
            | Reason::UnclosedParen(tok) => tok.source,
            Reason::MissingOperator(span) => *span,
            Reason::EmptyExpression => Span::zero(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Reason {
    #[error("missing operand for {0}")]
    MissingOperand(Token),
    #[error("missing operator")]
    MissingOperator(Span),
    #[error("unmatched {0}")]
    UnmatchedCloseParen(Token),
    #[error("unclosed {0}")]
    UnclosedParen(Token),
    #[error("empty expression")]
    EmptyExpression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Applying an operator to its operands.
    Operator,
    /// The end of a parenthesised expression.
    ParenExprEnd,
    /// The end of the whole expression.
    ExprEnd,
}
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Stage::Operator => "an operator application",
            Stage::ParenExprEnd => "the end of a parenthesised expression",
            Stage::ExprEnd => "the end of the expression",
        })
    }
}

pub fn failure<R>(stage: Stage, reason: Reason) -> Result<R, ParseError> {
    Err(ParseError::new(stage, reason))
}
