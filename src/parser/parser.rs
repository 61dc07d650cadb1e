//! Operator-precedence ("shunting yard") construction of expression trees.
use std::iter;

use log::{debug, trace};

use crate::{
    ast::{BinOp, Expr},
    lexer::tokens::{Token, TokenClass},
    span::Span,
};

use super::{
    error::{failure, ParseError, Reason, Stage},
    fixity::Fixity,
};

/// Builds an expression tree from a complete token sequence.
pub fn build<I>(tokens: I) -> Result<Expr, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    let mut builder = TreeBuilder::new();

    // `None` is the closing sentinel, matching the opening sentinel the builder starts with.
    for token in tokens.into_iter().map(Some).chain(iter::once(None)) {
        builder.consume(token)?;
    }

    let expr = builder.finish()?;
    debug!("Built expression tree {}", expr);
    Ok(expr)
}

/// Builds an expression tree from bare token strings, as produced by any tokenizer.
#[allow(dead_code)]
pub fn build_from_strs<'a, I>(tokens: I) -> Result<Expr, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    build(tokens.into_iter().map(Token::unsourced))
}

/// An entry on the operator stack.
#[derive(Debug)]
enum Pending {
    /// An opening parenthesis. The sentinel at the bottom of the stack has no token.
    Open(Option<Token>),
    Operator(BinOp, Token),
}

/// A finished subtree, along with the source text it covers.
#[derive(Debug)]
struct Node {
    expr: Expr,
    span: Span,
}

struct TreeBuilder {
    operands: Vec<Node>,
    operators: Vec<Pending>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            operands: vec![],
            operators: vec![Pending::Open(None)],
        }
    }

    fn consume(&mut self, token: Option<Token>) -> Result<(), ParseError> {
        let token = match token {
            Some(token) => token,
            None => return self.close(None),
        };

        match token.class() {
            TokenClass::Operand => {
                trace!("Push operand {}", token);
                self.operands.push(Node {
                    expr: Expr::operand(token.text),
                    span: token.source,
                });
            }
            TokenClass::OpenParen => self.operators.push(Pending::Open(Some(token))),
            TokenClass::CloseParen => self.close(Some(token))?,
            TokenClass::Operator(op) => {
                let fixity = Fixity::for_binop(op);
                while let Some(Pending::Operator(top, _)) = self.operators.last() {
                    if !Fixity::for_binop(*top).precedes_rhs(&fixity) {
                        break;
                    }
                    self.reduce_top()?;
                }
                trace!("Push operator {}", token);
                self.operators.push(Pending::Operator(op, token));
            }
        }
        Ok(())
    }

    /// Reduces operators until the matching opening parenthesis, then discards it.
    /// A `closer` of [`None`] closes the sentinel.
    fn close(&mut self, closer: Option<Token>) -> Result<(), ParseError> {
        loop {
            match (self.operators.pop(), &closer) {
                (Some(Pending::Operator(op, token)), _) => self.reduce(op, token)?,
                (Some(Pending::Open(Some(_))), Some(_)) | (Some(Pending::Open(None)), None) => {
                    return Ok(())
                }
                (Some(Pending::Open(Some(open))), None) => {
                    return failure(Stage::ExprEnd, Reason::UnclosedParen(open))
                }
                (Some(Pending::Open(None)), Some(close)) | (None, Some(close)) => {
                    return failure(
                        Stage::ParenExprEnd,
                        Reason::UnmatchedCloseParen(close.clone()),
                    )
                }
                (None, None) => unreachable!("The sentinel is only removed by the final close"),
            }
        }
    }

    fn reduce_top(&mut self) -> Result<(), ParseError> {
        match self.operators.pop() {
            Some(Pending::Operator(op, token)) => self.reduce(op, token),
            other => unreachable!("Expected an operator on top of the stack, found {:?}", other),
        }
    }

    /// Replaces the top two operands with an application of `op` to them.
    fn reduce(&mut self, op: BinOp, token: Token) -> Result<(), ParseError> {
        // The right-hand operand was pushed last.
        let (rhs, lhs) = match (self.operands.pop(), self.operands.pop()) {
            (Some(rhs), Some(lhs)) => (rhs, lhs),
            _ => return failure(Stage::Operator, Reason::MissingOperand(token)),
        };

        trace!("Reduce {} {} {}", lhs.expr, op, rhs.expr);
        self.operands.push(Node {
            span: lhs.span.to(rhs.span),
            expr: Expr::binary(lhs.expr, op, rhs.expr),
        });
        Ok(())
    }

    fn finish(mut self) -> Result<Expr, ParseError> {
        match (self.operands.pop(), self.operands.pop()) {
            (Some(root), None) => Ok(root.expr),
            (None, _) => failure(Stage::ExprEnd, Reason::EmptyExpression),
            (Some(last), Some(_)) => failure(Stage::ExprEnd, Reason::MissingOperator(last.span)),
        }
    }
}
