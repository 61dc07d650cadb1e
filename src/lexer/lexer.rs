//! Lexing functions for constructing a token stream.
use crate::span::*;

use super::{char_ext::*, char_lexer::*, tokens::*};

struct Lexer<'s> {
    lexer: CharLexer<'s>,
    tokens: Vec<Token>,
}

/// Splits an expression into tokens.
///
/// Operators and parentheses are always tokens of their own, any other run of
/// non-whitespace characters forms a single operand. No validation is performed.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            tokens: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing a [`Vec<Token>`]
    /// containing the tokens it read.
    fn run(mut self) -> Vec<Token> {
        while self.try_consume_token() {}
        self.tokens
    }

    /// Skips leading whitespace, then reads a single token.
    /// Returns `false` once the end of the input has been reached.
    fn try_consume_token(&mut self) -> bool {
        self.lexer.consume_while(|c| c.is_whitespace());

        let start = self.lexer.byte_position();
        let text = match self.lexer.peek() {
            None => return false,
            Some(ch) if ch.is_symbol() => {
                self.lexer.try_next();
                ch.to_string()
            }
            Some(_) => self.lexer.consume_while(CharExt::is_operand_char),
        };

        let source = Span::new(start, self.lexer.byte_position());
        self.tokens.push(Token::new(text, source));
        true
    }
}
