use std::str::FromStr;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Deepest parenthesis nesting the parser accepts
pub const MAX_DEPTH: usize = 64;

/// Recursive-descent parser for the fully parenthesized grammar the
/// expression renderer emits:
///
/// ```text
/// expr   := number | '(' expr op expr ')'
/// op     := '+' | '-' | '*' | '/'
/// number := [0-9]+
/// ```
///
/// Nesting deeper than [`MAX_DEPTH`] is rejected as a parse error.
struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> ExpressionError {
        ExpressionError::Parse {
            position: self.pos,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), ExpressionError> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(self.error(format!(
                "expected '{}', found '{}'",
                byte as char, b as char
            ))),
            None => Err(self.error(format!("expected '{}', found end of input", byte as char))),
        }
    }

    fn parse_expr(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            Some(b'(') => {
                if self.depth >= MAX_DEPTH {
                    return Err(self.error(format!("nesting deeper than {}", MAX_DEPTH)));
                }
                self.depth += 1;
                self.pos += 1;
                let left = self.parse_expr()?;
                let op = self.parse_operator()?;
                let right = self.parse_expr()?;
                self.expect(b')')?;
                self.depth -= 1;
                Ok(op.apply(left, right))
            }
            Some(b) if b.is_ascii_digit() => self.parse_number(),
            Some(b) => Err(self.error(format!("unexpected '{}'", b as char))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_operator(&mut self) -> Result<Operator, ExpressionError> {
        let op = self
            .peek()
            .and_then(|b| Operator::from_symbol(b as char))
            .ok_or_else(|| self.error("expected an operator"))?;
        self.pos += 1;
        Ok(op)
    }

    fn parse_number(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = self
            .bytes
            .get(start..self.pos)
            .and_then(|s| std::str::from_utf8(s).ok())
            .ok_or_else(|| self.error("invalid number"))?;
        digits
            .parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| self.error(format!("invalid number '{}'", digits)))
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(text);
        let expr = parser.parse_expr()?;
        if parser.pos != parser.bytes.len() {
            return Err(parser.error("trailing input"));
        }
        Ok(expr)
    }
}
