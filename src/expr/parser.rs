// Recursive-descent parser producing an expression tree
//
// Precedence, lowest first:
//   + -          (left)
//   * / // %     (left)
//   unary + -
//   **           (right, binds tighter than a unary operator on its left)

use super::lexer::{Token, TokenKind};
use super::ExprError;

/// Expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

/// Parses a token stream with a bound on nesting depth
pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    depth: usize,
    max_depth: usize,
    /// Byte length of the source, reported for errors at end of input
    end: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], source_len: usize, max_depth: usize) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
            max_depth,
            end: source_len,
        }
    }

    /// Parse the whole token stream as one expression
    pub fn parse(mut self) -> Result<Expr, ExprError> {
        let expr = self.parse_sum()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(ExprError::UnexpectedToken {
                found: token.kind.describe(),
                pos: token.pos,
            }),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index);
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn enter(&mut self, pos: usize) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ExprError::TooDeep {
                max: self.max_depth,
                pos,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_sum(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_product()?;
        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            self.advance();
            let rhs = self.parse_product()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_product(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }) {
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.peek().map(|t| (&t.kind, t.pos)) {
            Some((TokenKind::Plus, pos)) => Some((UnaryOp::Plus, pos)),
            Some((TokenKind::Minus, pos)) => Some((UnaryOp::Neg, pos)),
            _ => None,
        };

        match op {
            Some((op, pos)) => {
                self.advance();
                self.enter(pos)?;
                let operand = self.parse_unary();
                self.leave();
                Ok(Expr::Unary(op, Box::new(operand?)))
            }
            None => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_atom()?;
        match self.peek() {
            Some(Token {
                kind: TokenKind::DoubleStar,
                pos,
            }) => {
                self.advance();
                self.enter(*pos)?;
                let exponent = self.parse_unary();
                self.leave();
                Ok(Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent?)))
            }
            _ => Ok(base),
        }
    }

    fn parse_atom(&mut self) -> Result<Expr, ExprError> {
        let token = self.advance().ok_or(ExprError::UnexpectedEnd { pos: self.end })?;
        match token.kind {
            TokenKind::Int(i) => Ok(Expr::Int(i)),
            TokenKind::Float(f) => Ok(Expr::Float(f)),
            TokenKind::LParen => {
                self.enter(token.pos)?;
                let inner = self.parse_sum();
                self.leave();
                let inner = inner?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ExprError::UnexpectedToken {
                        found: other.kind.describe(),
                        pos: other.pos,
                    }),
                    None => Err(ExprError::UnclosedParen { pos: token.pos }),
                }
            }
            ref other => Err(ExprError::UnexpectedToken {
                found: other.describe(),
                pos: token.pos,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lexer::tokenize;

    fn parse(source: &str) -> Result<Expr, ExprError> {
        let tokens = tokenize(source)?;
        Parser::new(&tokens, source.len(), 64).parse()
    }

    fn bin(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    #[test]
    fn test_parse_precedence() {
        assert_eq!(
            parse("1 + 2 * 3").unwrap(),
            bin(
                BinaryOp::Add,
                Expr::Int(1),
                bin(BinaryOp::Mul, Expr::Int(2), Expr::Int(3))
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        assert_eq!(
            parse("8 - 3 - 2").unwrap(),
            bin(
                BinaryOp::Sub,
                bin(BinaryOp::Sub, Expr::Int(8), Expr::Int(3)),
                Expr::Int(2)
            )
        );
    }

    #[test]
    fn test_parse_power_right_associative() {
        assert_eq!(
            parse("2 ** 3 ** 2").unwrap(),
            bin(
                BinaryOp::Pow,
                Expr::Int(2),
                bin(BinaryOp::Pow, Expr::Int(3), Expr::Int(2))
            )
        );
    }

    #[test]
    fn test_parse_unary_minus_below_power() {
        // -2 ** 2 is -(2 ** 2)
        assert_eq!(
            parse("-2 ** 2").unwrap(),
            Expr::Unary(
                UnaryOp::Neg,
                Box::new(bin(BinaryOp::Pow, Expr::Int(2), Expr::Int(2)))
            )
        );
    }

    #[test]
    fn test_parse_parentheses() {
        assert_eq!(
            parse("(1 + 2) * 3").unwrap(),
            bin(
                BinaryOp::Mul,
                bin(BinaryOp::Add, Expr::Int(1), Expr::Int(2)),
                Expr::Int(3)
            )
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("   ").unwrap_err(), ExprError::UnexpectedEnd { pos: 3 });
    }

    #[test]
    fn test_parse_trailing_operator() {
        assert_eq!(parse("1 +").unwrap_err(), ExprError::UnexpectedEnd { pos: 3 });
    }

    #[test]
    fn test_parse_unclosed_paren() {
        assert_eq!(
            parse("(1 + 2").unwrap_err(),
            ExprError::UnclosedParen { pos: 0 }
        );
    }

    #[test]
    fn test_parse_stray_close_paren() {
        assert_eq!(
            parse("1 + 2)").unwrap_err(),
            ExprError::UnexpectedToken {
                found: ")".to_string(),
                pos: 5
            }
        );
    }

    #[test]
    fn test_parse_adjacent_numbers() {
        assert_eq!(
            parse("1 2").unwrap_err(),
            ExprError::UnexpectedToken {
                found: "2".to_string(),
                pos: 2
            }
        );
    }

    #[test]
    fn test_parse_depth_limit() {
        let source = format!("{}1{}", "(".repeat(5), ")".repeat(5));
        let tokens = tokenize(&source).unwrap();
        assert!(Parser::new(&tokens, source.len(), 5).parse().is_ok());
        assert!(matches!(
            Parser::new(&tokens, source.len(), 4).parse(),
            Err(ExprError::TooDeep { max: 4, .. })
        ));
    }

    #[test]
    fn test_parse_depth_limit_unary_chain() {
        let source = format!("{}1", "-".repeat(10_000));
        assert!(matches!(parse(&source), Err(ExprError::TooDeep { max: 64, .. })));
    }
}
