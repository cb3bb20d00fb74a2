//! Pratt expression parsing.
//!
//! The statement grammar treats this as an opaque sub-parser: it is
//! invoked with the cursor already positioned, consumes the expression's
//! tokens, and leaves the cursor immediately after it.

use super::error::ParseError;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_unary_op,
};
use super::Parser;
use crate::ast::{Expr, ExprKind, FunctionCall, Literal};
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses an expression with the given minimum binding power.
    pub(crate) fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let start = self.cursor.pos();
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(self.cursor.peek_kind()) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            match self.cursor.peek_kind() {
                TokenKind::Keyword(Keyword::Is) => {
                    self.cursor.advance();
                    let negated = self.cursor.eat_keyword(Keyword::Not);
                    self.cursor.expect_keyword(Keyword::Null)?;
                    lhs = Expr::new(
                        ExprKind::IsNull {
                            expr: Box::new(lhs),
                            negated,
                        },
                        self.cursor.span_from(start),
                    );
                }
                TokenKind::Keyword(Keyword::In) => {
                    self.cursor.advance();
                    self.cursor
                        .expect(&TokenKind::LeftParen, "opening parenthesis after IN")?;
                    let list = self.parse_expr_list()?;
                    self.cursor
                        .expect(&TokenKind::RightParen, "closing parenthesis after IN list")?;
                    lhs = Expr::new(
                        ExprKind::In {
                            expr: Box::new(lhs),
                            list,
                        },
                        self.cursor.span_from(start),
                    );
                }
                TokenKind::Keyword(Keyword::Between) => {
                    self.cursor.advance();
                    let low = self.parse_expr(r_bp)?;
                    self.cursor.expect_keyword(Keyword::And)?;
                    let high = self.parse_expr(r_bp)?;
                    lhs = Expr::new(
                        ExprKind::Between {
                            expr: Box::new(lhs),
                            low: Box::new(low),
                            high: Box::new(high),
                        },
                        self.cursor.span_from(start),
                    );
                }
                _ => {
                    let Some(op) = token_to_binary_op(self.cursor.peek_kind()) else {
                        break;
                    };
                    self.cursor.advance();
                    let rhs = self.parse_expr(r_bp)?;
                    lhs = Expr::new(
                        ExprKind::Binary {
                            left: Box::new(lhs),
                            op,
                            right: Box::new(rhs),
                        },
                        self.cursor.span_from(start),
                    );
                }
            }
        }

        Ok(lhs)
    }

    /// Parses a prefix expression (unary operator or primary).
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.pos();
        if let Some(op) = token_to_unary_op(self.cursor.peek_kind()) {
            let bp = prefix_binding_power(self.cursor.peek_kind()).unwrap_or(15);
            self.cursor.advance();
            let operand = self.parse_expr(bp)?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                self.cursor.span_from(start),
            ));
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.pos();

        match self.cursor.peek_kind() {
            TokenKind::Integer(n) => {
                let n = *n;
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Literal(Literal::Integer(n)),
                    self.cursor.span_from(start),
                ))
            }
            TokenKind::Float(f) => {
                let f = *f;
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Literal(Literal::Float(f)),
                    self.cursor.span_from(start),
                ))
            }
            TokenKind::String(s) => {
                let s = s.clone();
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Literal(Literal::String(s)),
                    self.cursor.span_from(start),
                ))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Literal(Literal::Null),
                    self.cursor.span_from(start),
                ))
            }

            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr(0)?;
                self.cursor
                    .expect(&TokenKind::RightParen, "closing parenthesis")?;
                Ok(Expr::new(
                    ExprKind::Paren(Box::new(inner)),
                    self.cursor.span_from(start),
                ))
            }

            // Identifier: column reference, qualified column, or function call
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.cursor.advance();

                if self.cursor.check(&TokenKind::LeftParen) {
                    return self.parse_function_call(name, start);
                }

                if self.cursor.eat(&TokenKind::Dot) {
                    let column = self.cursor.expect_identifier("column name after '.'")?;
                    return Ok(Expr::new(
                        ExprKind::Column {
                            table: Some(name),
                            name: column,
                        },
                        self.cursor.span_from(start),
                    ));
                }

                Ok(Expr::new(
                    ExprKind::Column { table: None, name },
                    self.cursor.span_from(start),
                ))
            }

            _ => Err(ParseError::expected_construct(
                "expression",
                self.cursor.peek(),
            )),
        }
    }

    /// Parses a function call after the name has been consumed.
    fn parse_function_call(&mut self, name: String, start: usize) -> Result<Expr, ParseError> {
        self.cursor
            .expect(&TokenKind::LeftParen, "opening parenthesis")?;

        let distinct = self.cursor.eat_keyword(Keyword::Distinct);

        let args = if self.cursor.check(&TokenKind::RightParen) {
            vec![]
        } else if self.cursor.check(&TokenKind::Star) {
            let star = self.cursor.pos();
            self.cursor.advance();
            vec![Expr::new(ExprKind::Wildcard, self.cursor.span_from(star))]
        } else {
            self.parse_expr_list()?
        };

        self.cursor.expect(
            &TokenKind::RightParen,
            "closing parenthesis after function arguments",
        )?;

        Ok(Expr::new(
            ExprKind::Function(FunctionCall {
                name,
                args,
                distinct,
            }),
            self.cursor.span_from(start),
        ))
    }

    /// Parses a comma-separated, non-empty list of expressions.
    pub(crate) fn parse_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expr(0)?];
        while self.cursor.eat(&TokenKind::Comma) {
            exprs.push(self.parse_expr(0)?);
        }
        Ok(exprs)
    }
}
