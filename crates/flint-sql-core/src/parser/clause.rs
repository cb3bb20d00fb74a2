//! Trailing clause parsers: WHERE, GROUP BY/HAVING, ORDER BY,
//! LIMIT/OFFSET, and join constraints.
//!
//! Optional clauses return `Ok(None)` when the introducing keyword is
//! absent, so an absent clause is distinguishable from a malformed one.

use super::error::ParseError;
use super::Parser;
use crate::ast::{
    Expr, GroupBy, JoinConstraint, Limit, LimitOffset, LimitSeparator, OrderBy, OrderingMode,
    OrderingTerm,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses an optional `WHERE <expr>` clause.
    pub(crate) fn try_where(&mut self) -> Result<Option<Expr>, ParseError> {
        if !self.cursor.eat_keyword(Keyword::Where) {
            return Ok(None);
        }
        Ok(Some(self.parse_expr(0)?))
    }

    /// Parses an optional `GROUP BY <expr-list> [HAVING <expr>]` clause.
    pub(crate) fn try_group_by(&mut self) -> Result<Option<GroupBy>, ParseError> {
        let start = self.cursor.pos();
        if !self.cursor.eat_keyword(Keyword::Group) {
            return Ok(None);
        }
        self.cursor.expect_keyword(Keyword::By)?;
        let exprs = self.parse_expr_list()?;
        let having = if self.cursor.eat_keyword(Keyword::Having) {
            Some(self.parse_expr(0)?)
        } else {
            None
        };
        Ok(Some(GroupBy {
            exprs,
            having,
            span: self.cursor.span_from(start),
        }))
    }

    /// Parses an optional `ORDER BY <term-list>` clause.
    pub(crate) fn try_order_by(&mut self) -> Result<Option<OrderBy>, ParseError> {
        let start = self.cursor.pos();
        if !self.cursor.eat_keyword(Keyword::Order) {
            return Ok(None);
        }
        self.cursor.expect_keyword(Keyword::By)?;

        let mut terms = vec![self.parse_ordering_term()?];
        while self.cursor.eat(&TokenKind::Comma) {
            terms.push(self.parse_ordering_term()?);
        }

        Ok(Some(OrderBy {
            terms,
            span: self.cursor.span_from(start),
        }))
    }

    /// Parses one ordering term: an expression with optional ASC/DESC.
    fn parse_ordering_term(&mut self) -> Result<OrderingTerm, ParseError> {
        let start = self.cursor.pos();
        let expr = self.parse_expr(0)?;
        let mode = if self.cursor.eat_keyword(Keyword::Asc) {
            Some(OrderingMode::Ascending)
        } else if self.cursor.eat_keyword(Keyword::Desc) {
            Some(OrderingMode::Descending)
        } else {
            None
        };
        Ok(OrderingTerm {
            expr,
            mode,
            span: self.cursor.span_from(start),
        })
    }

    /// Parses an optional LIMIT clause.
    ///
    /// The two two-expression forms invert the roles of the
    /// expressions: `LIMIT a, b` is offset `a`, count `b`, while
    /// `LIMIT a OFFSET b` is count `a`, offset `b`. Which role the
    /// first expression plays is keyed off the separator token.
    pub(crate) fn try_limit(&mut self) -> Result<Option<Limit>, ParseError> {
        let start = self.cursor.pos();
        if !self.cursor.eat_keyword(Keyword::Limit) {
            return Ok(None);
        }

        let first = self.parse_expr(0)?;

        if self.cursor.eat(&TokenKind::Comma) {
            let second = self.parse_expr(0)?;
            return Ok(Some(Limit {
                count: second,
                offset: Some(LimitOffset {
                    expr: first,
                    separator: LimitSeparator::Comma,
                }),
                span: self.cursor.span_from(start),
            }));
        }

        if self.cursor.eat_keyword(Keyword::Offset) {
            let second = self.parse_expr(0)?;
            return Ok(Some(Limit {
                count: first,
                offset: Some(LimitOffset {
                    expr: second,
                    separator: LimitSeparator::Offset,
                }),
                span: self.cursor.span_from(start),
            }));
        }

        Ok(Some(Limit {
            count: first,
            offset: None,
            span: self.cursor.span_from(start),
        }))
    }

    /// Parses an optional join constraint: `ON <expr>` or
    /// `USING ( ident [, ident]* )`. An unconstrained join is legal.
    pub(crate) fn try_join_constraint(&mut self) -> Result<Option<JoinConstraint>, ParseError> {
        let start = self.cursor.pos();

        if self.cursor.eat_keyword(Keyword::On) {
            let expr = self.parse_expr(0)?;
            return Ok(Some(JoinConstraint::On {
                expr,
                span: self.cursor.span_from(start),
            }));
        }

        if self.cursor.eat_keyword(Keyword::Using) {
            self.cursor
                .expect(&TokenKind::LeftParen, "opening parenthesis after USING")?;
            let mut columns = vec![self.cursor.expect_identifier("column name")?];
            while self.cursor.eat(&TokenKind::Comma) {
                columns.push(self.cursor.expect_identifier("column name")?);
            }
            self.cursor.expect(
                &TokenKind::RightParen,
                "closing parenthesis after USING columns",
            )?;
            return Ok(Some(JoinConstraint::Using {
                columns,
                span: self.cursor.span_from(start),
            }));
        }

        Ok(None)
    }
}
