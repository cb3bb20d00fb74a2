//! FROM sources and the join assembler.
//!
//! The join-operator grammar is a small set of keyword phrases, each
//! ending in the JOIN keyword or being the bare comma operator. The
//! recognizer enumerates every legal phrase explicitly; anything else
//! terminates the chain.

use tracing::trace;

use super::error::ParseError;
use super::Parser;
use crate::ast::{Join, JoinClause, JoinOperator, Queryable, TableReference};
use crate::lexer::{Keyword, TokenKind};

/// A recognized join-operator phrase. The natural flag is independent
/// of the operator itself.
struct JoinOp {
    natural: bool,
    operator: JoinOperator,
}

impl Parser {
    /// Parses the FROM list. Absence of the FROM keyword yields an
    /// empty source list; queries with no tables are legal.
    ///
    /// When a join operator follows the first source, the whole FROM
    /// list collapses into a single [`Queryable::Join`] chain.
    pub(crate) fn parse_from_clause(&mut self) -> Result<Vec<Queryable>, ParseError> {
        if !self.cursor.eat_keyword(Keyword::From) {
            return Ok(Vec::new());
        }

        let start = self.cursor.pos();
        let primary = self.parse_table_or_subquery()?;

        let mut joins = Vec::new();
        loop {
            let join_start = self.cursor.pos();
            let Some(op) = self.try_join_operator()? else {
                break;
            };
            trace!(operator = ?op.operator, natural = op.natural, "join operator recognized");
            let queryable = self.parse_table_or_subquery()?;
            let constraint = self.try_join_constraint()?;
            joins.push(Join {
                natural: op.natural,
                operator: op.operator,
                queryable,
                constraint,
                span: self.cursor.span_from(join_start),
            });
        }

        if joins.is_empty() {
            Ok(vec![primary])
        } else {
            Ok(vec![Queryable::Join(Box::new(JoinClause {
                primary,
                joins,
                span: self.cursor.span_from(start),
            }))])
        }
    }

    /// Parses one table-or-subquery: a plain table reference or a
    /// parenthesized nested SELECT, either optionally aliased.
    pub(crate) fn parse_table_or_subquery(&mut self) -> Result<Queryable, ParseError> {
        let start = self.cursor.pos();

        if self.cursor.eat(&TokenKind::LeftParen) {
            let query = self.parse_select_statement()?;
            self.cursor
                .expect(&TokenKind::RightParen, "closing parenthesis after subquery")?;
            let alias = self.parse_alias()?;
            return Ok(Queryable::Subquery {
                query: Box::new(query),
                alias,
                span: self.cursor.span_from(start),
            });
        }

        if matches!(self.cursor.peek_kind(), TokenKind::Identifier(_)) {
            return Ok(Queryable::Table(self.parse_table_reference()?));
        }

        Err(ParseError::expected_construct(
            "table name or subquery",
            self.cursor.peek(),
        ))
    }

    /// Parses a bare table name with an optional alias. Used for FROM
    /// entries and for the DELETE/UPDATE target, which must be a plain
    /// identifier.
    pub(crate) fn parse_table_reference(&mut self) -> Result<TableReference, ParseError> {
        let start = self.cursor.pos();
        if !matches!(self.cursor.peek_kind(), TokenKind::Identifier(_)) {
            return Err(ParseError::expected_construct(
                "table reference",
                self.cursor.peek(),
            ));
        }
        let name = self.cursor.expect_identifier("table name")?;
        let alias = self.parse_alias()?;
        Ok(TableReference {
            name,
            alias,
            span: self.cursor.span_from(start),
        })
    }

    /// Attempts to recognize one join-operator phrase.
    ///
    /// The legal phrases, each optionally prefixed by NATURAL except the
    /// comma:
    ///
    /// ```text
    /// ,                  -> Comma
    /// JOIN               -> None
    /// INNER JOIN         -> Inner
    /// CROSS JOIN         -> Cross
    /// LEFT JOIN          -> Left
    /// LEFT OUTER JOIN    -> LeftOuter
    /// ```
    ///
    /// Returns `Ok(None)` when no phrase starts here, which terminates
    /// the chain. A NATURAL that is not completed by a JOIN phrase is a
    /// hard error, not a chain terminator.
    fn try_join_operator(&mut self) -> Result<Option<JoinOp>, ParseError> {
        if self.cursor.eat(&TokenKind::Comma) {
            return Ok(Some(JoinOp {
                natural: false,
                operator: JoinOperator::Comma,
            }));
        }

        let natural = self.cursor.eat_keyword(Keyword::Natural);

        let operator = if self.cursor.eat_keyword(Keyword::Join) {
            JoinOperator::None
        } else if self.cursor.eat_keyword(Keyword::Inner) {
            self.cursor.expect_keyword(Keyword::Join)?;
            JoinOperator::Inner
        } else if self.cursor.eat_keyword(Keyword::Cross) {
            self.cursor.expect_keyword(Keyword::Join)?;
            JoinOperator::Cross
        } else if self.cursor.eat_keyword(Keyword::Left) {
            let outer = self.cursor.eat_keyword(Keyword::Outer);
            self.cursor.expect_keyword(Keyword::Join)?;
            if outer {
                JoinOperator::LeftOuter
            } else {
                JoinOperator::Left
            }
        } else if natural {
            return Err(ParseError::expected_token("JOIN", self.cursor.peek()));
        } else {
            return Ok(None);
        };

        Ok(Some(JoinOp { natural, operator }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Statement;

    fn first_join(sql: &str) -> (bool, JoinOperator) {
        let stmt = Parser::new(sql).parse_statement().unwrap();
        let Statement::Select(select) = stmt else {
            panic!("expected SELECT");
        };
        let Queryable::Join(clause) = &select.from[0] else {
            panic!("expected join chain in: {sql}");
        };
        let join = &clause.joins[0];
        (join.natural, join.operator)
    }

    #[test]
    fn test_every_legal_operator_phrase() {
        let cases: &[(&str, bool, JoinOperator)] = &[
            ("SELECT a FROM x, y", false, JoinOperator::Comma),
            ("SELECT a FROM x JOIN y", false, JoinOperator::None),
            ("SELECT a FROM x INNER JOIN y", false, JoinOperator::Inner),
            ("SELECT a FROM x CROSS JOIN y", false, JoinOperator::Cross),
            ("SELECT a FROM x LEFT JOIN y", false, JoinOperator::Left),
            (
                "SELECT a FROM x LEFT OUTER JOIN y",
                false,
                JoinOperator::LeftOuter,
            ),
            ("SELECT a FROM x NATURAL JOIN y", true, JoinOperator::None),
            (
                "SELECT a FROM x NATURAL INNER JOIN y",
                true,
                JoinOperator::Inner,
            ),
            (
                "SELECT a FROM x NATURAL CROSS JOIN y",
                true,
                JoinOperator::Cross,
            ),
            (
                "SELECT a FROM x NATURAL LEFT JOIN y",
                true,
                JoinOperator::Left,
            ),
            (
                "SELECT a FROM x NATURAL LEFT OUTER JOIN y",
                true,
                JoinOperator::LeftOuter,
            ),
        ];
        for (sql, natural, operator) in cases {
            assert_eq!(first_join(sql), (*natural, *operator), "in: {sql}");
        }
    }

    #[test]
    fn test_natural_requires_join() {
        assert!(Parser::new("SELECT a FROM x NATURAL y")
            .parse_statement()
            .is_err());
        assert!(Parser::new("SELECT a FROM x NATURAL OUTER JOIN y")
            .parse_statement()
            .is_err());
    }

    #[test]
    fn test_incomplete_phrase_is_an_error() {
        for sql in [
            "SELECT a FROM x LEFT y",
            "SELECT a FROM x INNER y",
            "SELECT a FROM x CROSS y",
            "SELECT a FROM x LEFT OUTER y",
        ] {
            assert!(Parser::new(sql).parse_statement().is_err(), "in: {sql}");
        }
    }

    #[test]
    fn test_unrecognized_phrase_terminates_chain() {
        // WHERE is not a join operator: the chain ends and the clause
        // parsers take over.
        let stmt = Parser::new("SELECT a FROM x WHERE a = 1")
            .parse_statement()
            .unwrap();
        let Statement::Select(select) = stmt else {
            panic!("expected SELECT");
        };
        assert!(matches!(&select.from[0], Queryable::Table(t) if t.name == "x"));
        assert!(select.where_clause.is_some());
    }
}
