//! Statement assemblers for SELECT, DELETE, and UPDATE.

use tracing::trace;

use super::error::ParseError;
use super::Parser;
use crate::ast::{
    DeleteStatement, FailureMode, SelectStatement, SetComponent, Statement, UpdateStatement,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses a single SQL statement.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is not a valid SELECT,
    /// DELETE, or UPDATE statement. Failures abort the whole parse; no
    /// partial AST is produced.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        trace!(token = ?self.cursor.peek_kind(), "dispatching statement");
        match self.cursor.peek_kind() {
            TokenKind::Keyword(Keyword::Select) => {
                Ok(Statement::Select(self.parse_select_statement()?))
            }
            TokenKind::Keyword(Keyword::Delete) => {
                Ok(Statement::Delete(self.parse_delete_statement()?))
            }
            TokenKind::Keyword(Keyword::Update) => {
                Ok(Statement::Update(self.parse_update_statement()?))
            }
            _ => Err(ParseError::expected_construct(
                "SELECT, DELETE, or UPDATE statement",
                self.cursor.peek(),
            )),
        }
    }

    /// Parses a SELECT statement, clauses in fixed grammar order.
    pub(crate) fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        let start = self.cursor.pos();
        self.cursor.expect_keyword(Keyword::Select)?;

        // DISTINCT and ALL are mutually exclusive; both absent means
        // non-distinct.
        let distinct = if self.cursor.eat_keyword(Keyword::Distinct) {
            true
        } else {
            self.cursor.eat_keyword(Keyword::All);
            false
        };

        let columns = self.parse_result_columns()?;
        let from = self.parse_from_clause()?;
        let where_clause = self.try_where()?;
        let group_by = self.try_group_by()?;
        let order_by = self.try_order_by()?;
        let limit = self.try_limit()?;

        Ok(SelectStatement {
            distinct,
            columns,
            from,
            where_clause,
            group_by,
            order_by,
            limit,
            span: self.cursor.span_from(start),
        })
    }

    /// Parses `DELETE FROM <table> [WHERE <expr>]`. The table reference
    /// is mandatory and must be a bare identifier.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        let start = self.cursor.pos();
        self.cursor.expect_keyword(Keyword::Delete)?;
        self.cursor.expect_keyword(Keyword::From)?;

        let table = self.parse_table_reference()?;
        let where_clause = self.try_where()?;

        Ok(DeleteStatement {
            table,
            where_clause,
            span: self.cursor.span_from(start),
        })
    }

    /// Parses `UPDATE [OR <mode>] <table> SET col = expr [, ...]
    /// [WHERE <expr>]`.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        let start = self.cursor.pos();
        self.cursor.expect_keyword(Keyword::Update)?;

        let failure_mode = if self.cursor.eat_keyword(Keyword::Or) {
            Some(self.parse_failure_mode()?)
        } else {
            None
        };

        let table = self.parse_table_reference()?;
        self.cursor.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![self.parse_set_component()?];
        while self.cursor.eat(&TokenKind::Comma) {
            assignments.push(self.parse_set_component()?);
        }

        let where_clause = self.try_where()?;

        Ok(UpdateStatement {
            failure_mode,
            table,
            assignments,
            where_clause,
            span: self.cursor.span_from(start),
        })
    }

    /// Parses the conflict-resolution mode keyword after `OR`.
    fn parse_failure_mode(&mut self) -> Result<FailureMode, ParseError> {
        const MODES: [Keyword; 5] = [
            Keyword::Rollback,
            Keyword::Abort,
            Keyword::Replace,
            Keyword::Fail,
            Keyword::Ignore,
        ];
        match self.cursor.eat_any_keyword(&MODES) {
            Some(Keyword::Rollback) => Ok(FailureMode::Rollback),
            Some(Keyword::Abort) => Ok(FailureMode::Abort),
            Some(Keyword::Replace) => Ok(FailureMode::Replace),
            Some(Keyword::Fail) => Ok(FailureMode::Fail),
            Some(Keyword::Ignore) => Ok(FailureMode::Ignore),
            _ => Err(ParseError::expected_token(
                "ROLLBACK, ABORT, REPLACE, FAIL, or IGNORE",
                self.cursor.peek(),
            )),
        }
    }

    /// Parses one `column = expr` SET component.
    fn parse_set_component(&mut self) -> Result<SetComponent, ParseError> {
        let start = self.cursor.pos();
        let column = self.cursor.expect_identifier("column name")?;
        self.cursor.expect(&TokenKind::Eq, "'=' after column name")?;
        let value = self.parse_expr(0)?;
        Ok(SetComponent {
            column,
            value,
            span: self.cursor.span_from(start),
        })
    }
}
