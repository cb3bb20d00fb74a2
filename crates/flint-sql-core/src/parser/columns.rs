//! Result column disambiguation.
//!
//! A result column is either a wildcard (`*`, `table.*`) or an
//! expression with an optional alias. The `table.*` form requires a
//! two-token lookahead after the identifier; when the `. *` sequence
//! does not follow, the cursor is restored to the position before the
//! identifier was consumed and the expression sub-parser takes over.
//! This is the one backtrack in the grammar.

use super::error::ParseError;
use super::Parser;
use crate::ast::ResultColumn;
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// Parses the non-empty, comma-separated result column list.
    pub(crate) fn parse_result_columns(&mut self) -> Result<Vec<ResultColumn>, ParseError> {
        let mut columns = vec![self.parse_result_column()?];
        while self.cursor.eat(&TokenKind::Comma) {
            columns.push(self.parse_result_column()?);
        }
        Ok(columns)
    }

    /// Parses a single result column.
    fn parse_result_column(&mut self) -> Result<ResultColumn, ParseError> {
        let start = self.cursor.pos();

        if self.cursor.eat(&TokenKind::Star) {
            return Ok(ResultColumn::Star {
                table: None,
                span: self.cursor.span_from(start),
            });
        }

        // Speculative `table . *`: consume the identifier, and if the
        // dot-star sequence does not follow, restore the saved position
        // so the identifier can start a general expression instead.
        if matches!(self.cursor.peek_kind(), TokenKind::Identifier(_)) {
            let save = self.cursor.pos();
            let table = self.cursor.expect_identifier("table name")?;
            if self.cursor.eat(&TokenKind::Dot) && self.cursor.eat(&TokenKind::Star) {
                return Ok(ResultColumn::Star {
                    table: Some(table),
                    span: self.cursor.span_from(start),
                });
            }
            self.cursor.rewind(save);
        }

        let expr = self.parse_expr(0)?;
        let alias = self.parse_alias()?;
        Ok(ResultColumn::Expr {
            expr,
            alias,
            span: self.cursor.span_from(start),
        })
    }

    /// Parses an optional alias: `AS ident` or a bare trailing ident.
    pub(crate) fn parse_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.cursor.eat_keyword(Keyword::As) {
            return Ok(Some(self.cursor.expect_identifier("alias after AS")?));
        }
        if matches!(self.cursor.peek_kind(), TokenKind::Identifier(_)) {
            return Ok(Some(self.cursor.expect_identifier("alias")?));
        }
        Ok(None)
    }
}
