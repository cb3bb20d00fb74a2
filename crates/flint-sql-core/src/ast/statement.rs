//! SQL statement AST types.

use super::expression::Expr;
use super::span::TokenSpan;

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
}

impl Statement {
    /// Returns the token span of the statement.
    #[must_use]
    pub const fn span(&self) -> TokenSpan {
        match self {
            Self::Select(s) => s.span,
            Self::Delete(d) => d.span,
            Self::Update(u) => u.span,
        }
    }
}

/// A SELECT statement.
///
/// The result column list is never empty; `from` is empty when the query
/// has no FROM clause (e.g. `SELECT 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Whether DISTINCT was specified (ALL and absence both mean false).
    pub distinct: bool,
    /// The result columns (non-empty).
    pub columns: Vec<ResultColumn>,
    /// The FROM sources. A join chain collapses the whole list into a
    /// single [`Queryable::Join`] entry.
    pub from: Vec<Queryable>,
    /// The WHERE expression.
    pub where_clause: Option<Expr>,
    /// GROUP BY / HAVING.
    pub group_by: Option<GroupBy>,
    /// ORDER BY.
    pub order_by: Option<OrderBy>,
    /// LIMIT / OFFSET.
    pub limit: Option<Limit>,
    /// Tokens covered, SELECT through the last clause.
    pub span: TokenSpan,
}

/// One projected item in a SELECT's output list.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultColumn {
    /// `*` or `table.*`.
    Star {
        /// Qualifying table name for `table.*`; `None` for a bare `*`.
        table: Option<String>,
        /// Tokens covered.
        span: TokenSpan,
    },
    /// `expr [AS alias]`.
    Expr {
        /// The projected expression.
        expr: Expr,
        /// Optional alias (`AS ident` or a bare trailing ident).
        alias: Option<String>,
        /// Tokens covered.
        span: TokenSpan,
    },
}

impl ResultColumn {
    /// Returns the token span of the result column.
    #[must_use]
    pub const fn span(&self) -> TokenSpan {
        match self {
            Self::Star { span, .. } | Self::Expr { span, .. } => *span,
        }
    }
}

/// A named table reference with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TableReference {
    /// Table name.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// Anything that can appear as a row source in FROM.
#[derive(Debug, Clone, PartialEq)]
pub enum Queryable {
    /// A plain table reference.
    Table(TableReference),
    /// A parenthesized nested SELECT.
    Subquery {
        /// The nested query.
        query: Box<SelectStatement>,
        /// Alias.
        alias: Option<String>,
        /// Tokens covered, opening paren through alias.
        span: TokenSpan,
    },
    /// A join chain.
    Join(Box<JoinClause>),
}

impl Queryable {
    /// Returns the token span of the source.
    #[must_use]
    pub const fn span(&self) -> TokenSpan {
        match self {
            Self::Table(t) => t.span,
            Self::Subquery { span, .. } => *span,
            Self::Join(j) => j.span,
        }
    }
}

/// A join chain: a primary source plus an ordered sequence of joins.
///
/// Order matters: each join's constraint applies relative to everything
/// parsed before it.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// The left-most source.
    pub primary: Queryable,
    /// The joins, in source order (non-empty).
    pub joins: Vec<Join>,
    /// Tokens covered, primary through the last join.
    pub span: TokenSpan,
}

/// One step of a join chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Whether NATURAL was specified.
    pub natural: bool,
    /// The join operator.
    pub operator: JoinOperator,
    /// The right-hand source.
    pub queryable: Queryable,
    /// The ON/USING constraint, if any.
    pub constraint: Option<JoinConstraint>,
    /// Tokens covered, operator through constraint.
    pub span: TokenSpan,
}

/// The join operator resolved from the operator token phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOperator {
    /// Bare `JOIN`.
    None,
    /// `INNER JOIN`.
    Inner,
    /// `LEFT JOIN`.
    Left,
    /// `LEFT OUTER JOIN`.
    LeftOuter,
    /// `CROSS JOIN`.
    Cross,
    /// `,`.
    Comma,
}

/// Join constraint: ON expression or USING column list.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    /// `ON <expr>`.
    On {
        /// The join condition.
        expr: Expr,
        /// Tokens covered.
        span: TokenSpan,
    },
    /// `USING ( ident [, ident]* )`; the list is non-empty.
    Using {
        /// The shared column names, in source order.
        columns: Vec<String>,
        /// Tokens covered.
        span: TokenSpan,
    },
}

impl JoinConstraint {
    /// Returns the token span of the constraint.
    #[must_use]
    pub const fn span(&self) -> TokenSpan {
        match self {
            Self::On { span, .. } | Self::Using { span, .. } => *span,
        }
    }
}

/// GROUP BY clause with optional HAVING.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    /// Grouping expressions (non-empty).
    pub exprs: Vec<Expr>,
    /// HAVING expression.
    pub having: Option<Expr>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// ORDER BY clause.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The ordering terms (non-empty).
    pub terms: Vec<OrderingTerm>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingTerm {
    /// The expression to order by.
    pub expr: Expr,
    /// ASC/DESC; `None` means the source-defined default.
    pub mode: Option<OrderingMode>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingMode {
    /// ASC.
    Ascending,
    /// DESC.
    Descending,
}

/// LIMIT clause.
///
/// `LIMIT a, b` means offset `a`, count `b`; `LIMIT a OFFSET b` means
/// count `a`, offset `b`. The separator records which form was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    /// The row-count expression.
    pub count: Expr,
    /// The offset expression and the separator that introduced it.
    pub offset: Option<LimitOffset>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// The offset half of a LIMIT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitOffset {
    /// The offset expression.
    pub expr: Expr,
    /// Which separator token distinguished offset from count.
    pub separator: LimitSeparator,
}

/// The token separating the two LIMIT expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSeparator {
    /// `LIMIT offset, count`.
    Comma,
    /// `LIMIT count OFFSET offset`.
    Offset,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// The target table (required).
    pub table: TableReference,
    /// The WHERE expression.
    pub where_clause: Option<Expr>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Conflict-resolution mode from an `OR <mode>` clause.
    pub failure_mode: Option<FailureMode>,
    /// The target table (required).
    pub table: TableReference,
    /// SET assignments, in declaration order (non-empty).
    pub assignments: Vec<SetComponent>,
    /// The WHERE expression.
    pub where_clause: Option<Expr>,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// One `column = expr` assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct SetComponent {
    /// Column name.
    pub column: String,
    /// Value expression.
    pub value: Expr,
    /// Tokens covered.
    pub span: TokenSpan,
}

/// Conflict-resolution mode on UPDATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// OR ROLLBACK.
    Rollback,
    /// OR ABORT.
    Abort,
    /// OR REPLACE.
    Replace,
    /// OR FAIL.
    Fail,
    /// OR IGNORE.
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_column_span_accessor() {
        let star = ResultColumn::Star {
            table: None,
            span: TokenSpan::new(1, 1),
        };
        assert_eq!(star.span(), TokenSpan::new(1, 1));
    }

    #[test]
    fn test_statement_span_accessor() {
        let stmt = Statement::Delete(DeleteStatement {
            table: TableReference {
                name: String::from("t"),
                alias: None,
                span: TokenSpan::new(2, 2),
            },
            where_clause: None,
            span: TokenSpan::new(0, 2),
        });
        assert_eq!(stmt.span(), TokenSpan::new(0, 2));
    }
}
