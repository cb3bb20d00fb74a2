//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node carries a [`TokenSpan`] covering exactly the tokens it was
//! built from, assigned as the final step of construction.

mod expression;
mod span;
mod statement;

pub use expression::{BinaryOp, Expr, ExprKind, FunctionCall, Literal, UnaryOp};
pub use span::TokenSpan;
pub use statement::{
    DeleteStatement, FailureMode, GroupBy, Join, JoinClause, JoinConstraint, JoinOperator, Limit,
    LimitOffset, LimitSeparator, OrderBy, OrderingMode, OrderingTerm, Queryable, ResultColumn,
    SelectStatement, SetComponent, Statement, TableReference, UpdateStatement,
};
