#![allow(dead_code)]

use flint_sql_core::ast::{
    DeleteStatement, Expr, ExprKind, Literal, SelectStatement, Statement, UpdateStatement,
};
use flint_sql_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

/// Extracts the value of an integer literal expression.
pub fn as_int(expr: &Expr) -> i64 {
    match &expr.kind {
        ExprKind::Literal(Literal::Integer(n)) => *n,
        other => panic!("Expected integer literal, got {other:?}"),
    }
}

/// Returns the name of a bare (unqualified) column reference.
pub fn as_column(expr: &Expr) -> &str {
    expr.as_bare_column()
        .unwrap_or_else(|| panic!("Expected bare column reference, got {:?}", expr.kind))
}
