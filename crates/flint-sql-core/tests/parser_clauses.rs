//! Tests for the trailing clauses: WHERE, GROUP BY/HAVING, ORDER BY,
//! and the two LIMIT forms.

mod common;
use common::*;

use flint_sql_core::ast::{BinaryOp, ExprKind, LimitSeparator, OrderingMode};

#[test]
fn where_clause() {
    let s = parse_select("SELECT a FROM t WHERE a > 1 AND b IS NOT NULL");
    let where_clause = s.where_clause.expect("WHERE should be present");
    let ExprKind::Binary { op, .. } = &where_clause.kind else {
        panic!("Expected binary expression, got {:?}", where_clause.kind);
    };
    assert_eq!(*op, BinaryOp::And);
}

#[test]
fn group_by_single_expr() {
    let s = parse_select("SELECT a FROM t GROUP BY a");
    let group = s.group_by.expect("GROUP BY should be present");
    assert_eq!(group.exprs.len(), 1);
    assert_eq!(as_column(&group.exprs[0]), "a");
    assert!(group.having.is_none());
}

#[test]
fn group_by_with_having() {
    let s = parse_select("SELECT a FROM t GROUP BY a, b HAVING count(*) > 10");
    let group = s.group_by.expect("GROUP BY should be present");
    assert_eq!(group.exprs.len(), 2);
    assert!(group.having.is_some());
}

#[test]
fn order_by_modes() {
    let s = parse_select("SELECT a FROM t ORDER BY a ASC, b DESC, c");
    let order = s.order_by.expect("ORDER BY should be present");
    assert_eq!(order.terms.len(), 3);
    assert_eq!(order.terms[0].mode, Some(OrderingMode::Ascending));
    assert_eq!(order.terms[1].mode, Some(OrderingMode::Descending));
    assert_eq!(order.terms[2].mode, None);
}

#[test]
fn limit_count_only() {
    let s = parse_select("SELECT a FROM t LIMIT 10");
    let limit = s.limit.expect("LIMIT should be present");
    assert_eq!(as_int(&limit.count), 10);
    assert!(limit.offset.is_none());
}

#[test]
fn limit_comma_form_inverts_roles() {
    // The expression before the comma is the offset, not the count.
    let s = parse_select("SELECT a FROM t LIMIT 5, 10");
    let limit = s.limit.expect("LIMIT should be present");
    assert_eq!(as_int(&limit.count), 10);
    let offset = limit.offset.expect("offset should be present");
    assert_eq!(as_int(&offset.expr), 5);
    assert_eq!(offset.separator, LimitSeparator::Comma);
}

#[test]
fn limit_offset_form() {
    let s = parse_select("SELECT a FROM t LIMIT 10 OFFSET 5");
    let limit = s.limit.expect("LIMIT should be present");
    assert_eq!(as_int(&limit.count), 10);
    let offset = limit.offset.expect("offset should be present");
    assert_eq!(as_int(&offset.expr), 5);
    assert_eq!(offset.separator, LimitSeparator::Offset);
}

#[test]
fn limit_accepts_expressions() {
    let s = parse_select("SELECT a FROM t LIMIT 5 + 5 OFFSET n * 2");
    let limit = s.limit.expect("LIMIT should be present");
    assert!(matches!(limit.count.kind, ExprKind::Binary { .. }));
    assert!(matches!(
        limit.offset.unwrap().expr.kind,
        ExprKind::Binary { .. }
    ));
}

#[test]
fn full_clause_stack_in_order() {
    let s = parse_select(
        "SELECT a, count(*) FROM t WHERE a > 0 GROUP BY a HAVING count(*) > 1 \
         ORDER BY a DESC LIMIT 100 OFFSET 20",
    );
    assert!(s.where_clause.is_some());
    assert!(s.group_by.as_ref().is_some_and(|g| g.having.is_some()));
    assert!(s.order_by.is_some());
    assert!(s.limit.is_some());
}
