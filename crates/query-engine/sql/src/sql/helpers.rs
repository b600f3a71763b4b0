//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(None)
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

// Names //

/// Refer to a column of a specific table.
pub fn make_column(table: &str, name: &str) -> ColumnReference {
    ColumnReference {
        table: TableName(table.to_string()),
        name: ColumnName(name.to_string()),
    }
}

/// A column reference expression.
pub fn column_expr(table: &str, name: &str) -> Expression {
    Expression::ColumnReference(make_column(table, name))
}

// Expressions //

/// Combine expressions with AND. A single operand is returned as is.
pub fn and_all(mut exprs: Vec<Expression>) -> Option<Expression> {
    match exprs.len() {
        0 => None,
        1 => exprs.pop(),
        _ => Some(Expression::And(exprs)),
    }
}

/// `NOT (a OR b OR ...)`, or None when there is nothing to negate.
pub fn none_of(exprs: Vec<Expression>) -> Option<Expression> {
    if exprs.is_empty() {
        None
    } else {
        Some(Expression::Not(Box::new(Expression::Nested(Box::new(
            Expression::Or(exprs),
        )))))
    }
}

/// `left <operator> right`
pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}

/// `expr IN (SELECT ...)`
pub fn in_subquery(expr: Expression, select: Select) -> Expression {
    Expression::InSubquery {
        expr: Box::new(expr),
        select: Box::new(select),
    }
}

// SELECTs //

/// Build a select of the given columns from a table, with the rest empty.
pub fn simple_select(columns: Vec<ColumnReference>, table: &str) -> Select {
    Select {
        select_list: SelectList::Columns(columns),
        from: From::Table(TableName(table.to_string())),
        where_: empty_where(),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// `SELECT <table>.<column> FROM <table> [WHERE <predicate>]`, the inner part of a relation
/// filter.
pub fn select_column_where(table: &str, column: &str, predicate: Option<Expression>) -> Select {
    let mut select = simple_select(vec![make_column(table, column)], table);
    select.where_ = Where(predicate);
    select
}
