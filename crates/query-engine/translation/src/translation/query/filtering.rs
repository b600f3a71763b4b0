//! Handle filtering/where clauses translation.

use query_engine_metadata::metadata::{EntityInfo, FieldInfo};
use query_engine_models::models::{Condition, EqualValue, ScalarValue, Search, Where};
use query_engine_sql::sql;

use super::relationships;
use super::values;
use crate::translation::error::Error;
use crate::translation::helpers::{column_of, Env};

/// Translate a filter tree into a boolean expression over `entity`'s table.
///
/// Sibling clauses are joined with AND, or, when the level is negated, rendered as
/// `NOT (a OR b ...)`. Returns `None` when nothing in the tree produces a clause.
pub fn translate_search(
    env: &Env,
    entity: &EntityInfo,
    search: &Search,
) -> Result<Option<sql::ast::Expression>, Error> {
    let mut fragments = vec![];
    for (field, value) in &search.fields {
        if let Some(fragment) = translate_field(env, entity, field, value)? {
            fragments.push(fragment);
        }
    }

    Ok(if search.not {
        sql::helpers::none_of(fragments)
    } else {
        sql::helpers::and_all(fragments)
    })
}

fn translate_field(
    env: &Env,
    entity: &EntityInfo,
    field: &str,
    value: &Where,
) -> Result<Option<sql::ast::Expression>, Error> {
    tracing::trace!(table = %entity.table_name, field, "translating filter field");

    match (entity.field(field), value) {
        (Some(FieldInfo::Relation(relation)), Where::Nested(search)) => {
            relationships::translate_relation_filter(env, entity, relation, search).map(Some)
        }
        (Some(FieldInfo::Relation(_)), _) => Err(Error::NotSupported(format!(
            "Filtering relation field '{field}' by value"
        ))),
        (_, Where::Nested(_)) => {
            tracing::debug!(
                table = %entity.table_name,
                field,
                "ignoring nested filter on a field that is not a relation"
            );
            Ok(None)
        }
        (_, Where::Value(scalar)) => equal_to(env, column_of(entity, field), scalar),
        (_, Where::List(list)) => in_list(env, column_of(entity, field), list),
        (_, Where::Condition(condition)) => {
            translate_condition(env, column_of(entity, field), condition)
        }
    }
}

/// Translate a condition object on a single column.
pub fn translate_condition(
    env: &Env,
    column: sql::ast::Expression,
    condition: &Condition,
) -> Result<Option<sql::ast::Expression>, Error> {
    match condition {
        Condition::Equal {
            value: EqualValue::Single(scalar),
            not,
        } => Ok(equal_to(env, column, scalar)?.map(|expr| negate_if(*not, expr))),
        Condition::Equal {
            value: EqualValue::List(list),
            not,
        } => Ok(in_list(env, column, list)?.map(|expr| negate_if(*not, expr))),
        Condition::Like { pattern, not } => {
            if pattern.is_null() {
                return Ok(None);
            }
            let like = sql::helpers::binary(
                column,
                sql::ast::BinaryOperator::Like,
                values::translate_scalar_expr(env, pattern)?,
            );
            Ok(Some(negate_if(*not, like)))
        }
        Condition::Range {
            greater,
            lesser,
            not,
        } => translate_range(env, &column, greater.as_ref(), lesser.as_ref(), *not),
        Condition::Unspecified { .. } => {
            tracing::debug!("ignoring condition without an operator");
            Ok(None)
        }
    }
}

fn translate_range(
    env: &Env,
    column: &sql::ast::Expression,
    greater: Option<&ScalarValue>,
    lesser: Option<&ScalarValue>,
    not: bool,
) -> Result<Option<sql::ast::Expression>, Error> {
    let bounds = [
        (greater, sql::ast::BinaryOperator::GreaterThan),
        (lesser, sql::ast::BinaryOperator::LessThan),
    ];

    let mut parts = vec![];
    for (bound, operator) in bounds {
        if let Some(bound) = bound.filter(|bound| !bound.is_null()) {
            parts.push(sql::helpers::binary(
                column.clone(),
                operator,
                values::translate_scalar_expr(env, bound)?,
            ));
        }
    }

    if parts.is_empty() {
        return Ok(None);
    }

    let range = sql::ast::Expression::And(parts);
    Ok(Some(if not {
        sql::ast::Expression::Not(Box::new(sql::ast::Expression::Nested(Box::new(range))))
    } else {
        range
    }))
}

fn equal_to(
    env: &Env,
    column: sql::ast::Expression,
    scalar: &ScalarValue,
) -> Result<Option<sql::ast::Expression>, Error> {
    if scalar.is_null() {
        return Ok(None);
    }
    Ok(Some(sql::helpers::binary(
        column,
        sql::ast::BinaryOperator::Equals,
        values::translate_scalar_expr(env, scalar)?,
    )))
}

fn in_list(
    env: &Env,
    column: sql::ast::Expression,
    list: &[ScalarValue],
) -> Result<Option<sql::ast::Expression>, Error> {
    if list.is_empty() {
        return Ok(None);
    }
    let list = list
        .iter()
        .map(|scalar| values::translate_scalar_expr(env, scalar))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(Some(sql::ast::Expression::InList {
        expr: Box::new(column),
        list,
    }))
}

fn negate_if(not: bool, expr: sql::ast::Expression) -> sql::ast::Expression {
    if not {
        sql::ast::Expression::Not(Box::new(expr))
    } else {
        expr
    }
}
