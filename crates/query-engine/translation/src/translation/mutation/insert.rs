//! Translate a list of entities into a multi-row INSERT.

use query_engine_models::models::{Entity, PropertyValue};
use query_engine_sql::sql;

use crate::translation::error::Error;
use crate::translation::helpers::Env;
use crate::translation::query::values;

/// Build an INSERT of every column-mapped field of the entity, one VALUES tuple per row.
///
/// Values are read by logical field name; a missing property is inserted as NULL.
/// Non-scalar properties on relation or unmapped fields are ignored.
pub fn translate(env: &Env, entity_name: &str, rows: &[Entity]) -> Result<sql::ast::Insert, Error> {
    let entity = env.lookup_entity(entity_name)?;

    if rows.is_empty() {
        return Err(Error::EmptyInsert(entity_name.to_string()));
    }

    let columns: Vec<(&str, &str)> = entity.columns().collect();
    if columns.is_empty() {
        return Err(Error::NoInsertColumns(entity_name.to_string()));
    }

    let values = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|(field, _)| match row.get(*field) {
                    None => Ok(sql::ast::Expression::Value(sql::ast::Value::Null)),
                    Some(PropertyValue::Scalar(scalar)) => {
                        values::translate_scalar_expr(env, scalar)
                    }
                    Some(PropertyValue::Other(_)) => Err(Error::NotSupported(format!(
                        "A non-scalar value for column field '{field}'"
                    ))),
                })
                .collect::<Result<Vec<_>, Error>>()
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let insert = sql::ast::Insert {
        table: sql::ast::TableName(entity.table_name.clone()),
        columns: columns
            .iter()
            .map(|(_, column)| sql::ast::ColumnName((*column).to_string()))
            .collect(),
        values,
    };

    tracing::debug!(rows = rows.len(), "SQL AST: {:?}", insert);
    Ok(insert)
}
