//! Helpers for processing requests and building SQL.

use query_engine_metadata::metadata::{EntityInfo, Metadata};
use query_engine_sql::sql;

use super::error::Error;

/// Static information shared by every compile call: the entity graph and the target dialect.
#[derive(Debug, Clone, Copy)]
pub struct Env<'a> {
    metadata: &'a Metadata,
    dialect: sql::dialect::Dialect,
}

impl<'a> Env<'a> {
    pub fn new(metadata: &'a Metadata, dialect: sql::dialect::Dialect) -> Env<'a> {
        Env { metadata, dialect }
    }

    pub fn dialect(&self) -> &sql::dialect::Dialect {
        &self.dialect
    }

    /// Lookup an entity's metadata by its logical name.
    pub fn lookup_entity(&self, entity_name: &str) -> Result<&'a EntityInfo, Error> {
        self.metadata
            .entity(entity_name)
            .ok_or_else(|| Error::EntityNotFound(entity_name.to_string()))
    }

    /// An empty SQL string using this dialect's placeholders.
    pub fn new_sql(&self) -> sql::string::SQL {
        sql::string::SQL::for_dialect(&self.dialect)
    }
}

/// The column expression a scalar field of `entity` refers to.
///
/// Unmapped fields fall back to their own name.
pub fn column_of(entity: &EntityInfo, field: &str) -> sql::ast::Expression {
    let column = entity.column_name(field).unwrap_or(field);
    sql::helpers::column_expr(&entity.table_name, column)
}
