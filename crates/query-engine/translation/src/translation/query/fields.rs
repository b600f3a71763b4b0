//! Handle the projection of fields.

use query_engine_metadata::metadata::EntityInfo;
use query_engine_models::models::{FieldSelection, Fields};
use query_engine_sql::sql;

/// Translate the field selection into a select list.
///
/// Only fields marked `true` are projected; nested selections and relation fields are not.
/// An empty projection selects every column of the table.
pub fn translate_fields(entity: &EntityInfo, fields: &Fields) -> sql::ast::SelectList {
    let columns: Vec<sql::ast::ColumnReference> = fields
        .iter()
        .filter(|(field, selection)| match selection {
            FieldSelection::Other(value) => {
                tracing::debug!(field = %field, value = %value, "ignoring unrecognized field marker");
                false
            }
            _ => selection.is_included(),
        })
        .filter_map(|(field, _)| match entity.column_name(field) {
            Some(column) => Some(sql::helpers::make_column(&entity.table_name, column)),
            None => {
                tracing::debug!(field = %field, "ignoring projection of a relation field");
                None
            }
        })
        .collect();

    if columns.is_empty() {
        sql::ast::SelectList::Star(sql::ast::TableName(entity.table_name.clone()))
    } else {
        sql::ast::SelectList::Columns(columns)
    }
}
