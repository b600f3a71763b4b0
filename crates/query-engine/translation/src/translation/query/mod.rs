//! Translate a select `Request`.

pub mod fields;
pub mod filtering;
pub mod pagination;
pub mod relationships;
pub mod sorting;
pub mod values;

use query_engine_models::models;
use query_engine_sql::sql;

use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Translate a request against the named entity into a SELECT statement.
pub fn translate(
    env: &Env,
    entity_name: &str,
    request: &models::Request,
) -> Result<sql::ast::Select, Error> {
    let entity = env.lookup_entity(entity_name)?;

    let select = sql::ast::Select {
        select_list: fields::translate_fields(entity, &request.fields),
        from: sql::ast::From::Table(sql::ast::TableName(entity.table_name.clone())),
        where_: sql::ast::Where(filtering::translate_search(env, entity, &request.search)?),
        order_by: sorting::translate_order_by(entity, &request.order),
        limit: pagination::translate_pagination(request.page, request.page_size),
    };

    // log and return
    tracing::debug!("SQL AST: {:?}", select);
    Ok(select)
}
