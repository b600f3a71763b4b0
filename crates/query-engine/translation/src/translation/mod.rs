//! Compile entity-shaped requests into parameterized SQL.
//!
//! Every entry point returns the SQL text together with its parameters, in the order the
//! placeholders appear in the text. Nothing here touches a database.

pub mod error;
pub mod helpers;
pub mod mutation;
pub mod query;

use query_engine_models::models;
use query_engine_sql::sql;

use error::Error;
use helpers::Env;

/// Compile a full SELECT: projection, table, filter, order and pagination.
pub fn compile_select(
    request: &models::Request,
    env: &Env,
    entity: &str,
) -> Result<sql::string::SQL, Error> {
    let select = query::translate(env, entity, request)?;
    let mut sql = env.new_sql();
    select.to_sql(&mut sql);
    Ok(sql)
}

/// Compile only the boolean condition of a filter tree, without the WHERE keyword.
/// An empty filter compiles to empty text and no parameters.
pub fn compile_where(
    search: &models::Search,
    env: &Env,
    entity: &str,
) -> Result<sql::string::SQL, Error> {
    let entity = env.lookup_entity(entity)?;
    let mut sql = env.new_sql();
    if let Some(expression) = query::filtering::translate_search(env, entity, search)? {
        expression.to_sql(&mut sql);
    }
    Ok(sql)
}

/// Compile an order tree into an `ORDER BY ...` clause, or an empty string.
pub fn compile_order_by(order: &models::Order, env: &Env, entity: &str) -> Result<String, Error> {
    let entity = env.lookup_entity(entity)?;
    let mut sql = env.new_sql();
    query::sorting::translate_order_by(entity, order).to_sql(&mut sql);
    Ok(sql.sql)
}

/// Compile a multi-row INSERT.
pub fn compile_insert(
    entities: &[models::Entity],
    env: &Env,
    entity: &str,
) -> Result<sql::string::SQL, Error> {
    let insert = mutation::insert::translate(env, entity, entities)?;
    let mut sql = env.new_sql();
    insert.to_sql(&mut sql);
    Ok(sql)
}
