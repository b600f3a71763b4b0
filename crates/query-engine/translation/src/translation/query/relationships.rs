//! Translate filters on relation fields into correlated subqueries.

use query_engine_metadata::metadata::{EntityInfo, Relation};
use query_engine_models::models::Search;
use query_engine_sql::sql;

use super::filtering;
use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Translate the filter on a relation field of `source` into an `IN (SELECT ...)` predicate.
///
/// The nested filter is translated against the relation's target entity and becomes the
/// innermost WHERE clause, which is left out entirely when the nested filter is empty.
pub fn translate_relation_filter(
    env: &Env,
    source: &EntityInfo,
    relation: &Relation,
    search: &Search,
) -> Result<sql::ast::Expression, Error> {
    let target = env.lookup_entity(relation.target())?;
    let inner = filtering::translate_search(env, target, search)?;

    let source_column = |column: &str| sql::helpers::column_expr(&source.table_name, column);

    Ok(match relation {
        Relation::Bridge(link) => {
            let targets =
                sql::helpers::select_column_where(&target.table_name, &link.target_ref_key, inner);
            let bridged = sql::helpers::select_column_where(
                &link.bridge_table,
                &link.bridge_source_foreign_key,
                Some(sql::helpers::in_subquery(
                    sql::helpers::column_expr(&link.bridge_table, &link.bridge_target_foreign_key),
                    targets,
                )),
            );
            sql::helpers::in_subquery(source_column(&link.source_ref_key), bridged)
        }
        Relation::Incoming(link) => sql::helpers::in_subquery(
            source_column(&link.source_ref_key),
            sql::helpers::select_column_where(
                &target.table_name,
                &link.target_foreign_key,
                inner,
            ),
        ),
        Relation::Outgoing(link) => sql::helpers::in_subquery(
            source_column(&link.source_foreign_key),
            sql::helpers::select_column_where(&target.table_name, &link.target_ref_key, inner),
        ),
    })
}
