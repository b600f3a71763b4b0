//! Translate order trees into ORDER BY clauses.

use query_engine_metadata::metadata::EntityInfo;
use query_engine_models::models::{NullsOrder, Order, OrderDirection, OrderField};
use query_engine_sql::sql;

/// Convert an order tree into an ORDER BY clause.
///
/// Only strategies on scalar fields are kept; they are stably sorted by priority, so entries
/// with equal priority keep the order the caller gave them in.
pub fn translate_order_by(entity: &EntityInfo, order: &Order) -> sql::ast::OrderBy {
    let mut prioritized: Vec<(i64, sql::ast::OrderByElement)> = order
        .iter()
        .filter_map(|(field, order_field)| {
            let strategy = match order_field {
                OrderField::Strategy(strategy) => strategy,
                OrderField::Nested(_) => {
                    tracing::debug!(field = %field, "ignoring nested order");
                    return None;
                }
                OrderField::Other(value) => {
                    tracing::debug!(field = %field, value = %value, "ignoring order without a direction");
                    return None;
                }
            };
            let Some(column) = entity.column_name(field) else {
                tracing::debug!(field = %field, "ignoring order on a relation field");
                return None;
            };
            let element = sql::ast::OrderByElement {
                target: sql::helpers::make_column(&entity.table_name, column),
                direction: match strategy.direction {
                    OrderDirection::Asc => sql::ast::OrderByDirection::Asc,
                    OrderDirection::Desc => sql::ast::OrderByDirection::Desc,
                },
                nulls: strategy.nulls.map(|nulls| match nulls {
                    NullsOrder::First => sql::ast::NullsOrder::First,
                    NullsOrder::Last => sql::ast::NullsOrder::Last,
                }),
            };
            Some((strategy.priority.unwrap_or(0), element))
        })
        .collect();

    prioritized.sort_by_key(|(priority, _)| *priority);

    sql::ast::OrderBy {
        elements: prioritized
            .into_iter()
            .map(|(_, element)| element)
            .collect(),
    }
}
