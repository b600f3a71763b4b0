//! Build LIMIT and OFFSET clauses.

use query_engine_sql::sql;

/// A positive page size limits the result; a positive page then skips `page * page_size` rows.
pub fn translate_pagination(page: u64, page_size: Option<u64>) -> sql::ast::Limit {
    match page_size {
        Some(page_size) if page_size > 0 => sql::ast::Limit {
            limit: Some(page_size),
            offset: (page > 0).then(|| page.saturating_mul(page_size)),
        },
        _ => sql::helpers::empty_limit(),
    }
}
