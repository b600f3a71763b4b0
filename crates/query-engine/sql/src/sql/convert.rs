//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::*;

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        sql.append_syntax(" ");

        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        if !self.order_by.elements.is_empty() {
            sql.append_syntax(" ");
            self.order_by.to_sql(sql);
        }

        if self.limit.limit.is_some() {
            sql.append_syntax(" ");
            self.limit.to_sql(sql);
        }
    }
}

impl Insert {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("INSERT INTO ");
        self.table.to_sql(sql);

        sql.append_syntax(" (");
        for (index, column) in self.columns.iter().enumerate() {
            column.to_sql(sql);
            if index < (self.columns.len() - 1) {
                sql.append_syntax(", ");
            }
        }
        sql.append_syntax(") VALUES ");

        for (index, row) in self.values.iter().enumerate() {
            sql.append_syntax("(");
            for (index, value) in row.iter().enumerate() {
                value.to_sql(sql);
                if index < (row.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
            sql.append_syntax(")");
            if index < (self.values.len() - 1) {
                sql.append_syntax(", ");
            }
        }
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::Columns(columns) => {
                for (index, column) in columns.iter().enumerate() {
                    column.to_sql(sql);
                    if index < (columns.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::Star(table) => {
                table.to_sql(sql);
                sql.append_syntax(".*");
            }
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match &self {
            From::Table(table) => table.to_sql(sql),
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Where(Some(expression)) = self {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column) => column.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::And(exprs) => join(exprs, " AND ", sql),
            Expression::Or(exprs) => join(exprs, " OR ", sql),
            Expression::Not(expr) => {
                sql.append_syntax("NOT ");
                expr.to_sql(sql);
            }
            Expression::Nested(expr) => {
                sql.append_syntax("(");
                expr.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::InList { expr, list } => {
                expr.to_sql(sql);
                sql.append_syntax(" IN (");
                join(list, ", ", sql);
                sql.append_syntax(")");
            }
            Expression::InSubquery { expr, select } => {
                expr.to_sql(sql);
                sql.append_syntax(" IN (");
                select.to_sql(sql);
                sql.append_syntax(")");
            }
        }
    }
}

fn join(exprs: &[Expression], separator: &str, sql: &mut SQL) {
    for (index, expr) in exprs.iter().enumerate() {
        expr.to_sql(sql);
        if index < (exprs.len() - 1) {
            sql.append_syntax(separator);
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::Like => sql.append_syntax(" LIKE "),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Null => sql.append_param(Param::Null),
            Value::Bool(b) => sql.append_param(Param::Bool(*b)),
            Value::Int8(i) => sql.append_param(Param::Int(*i)),
            Value::Float8(f) => sql.append_param(Param::Float(*f)),
            Value::String(s) => sql.append_param(Param::String(s.clone())),
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax("ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        match self.direction {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
        match self.nulls {
            None => (),
            Some(NullsOrder::First) => sql.append_syntax(" NULLS FIRST"),
            Some(NullsOrder::Last) => sql.append_syntax(" NULLS LAST"),
        }
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(limit) = self.limit {
            sql.append_syntax("LIMIT ");
            sql.append_syntax(&limit.to_string());
            if let Some(offset) = self.offset {
                sql.append_syntax(" OFFSET ");
                sql.append_syntax(&offset.to_string());
            }
        }
    }
}

// names
impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.table.to_sql(sql);
        sql.append_syntax(".");
        self.name.to_sql(sql);
    }
}

#[cfg(test)]
mod tests {
    use super::super::dialect::Dialect;
    use super::super::helpers::*;
    use super::*;
    use similar_asserts::assert_eq;

    fn render_expr(expr: &Expression) -> SQL {
        let mut sql = SQL::new();
        expr.to_sql(&mut sql);
        sql
    }

    fn gt(column: &str, value: i64) -> Expression {
        binary(
            column_expr("person", column),
            BinaryOperator::GreaterThan,
            Expression::Value(Value::Int8(value)),
        )
    }

    #[test]
    fn conjunctions_are_not_parenthesized() {
        let expr = Expression::And(vec![gt("age", 18), gt("height", 150)]);
        insta::assert_snapshot!(render_expr(&expr).sql, @"person.age > ? AND person.height > ?");
    }

    #[test]
    fn none_of_wraps_a_disjunction() {
        let expr = none_of(vec![gt("age", 18), gt("height", 150)]).unwrap();
        insta::assert_snapshot!(render_expr(&expr).sql, @"NOT (person.age > ? OR person.height > ?)");
        assert_eq!(none_of(vec![]), None);
    }

    #[test]
    fn subquery_with_and_without_where() {
        let inner = select_column_where(
            "vehicles",
            "ownerId",
            Some(binary(
                column_expr("vehicles", "model"),
                BinaryOperator::Equals,
                Expression::Value(Value::String("corolla".to_string())),
            )),
        );
        let expr = in_subquery(column_expr("person", "id"), inner);
        let sql = render_expr(&expr);
        insta::assert_snapshot!(sql.sql, @"person.id IN (SELECT vehicles.ownerId FROM vehicles WHERE vehicles.model = ?)");
        assert_eq!(sql.params, vec![Param::String("corolla".to_string())]);

        let bare = in_subquery(
            column_expr("person", "id"),
            select_column_where("vehicles", "ownerId", None),
        );
        insta::assert_snapshot!(render_expr(&bare).sql, @"person.id IN (SELECT vehicles.ownerId FROM vehicles)");
    }

    #[test]
    fn select_with_every_clause() {
        let mut select = Select {
            select_list: SelectList::Star(TableName("person".to_string())),
            ..simple_select(vec![], "person")
        };
        select.where_ = Where(Some(gt("age", 18)));
        select.order_by = OrderBy {
            elements: vec![
                OrderByElement {
                    target: make_column("person", "age"),
                    direction: OrderByDirection::Desc,
                    nulls: Some(NullsOrder::Last),
                },
                OrderByElement {
                    target: make_column("person", "name"),
                    direction: OrderByDirection::Asc,
                    nulls: None,
                },
            ],
        };
        select.limit = Limit {
            limit: Some(10),
            offset: Some(20),
        };

        let mut sql = SQL::new();
        select.to_sql(&mut sql);
        insta::assert_snapshot!(sql.sql, @"SELECT person.* FROM person WHERE person.age > ? ORDER BY person.age DESC NULLS LAST, person.name ASC LIMIT 10 OFFSET 20");
        assert_eq!(sql.params, vec![Param::Int(18)]);
    }

    #[test]
    fn offset_needs_a_limit() {
        let mut select = simple_select(vec![make_column("person", "id")], "person");
        select.limit = Limit {
            limit: None,
            offset: Some(20),
        };
        let mut sql = SQL::new();
        select.to_sql(&mut sql);
        insta::assert_snapshot!(sql.sql, @"SELECT person.id FROM person");
    }

    #[test]
    fn insert_rows_with_numbered_placeholders() {
        let insert = Insert {
            table: TableName("person".to_string()),
            columns: vec![ColumnName("id".to_string()), ColumnName("name".to_string())],
            values: vec![
                vec![
                    Expression::Value(Value::Int8(1)),
                    Expression::Value(Value::String("Ann".to_string())),
                ],
                vec![
                    Expression::Value(Value::Int8(2)),
                    Expression::Value(Value::Null),
                ],
            ],
        };
        let mut sql = SQL::for_dialect(&Dialect::postgres());
        insert.to_sql(&mut sql);
        insta::assert_snapshot!(sql.sql, @"INSERT INTO person (id, name) VALUES ($1, $2), ($3, $4)");
        assert_eq!(
            sql.params,
            vec![
                Param::Int(1),
                Param::String("Ann".to_string()),
                Param::Int(2),
                Param::Null
            ]
        );
    }
}
