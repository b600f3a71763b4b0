//! Type definitions of a SQL AST representation.

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// An INSERT clause with one VALUES tuple per row
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableName,
    pub columns: Vec<ColumnName>,
    pub values: Vec<Vec<Expression>>,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    /// `t.a, t.b`
    Columns(Vec<ColumnReference>),
    /// `t.*`
    Star(TableName),
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    Table(TableName),
}

/// A WHERE clause. `None` means no clause at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Option<Expression>);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: ColumnReference,
    pub direction: OrderByDirection,
    pub nulls: Option<NullsOrder>,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// Placement of nulls for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

/// LIMIT and OFFSET clauses. The offset is only rendered along with a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Operands joined with AND, without surrounding parentheses
    And(Vec<Expression>),
    /// Operands joined with OR, without surrounding parentheses
    Or(Vec<Expression>),
    /// NOT prefix
    Not(Box<Expression>),
    /// A parenthesized expression
    Nested(Box<Expression>),
    /// A binary operation on two scalar expressions
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// `expr IN (a, b, ...)`
    InList {
        expr: Box<Expression>,
        list: Vec<Expression>,
    },
    /// `expr IN (SELECT ...)`
    InSubquery {
        expr: Box<Expression>,
        select: Box<Select>,
    },
    ColumnReference(ColumnReference),
    /// A value, always rendered as a bind parameter
    Value(Value),
}

/// An operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    GreaterThan,
    LessThan,
    Like,
}

/// Value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i64),
    Float8(f64),
    String(String),
}

/// A database table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A database table's column name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// A column qualified by its table, as in `person.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference {
    pub table: TableName,
    pub name: ColumnName,
}
