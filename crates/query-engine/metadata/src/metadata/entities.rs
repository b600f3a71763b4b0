//! The validated entity graph the compilers read from.

use indexmap::IndexMap;

/// Logical name of an entity. Relations point at their target through it.
pub type EntityName = String;

/// How a single entity maps onto its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityInfo {
    pub table_name: String,
    /// Logical field name to column or relation, in declaration order.
    pub fields: IndexMap<String, FieldInfo>,
}

/// What a logical field maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInfo {
    /// A plain column on the entity's own table.
    Column(String),
    /// A link to another (possibly the same) entity.
    Relation(Relation),
}

/// The three supported kinds of relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Bridge(BridgeLink),
    Outgoing(OutgoingLink),
    Incoming(IncomingLink),
}

/// Many-to-many, mediated by a join table referencing both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeLink {
    pub target: EntityName,
    pub bridge_table: String,
    /// Column on the source table the bridge refers to.
    pub source_ref_key: String,
    /// Column on the target table the bridge refers to.
    pub target_ref_key: String,
    /// Bridge column holding the source key.
    pub bridge_source_foreign_key: String,
    /// Bridge column holding the target key.
    pub bridge_target_foreign_key: String,
}

/// Many-to-one or one-to-one; the foreign key lives on the source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingLink {
    pub target: EntityName,
    pub source_foreign_key: String,
    pub target_ref_key: String,
}

/// One-to-many; the foreign key lives on the target rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingLink {
    pub target: EntityName,
    pub source_ref_key: String,
    pub target_foreign_key: String,
}

impl Relation {
    /// The entity this relation leads to.
    pub fn target(&self) -> &str {
        match self {
            Relation::Bridge(link) => &link.target,
            Relation::Outgoing(link) => &link.target,
            Relation::Incoming(link) => &link.target,
        }
    }
}

impl EntityInfo {
    pub fn new(table_name: impl Into<String>) -> Self {
        EntityInfo {
            table_name: table_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Map a logical field onto a column.
    #[must_use]
    pub fn column(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.fields
            .insert(field.into(), FieldInfo::Column(column.into()));
        self
    }

    #[must_use]
    pub fn relation(mut self, field: impl Into<String>, relation: Relation) -> Self {
        self.fields
            .insert(field.into(), FieldInfo::Relation(relation));
        self
    }

    #[must_use]
    pub fn bridge(self, field: impl Into<String>, link: BridgeLink) -> Self {
        self.relation(field, Relation::Bridge(link))
    }

    #[must_use]
    pub fn outgoing(self, field: impl Into<String>, link: OutgoingLink) -> Self {
        self.relation(field, Relation::Outgoing(link))
    }

    #[must_use]
    pub fn incoming(self, field: impl Into<String>, link: IncomingLink) -> Self {
        self.relation(field, Relation::Incoming(link))
    }

    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }

    /// Resolve the column a logical field refers to.
    ///
    /// Unmapped fields fall back to their own name. Relation fields have no column.
    pub fn column_name<'a>(&'a self, field: &'a str) -> Option<&'a str> {
        match self.fields.get(field) {
            None => Some(field),
            Some(FieldInfo::Column(column)) => Some(column),
            Some(FieldInfo::Relation(_)) => None,
        }
    }

    /// The `(field, column)` pairs of every column-mapped field, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|(field, info)| match info {
            FieldInfo::Column(column) => Some((field.as_str(), column.as_str())),
            FieldInfo::Relation(_) => None,
        })
    }
}
