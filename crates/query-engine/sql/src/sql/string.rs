//! Type definitions of a low-level SQL string representation.

use serde::Serialize;

use super::dialect::{Dialect, Placeholder};

/// SQL text together with the parameters its placeholders refer to, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
    /// for internal use and tests only
    pub param_index: u64,
    placeholder: Placeholder,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

/// A parameter for a parameterized query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl SQL {
    pub fn new() -> SQL {
        SQL::with_placeholder(Placeholder::QuestionMark)
    }

    pub fn for_dialect(dialect: &Dialect) -> SQL {
        SQL::with_placeholder(dialect.placeholder)
    }

    fn with_placeholder(placeholder: Placeholder) -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
            param_index: 0,
            placeholder,
        }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Identifiers come from metadata and are written as they are.
    pub fn append_identifier(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    pub fn append_param(&mut self, param: Param) {
        self.param_index += 1;
        match self.placeholder {
            Placeholder::QuestionMark => self.sql.push('?'),
            Placeholder::Numbered => {
                self.sql.push('$');
                self.sql.push_str(&self.param_index.to_string());
            }
        }
        self.params.push(param);
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}
