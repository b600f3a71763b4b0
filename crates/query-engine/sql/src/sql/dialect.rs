//! Conventions that differ between SQL databases.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How placeholders are written and how booleans are bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dialect {
    #[serde(default)]
    pub placeholder: Placeholder,
    #[serde(default)]
    pub booleans: BooleanBinding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Placeholder {
    /// `?` for every parameter.
    #[default]
    QuestionMark,
    /// `$1`, `$2`, ...
    Numbered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BooleanBinding {
    /// Bind booleans as booleans.
    #[default]
    Native,
    /// Bind booleans as the strings `TRUE` and `FALSE`.
    Text,
}

impl Dialect {
    pub fn generic() -> Self {
        Dialect::default()
    }

    pub fn sqlite() -> Self {
        Dialect {
            placeholder: Placeholder::QuestionMark,
            booleans: BooleanBinding::Text,
        }
    }

    pub fn postgres() -> Self {
        Dialect {
            placeholder: Placeholder::Numbered,
            booleans: BooleanBinding::Native,
        }
    }
}
