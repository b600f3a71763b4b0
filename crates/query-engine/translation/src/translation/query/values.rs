//! Handle the translation of literal values.

use query_engine_models::models::ScalarValue;
use query_engine_sql::sql;

use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Format used for date and time parameters.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a scalar into a SQL value, which is always bound as a parameter.
pub fn translate_scalar(env: &Env, value: &ScalarValue) -> Result<sql::ast::Value, Error> {
    match value {
        ScalarValue::Null => Ok(sql::ast::Value::Null),
        ScalarValue::Bool(b) => Ok(match env.dialect().booleans {
            sql::dialect::BooleanBinding::Native => sql::ast::Value::Bool(*b),
            sql::dialect::BooleanBinding::Text => {
                sql::ast::Value::String(if *b { "TRUE" } else { "FALSE" }.to_string())
            }
        }),
        ScalarValue::Int(i) => Ok(sql::ast::Value::Int8(*i)),
        ScalarValue::Float(f) => Ok(sql::ast::Value::Float8(*f)),
        ScalarValue::String(s) => Ok(sql::ast::Value::String(s.clone())),
        // already in UTC; formatting drops sub-second precision
        ScalarValue::DateTime(timestamp) => Ok(sql::ast::Value::String(
            timestamp.format(DATE_TIME_FORMAT).to_string(),
        )),
        ScalarValue::Pending(reference) => Err(Error::InvalidScalar(reference.clone())),
    }
}

/// A scalar as a parameter expression.
pub fn translate_scalar_expr(env: &Env, value: &ScalarValue) -> Result<sql::ast::Expression, Error> {
    translate_scalar(env, value).map(sql::ast::Expression::Value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use query_engine_metadata::metadata::Metadata;
    use query_engine_sql::sql::dialect::Dialect;
    use similar_asserts::assert_eq;

    #[test]
    fn booleans_follow_the_dialect() {
        let metadata = Metadata::empty();
        let native = Env::new(&metadata, Dialect::generic());
        let text = Env::new(&metadata, Dialect::sqlite());

        assert_eq!(
            translate_scalar(&native, &ScalarValue::Bool(true)),
            Ok(sql::ast::Value::Bool(true))
        );
        assert_eq!(
            translate_scalar(&text, &ScalarValue::Bool(false)),
            Ok(sql::ast::Value::String("FALSE".to_string()))
        );
    }

    #[test]
    fn dates_are_truncated_to_seconds() {
        let metadata = Metadata::empty();
        let env = Env::new(&metadata, Dialect::generic());
        let timestamp = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap()
            + chrono::Duration::milliseconds(890);

        assert_eq!(
            translate_scalar(&env, &ScalarValue::DateTime(timestamp)),
            Ok(sql::ast::Value::String("2021-03-04 05:06:07".to_string()))
        );
    }

    #[test]
    fn pending_values_are_rejected() {
        let metadata = Metadata::empty();
        let env = Env::new(&metadata, Dialect::generic());

        assert_eq!(
            translate_scalar(&env, &ScalarValue::Pending("lookup".to_string())),
            Err(Error::InvalidScalar("lookup".to_string()))
        );
    }

    #[test]
    fn other_scalars_pass_through() {
        let metadata = Metadata::empty();
        let env = Env::new(&metadata, Dialect::sqlite());

        assert_eq!(translate_scalar(&env, &ScalarValue::Null), Ok(sql::ast::Value::Null));
        assert_eq!(translate_scalar(&env, &ScalarValue::Int(0)), Ok(sql::ast::Value::Int8(0)));
        assert_eq!(
            translate_scalar(&env, &ScalarValue::Float(2.5)),
            Ok(sql::ast::Value::Float8(2.5))
        );
        assert_eq!(
            translate_scalar(&env, &ScalarValue::String(String::new())),
            Ok(sql::ast::Value::String(String::new()))
        );
    }
}
