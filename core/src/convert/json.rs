//! Loosely-typed JSON values map one-to-one onto the `Value` shape.
//!
//! This is the bridge used when ingesting raw configuration.

use crate::convert::ValueConverter;
use crate::values::{Value, is_safe_numeric_value};

impl ValueConverter for serde_json::Value {
    type Wire = Value;

    fn to_expression_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(Self::to_expression_value).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_expression_value()))
                    .collect(),
            ),
        }
    }

    /// Colors become their `rgba(...)` string. Non-finite numbers have no
    /// JSON form and yield `None`.
    fn from_expression_value(value: &Value) -> Option<Self> {
        Some(match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(json_number(*n)?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Color(c) => serde_json::Value::String(c.to_string()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Self::from_expression_value)
                    .collect::<Option<_>>()?,
            ),
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| Some((key.clone(), Self::from_expression_value(value)?)))
                    .collect::<Option<_>>()?,
            ),
        })
    }
}

/// Integral safe numbers come back as JSON integers.
fn json_number(n: f64) -> Option<serde_json::Number> {
    if n.fract() == 0.0 && is_safe_numeric_value(n) {
        Some(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
    }
}
