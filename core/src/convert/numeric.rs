//! Numeric types other than `f64` travel as `Number`.

use crate::convert::ValueConverter;
use crate::values::{Value, is_safe_numeric_value};

/// Promoted to `f64` going in; rounded to the nearest `f32` coming out.
impl ValueConverter for f32 {
    type Wire = f64;

    fn to_expression_value(&self) -> Value {
        Value::Number(f64::from(*self))
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        value.as_number().map(|n| n as f32)
    }
}

/// Integers beyond `MAX_SAFE_INTEGER` lose precision going in. Coming out,
/// only integral numbers inside the safe range are accepted.
impl ValueConverter for i64 {
    type Wire = f64;

    fn to_expression_value(&self) -> Value {
        Value::Number(*self as f64)
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        let n = value.as_number()?;
        (n.fract() == 0.0 && is_safe_numeric_value(n)).then_some(n as i64)
    }
}
