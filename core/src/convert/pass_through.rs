//! Types that already are a `Value` payload convert without transformation.

use crate::convert::ValueConverter;
use crate::values::{Color, NullValue, Value};

macro_rules! pass_through {
    ($ty:ty, $variant:ident) => {
        impl ValueConverter for $ty {
            type Wire = $ty;

            fn to_expression_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn from_expression_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

pass_through!(bool, Boolean);
pass_through!(f64, Number);
pass_through!(String, String);
pass_through!(Color, Color);

impl ValueConverter for NullValue {
    type Wire = NullValue;

    fn to_expression_value(&self) -> Value {
        Value::Null
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        value.is_null().then_some(NullValue)
    }
}

impl ValueConverter for Value {
    type Wire = Value;

    fn to_expression_value(&self) -> Value {
        self.clone()
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}
