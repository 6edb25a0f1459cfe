use std::collections::BTreeMap;

use crate::convert::ValueConverter;
use crate::types::Type;
use crate::values::Value;

impl<T: ValueConverter> ValueConverter for Vec<T> {
    type Wire = Vec<Value>;

    fn expression_type() -> Type {
        Type::array(T::expression_type())
    }

    fn to_expression_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_expression_value).collect())
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(T::from_expression_value)
            .collect()
    }
}

impl<T: ValueConverter, const N: usize> ValueConverter for [T; N] {
    type Wire = Vec<Value>;

    fn expression_type() -> Type {
        Type::array_of_len(T::expression_type(), N)
    }

    fn to_expression_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_expression_value).collect())
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != N {
            return None;
        }
        let converted: Vec<T> = items
            .iter()
            .map(T::from_expression_value)
            .collect::<Option<_>>()?;
        converted.try_into().ok()
    }
}

impl<T: ValueConverter> ValueConverter for BTreeMap<String, T> {
    type Wire = BTreeMap<String, Value>;

    fn to_expression_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_expression_value()))
                .collect(),
        )
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(key, value)| Some((key.clone(), T::from_expression_value(value)?)))
            .collect()
    }
}
