use std::collections::BTreeMap;

use crate::types::Type;
use crate::values::Color;

/// Largest integer exactly representable in the shared numeric model (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Marker for the `null` value when used as a native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NullValue;

/// Runtime value of a style expression.
///
/// `Array` and `Object` own their children on the heap, so the enum stays
/// fixed-size even though it is recursive. Objects are keyed by a `BTreeMap`
/// so equality, ordering and rendering do not depend on insertion order.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Color(Color),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// Returns `true` if `|x| <= MAX_SAFE_INTEGER`.
///
/// Not enforced when constructing numbers; callers relying on integral
/// precision must check it themselves. `NaN` is never safe.
pub fn is_safe_numeric_value(x: f64) -> bool {
    x.abs() <= MAX_SAFE_INTEGER as f64
}

pub fn is_safe_integer(x: i64) -> bool {
    x.unsigned_abs() <= MAX_SAFE_INTEGER
}

pub fn is_safe_unsigned(x: u64) -> bool {
    x <= MAX_SAFE_INTEGER
}

/// Static type of a runtime value.
///
/// Arrays report their exact length. The item type is the common type of
/// all elements, or `value` when they differ or the array is empty.
pub fn type_of(value: &Value) -> Type {
    match value {
        Value::Null => Type::Null,
        Value::Boolean(_) => Type::Boolean,
        Value::Number(_) => Type::Number,
        Value::String(_) => Type::String,
        Value::Color(_) => Type::Color,
        Value::Object(_) => Type::Object,
        Value::Array(items) => {
            let mut item_type: Option<Type> = None;
            for item in items {
                let ty = type_of(item);
                match &item_type {
                    None => item_type = Some(ty),
                    Some(existing) if *existing == ty => {}
                    Some(_) => {
                        item_type = Some(Type::Value);
                        break;
                    }
                }
            }
            Type::array_of_len(item_type.unwrap_or(Type::Value), items.len())
        }
    }
}

impl Value {
    pub const MAX_SAFE_INTEGER: u64 = MAX_SAFE_INTEGER;

    pub fn type_of(&self) -> Type {
        type_of(self)
    }

    /// Canonical textual rendering, used in diagnostics.
    ///
    /// Structurally distinct values always render differently.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<NullValue> for Value {
    fn from(_: NullValue) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Object(value)
    }
}
