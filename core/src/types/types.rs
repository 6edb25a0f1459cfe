use core::fmt::Display;

use serde::Serialize;

/// Static type descriptor of an expression or a runtime value.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    // Primitives.
    Null,
    Number,
    Boolean,
    String,
    Color,
    Object,

    // Collections.
    Array(ArrayType),

    // Top type, accepted wherever any value may appear.
    Value,

    Error,
}

/// Element type plus an optional fixed length.
///
/// An `ArrayType` without a length accepts arrays of any length.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    pub item: Box<Type>,
    pub len: Option<usize>,
}

impl Type {
    /// `array<item>` of any length.
    pub fn array(item: Type) -> Self {
        Type::Array(ArrayType {
            item: Box::new(item),
            len: None,
        })
    }

    /// `array<item, len>`.
    pub fn array_of_len(item: Type, len: usize) -> Self {
        Type::Array(ArrayType {
            item: Box::new(item),
            len: Some(len),
        })
    }

    /// Resolve a type tag such as `"number"` used by cast expressions.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Type::String),
            "number" => Some(Type::Number),
            "boolean" => Some(Type::Boolean),
            "object" => Some(Type::Object),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Null => write!(f, "null"),
            Type::Number => write!(f, "number"),
            Type::Boolean => write!(f, "boolean"),
            Type::String => write!(f, "string"),
            Type::Color => write!(f, "color"),
            Type::Object => write!(f, "object"),
            Type::Value => write!(f, "value"),
            Type::Error => write!(f, "error"),
            Type::Array(array) => write!(f, "{}", array),
        }
    }
}

impl Display for ArrayType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.item.as_ref(), self.len) {
            (item, Some(len)) => write!(f, "array<{}, {}>", item, len),
            (Type::Value, None) => write!(f, "array"),
            (item, None) => write!(f, "array<{}>", item),
        }
    }
}
