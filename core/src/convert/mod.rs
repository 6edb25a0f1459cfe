//! Bridges between native configuration types and [`Value`].
//!
//! Every native type that takes part in expressions implements
//! [`ValueConverter`] exactly once. Converters compose: `Vec<T>` and
//! `[T; N]` defer to `T`'s own converter for their elements.
//!
//! Reverse conversions never fail loudly. They return `None` on any
//! mismatch and leave it to the caller to report a parse or evaluation
//! error.

mod enumeration;
mod json;
mod numeric;
mod pass_through;
mod position;
mod sequence;


pub use enumeration::{EnumNames, enum_from_value, enum_to_value};
pub use position::Position;

use std::collections::BTreeMap;

use crate::types::Type;
use crate::values::{Color, NullValue, Value};

/// A payload carried directly by one of the [`Value`] variants.
pub trait WireShape {
    fn wire_type() -> Type;
}

impl WireShape for NullValue {
    fn wire_type() -> Type {
        Type::Null
    }
}

impl WireShape for bool {
    fn wire_type() -> Type {
        Type::Boolean
    }
}

impl WireShape for f64 {
    fn wire_type() -> Type {
        Type::Number
    }
}

impl WireShape for String {
    fn wire_type() -> Type {
        Type::String
    }
}

impl WireShape for Color {
    fn wire_type() -> Type {
        Type::Color
    }
}

impl WireShape for Vec<Value> {
    fn wire_type() -> Type {
        Type::array(Type::Value)
    }
}

impl WireShape for BTreeMap<String, Value> {
    fn wire_type() -> Type {
        Type::Object
    }
}

impl WireShape for Value {
    fn wire_type() -> Type {
        Type::Value
    }
}

/// Bidirectional conversion between a native type and [`Value`].
pub trait ValueConverter: Sized {
    /// The `Value` payload this type travels as.
    type Wire: WireShape;

    /// The static type this native type maps to.
    fn expression_type() -> Type {
        Self::Wire::wire_type()
    }

    fn to_expression_value(&self) -> Value;

    /// `None` if `value` does not have the shape `Self` requires.
    fn from_expression_value(value: &Value) -> Option<Self>;
}

pub fn to_expression_value<T: ValueConverter>(value: &T) -> Value {
    value.to_expression_value()
}

pub fn from_expression_value<T: ValueConverter>(value: &Value) -> Option<T> {
    T::from_expression_value(value)
}

pub fn value_type_to_expression_type<T: ValueConverter>() -> Type {
    T::expression_type()
}
