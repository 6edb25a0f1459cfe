//! Enumerations travel as their canonical string name.

use crate::values::Value;

/// Canonical name table of an enumeration.
///
/// Implemented by [`enum_value_converter!`](crate::enum_value_converter),
/// which also derives the matching `ValueConverter`.
pub trait EnumNames: Sized {
    const NAMES: &'static [&'static str];

    fn name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

pub fn enum_to_value<T: EnumNames>(value: &T) -> Value {
    Value::String(value.name().to_string())
}

pub fn enum_from_value<T: EnumNames>(value: &Value) -> Option<T> {
    T::from_name(value.as_str()?)
}

/// Declare the canonical names of an enum and derive its converter.
///
/// ```
/// use stylexpr_core::{enum_value_converter, ValueConverter, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum LineCap {
///     Butt,
///     Round,
/// }
///
/// enum_value_converter!(LineCap {
///     LineCap::Butt => "butt",
///     LineCap::Round => "round",
/// });
///
/// assert_eq!(LineCap::Round.to_expression_value(), Value::from("round"));
/// assert_eq!(LineCap::from_expression_value(&Value::from("square")), None);
/// ```
#[macro_export]
macro_rules! enum_value_converter {
    ($ty:ty { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $crate::convert::EnumNames for $ty {
            const NAMES: &'static [&'static str] = &[$($name),+];

            fn name(&self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    $($name => ::core::option::Option::Some($variant),)+
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::convert::ValueConverter for $ty {
            type Wire = ::std::string::String;

            fn to_expression_value(&self) -> $crate::values::Value {
                $crate::convert::enum_to_value(self)
            }

            fn from_expression_value(
                value: &$crate::values::Value,
            ) -> ::core::option::Option<Self> {
                $crate::convert::enum_from_value(value)
            }
        }
    };
}
