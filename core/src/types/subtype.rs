//! Structural assignability between type descriptors.

use thiserror::Error;

use super::Type;

/// Returned when `actual` cannot be used where `expected` is required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected} but found {actual} instead.")]
pub struct SubtypeError {
    pub expected: Type,
    pub actual: Type,
}

/// Check whether a value of type `actual` may appear where `expected` is required.
///
/// - `Error` is accepted everywhere, so a failed subexpression reports once.
/// - `array<T, N>` accepts `array<U, M>` when `U` fits `T` and, if `N` is set, `M == N`.
/// - `value` accepts null, boolean, number, string, object, color and any array.
/// - Everything else must match exactly.
pub fn check_subtype(expected: &Type, actual: &Type) -> Result<(), SubtypeError> {
    if matches!(actual, Type::Error) {
        return Ok(());
    }

    let fits = match expected {
        Type::Array(expected_array) => match actual {
            Type::Array(actual_array) => {
                check_subtype(&expected_array.item, &actual_array.item).is_ok()
                    && expected_array
                        .len
                        .is_none_or(|len| actual_array.len == Some(len))
            }
            _ => false,
        },
        Type::Value => {
            matches!(actual, Type::Value)
                || value_members().any(|member| check_subtype(&member, actual).is_ok())
        }
        _ => expected == actual,
    };

    if fits {
        Ok(())
    } else {
        Err(SubtypeError {
            expected: expected.clone(),
            actual: actual.clone(),
        })
    }
}

/// Convenience wrapper over [`check_subtype`].
pub fn is_subtype(expected: &Type, actual: &Type) -> bool {
    check_subtype(expected, actual).is_ok()
}

fn value_members() -> impl Iterator<Item = Type> {
    [
        Type::Null,
        Type::Boolean,
        Type::Number,
        Type::String,
        Type::Object,
        Type::Color,
        Type::array(Type::Value),
    ]
    .into_iter()
}
