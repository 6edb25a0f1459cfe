use crate::convert::ValueConverter;
use crate::values::Value;

/// Raw configuration input handed to the parser.
///
/// Only array access and a string probe are needed to recognise expression
/// syntax; anything else is taken as a literal through [`to_value`].
///
/// [`to_value`]: Convertible::to_value
pub trait Convertible {
    /// `None` if the input is not an array.
    fn array_length(&self) -> Option<usize>;

    fn array_member(&self, index: usize) -> Option<&dyn Convertible>;

    fn to_str(&self) -> Option<&str>;

    /// The input as a literal value, if it has one.
    fn to_value(&self) -> Option<Value>;
}

impl Convertible for serde_json::Value {
    fn array_length(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn array_member(&self, index: usize) -> Option<&dyn Convertible> {
        self.as_array()?
            .get(index)
            .map(|member| member as &dyn Convertible)
    }

    fn to_str(&self) -> Option<&str> {
        self.as_str()
    }

    fn to_value(&self) -> Option<Value> {
        Some(self.to_expression_value())
    }
}
