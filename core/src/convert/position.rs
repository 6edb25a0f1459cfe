use crate::convert::ValueConverter;
use crate::types::Type;
use crate::values::Value;

/// Spherical position of a light source: radial distance, azimuthal and
/// polar angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub radial: f32,
    pub azimuthal: f32,
    pub polar: f32,
}

impl Position {
    pub const fn new(radial: f32, azimuthal: f32, polar: f32) -> Self {
        Position {
            radial,
            azimuthal,
            polar,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1.15, 210.0, 30.0)
    }
}

/// Travels as `[radial, azimuthal, polar]`.
impl ValueConverter for Position {
    type Wire = Vec<Value>;

    fn expression_type() -> Type {
        Type::array_of_len(Type::Number, 3)
    }

    fn to_expression_value(&self) -> Value {
        [self.radial, self.azimuthal, self.polar].to_expression_value()
    }

    fn from_expression_value(value: &Value) -> Option<Self> {
        let [radial, azimuthal, polar] = <[f32; 3]>::from_expression_value(value)?;
        Some(Position::new(radial, azimuthal, polar))
    }
}
