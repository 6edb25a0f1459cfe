pub mod color;
mod display;
pub mod value;

pub use color::{Color, ColorParseError};
pub use value::{
    MAX_SAFE_INTEGER, NullValue, Value, is_safe_integer, is_safe_numeric_value, is_safe_unsigned,
    type_of,
};
