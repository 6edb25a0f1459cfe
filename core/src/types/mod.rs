mod subtype;
mod types;


pub use subtype::{SubtypeError, check_subtype, is_subtype};
pub use types::{ArrayType, Type};
