//! Runtime values, type descriptors and expression nodes for style expressions.
//!
//! The crate is organised leaf-first:
//!
//! - [`values`]: the closed [`Value`](values::Value) variant and its static type.
//! - [`types`]: the type descriptor algebra and the subtype check.
//! - [`convert`]: bridges between native configuration types and `Value`.
//! - [`expression`]: the parse/evaluate protocol and its nodes.

pub mod convert;
pub mod expression;
pub mod options;
pub mod types;
pub mod values;

pub use convert::ValueConverter;
pub use expression::{
    Assertion, Convertible, EvaluationError, EvaluationParameters, EvaluationResult, Expression,
    ExpressionRegistry, Get, Literal, ParseExpression, ParseResult, ParsingContext, ParsingError,
};
pub use options::ParseOptions;
pub use types::{ArrayType, Type, check_subtype};
pub use values::{Color, NullValue, Value};
