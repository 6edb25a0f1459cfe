//! stylexpr - typed runtime values and expressions for dynamic style configuration
//!
//! # Overview
//!
//! Style properties are often data-driven: a line width that depends on a
//! feature attribute, a color picked from a lookup with a safe default.
//! stylexpr parses such expressions from JSON once and evaluates them many
//! times against per-feature parameters.
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use stylexpr::{EvaluationParameters, StyleExpression, Value};
//!
//! // Use the "width" property when it is a number, 1 otherwise.
//! let expr = StyleExpression::parse(&json!(["number", ["get", "width"], 1])).unwrap();
//!
//! let params = EvaluationParameters::new().with_property("width", 4.0);
//! assert_eq!(expr.evaluate(&params), Ok(Value::Number(4.0)));
//!
//! let params = EvaluationParameters::new().with_property("width", "wide");
//! assert_eq!(expr.evaluate(&params), Ok(Value::Number(1.0)));
//! ```
//!
//! # Native types
//!
//! Results convert into native configuration types through
//! [`ValueConverter`]:
//!
//! ```
//! use serde_json::json;
//! use stylexpr::{EvaluationParameters, StyleExpression};
//!
//! let expr = StyleExpression::parse(&json!(["literal", [1, 2]])).unwrap();
//! let offset: [f32; 2] = expr.evaluate_as(&EvaluationParameters::new()).unwrap();
//! assert_eq!(offset, [1.0, 2.0]);
//! ```

use thiserror::Error;
use tracing::debug;

// Re-export public API from stylexpr_core
pub use stylexpr_core::convert::{self, Position, ValueConverter};
pub use stylexpr_core::expression::{
    self, Assertion, Convertible, EvaluationError, EvaluationParameters, EvaluationResult,
    Expression, ExpressionRegistry, ParseExpression, ParseResult, ParsingContext, ParsingError,
};
pub use stylexpr_core::types::{self, ArrayType, Type, check_subtype};
pub use stylexpr_core::values::{self, Color, NullValue, Value};
pub use stylexpr_core::{ParseOptions, enum_value_converter};

/// Public error type for stylexpr operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// One or more parse errors, in the order they were recorded.
    #[error("Parsing failed with {} error(s)", .0.len())]
    Parse(Vec<ParsingError>),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// The result evaluated fine but has no representation as the requested
    /// native type.
    #[error("Expected a value of type {expected}, but found {found} instead.")]
    Conversion { expected: Type, found: Type },
}

/// A parsed expression tree, ready to be evaluated.
#[derive(Debug)]
pub struct StyleExpression {
    root: Box<dyn Expression>,
}

impl StyleExpression {
    pub fn parse(input: &serde_json::Value) -> Result<Self, Error> {
        Self::parse_with(input, None, &expression::DEFAULT_REGISTRY, &ParseOptions::DEFAULT)
    }

    /// Parse and require the result type to be a subtype of `expected`.
    pub fn parse_expecting(input: &serde_json::Value, expected: Type) -> Result<Self, Error> {
        Self::parse_with(
            input,
            Some(expected),
            &expression::DEFAULT_REGISTRY,
            &ParseOptions::DEFAULT,
        )
    }

    pub fn parse_with(
        input: &serde_json::Value,
        expected: Option<Type>,
        registry: &ExpressionRegistry,
        options: &ParseOptions,
    ) -> Result<Self, Error> {
        let mut errors = Vec::new();
        let mut ctx = ParsingContext::with_registry(&mut errors, registry, options);
        if let Some(expected) = expected {
            ctx = ctx.expecting(expected);
        }

        match ctx.parse(input) {
            Some(root) if errors.is_empty() => Ok(Self { root }),
            _ => {
                debug!(count = errors.len(), "expression rejected");
                Err(Error::Parse(errors))
            }
        }
    }

    pub fn ty(&self) -> &Type {
        self.root.ty()
    }

    pub fn root(&self) -> &dyn Expression {
        self.root.as_ref()
    }

    pub fn evaluate(&self, params: &EvaluationParameters) -> EvaluationResult {
        self.root.evaluate(params)
    }

    /// Evaluate and convert the result to `T`.
    pub fn evaluate_as<T: ValueConverter>(&self, params: &EvaluationParameters) -> Result<T, Error> {
        let value = self.evaluate(params)?;
        T::from_expression_value(&value).ok_or_else(|| Error::Conversion {
            expected: T::expression_type(),
            found: value.type_of(),
        })
    }
}
