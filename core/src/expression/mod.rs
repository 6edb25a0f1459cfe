//! Expression trees: the parse/evaluate protocol and its nodes.
//!
//! A tree is built once by [`ParsingContext::parse`] and is immutable
//! afterwards. [`Expression::evaluate`] is a pure function of the tree and
//! the [`EvaluationParameters`], so one tree may be evaluated concurrently
//! from several threads.
//!
//! Errors travel on two separate channels:
//!
//! - parse errors accumulate in the context's error list, each with a
//!   structural path, and the parse itself yields `None`;
//! - evaluation stops at the first failure and returns it unchanged.

mod assertion;
mod context;
mod convertible;
mod get;
mod literal;
mod registry;

#[cfg(test)]
mod context_test;

pub use assertion::Assertion;
pub use context::{ParsingContext, ParsingError};
pub use convertible::Convertible;
pub use get::Get;
pub use literal::Literal;
pub use registry::{DEFAULT_REGISTRY, ExpressionRegistry, ParseFn};

use core::fmt;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::Type;
use crate::values::Value;

/// Outcome of parsing one node. On `None` the reason has been recorded in
/// the [`ParsingContext`].
pub type ParseResult = Option<Box<dyn Expression>>;

pub type EvaluationResult = Result<Value, EvaluationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvaluationError {
    pub message: String,
}

impl EvaluationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read-only inputs of an evaluation, e.g. the attributes of the feature
/// being styled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationParameters {
    pub zoom: Option<f64>,
    pub properties: BTreeMap<String, Value>,
}

impl EvaluationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// A node of an immutable expression tree.
pub trait Expression: fmt::Debug + Send + Sync {
    /// Static result type, fixed at parse time.
    fn ty(&self) -> &Type;

    /// Evaluate this subtree. Must stop at the first failing child and
    /// return its error as is.
    fn evaluate(&self, params: &EvaluationParameters) -> EvaluationResult;

    /// Call `visit` once per direct child, in construction order.
    fn each_child(&self, visit: &mut dyn FnMut(&dyn Expression));
}

/// Construction of a node from its raw input.
///
/// Implementations validate arity, parse their arguments through
/// [`ParsingContext::concat`] and record every failure in the context
/// instead of returning it.
pub trait ParseExpression {
    fn parse(input: &dyn Convertible, ctx: &mut ParsingContext<'_>) -> ParseResult;
}
