//! Name → parser table used to dispatch `["name", ...]` inputs.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::expression::{
    Assertion, Convertible, Get, Literal, ParseExpression, ParseResult, ParsingContext,
};

pub type ParseFn = fn(&dyn Convertible, &mut ParsingContext<'_>) -> ParseResult;

/// Registry holding the built-in expressions.
pub static DEFAULT_REGISTRY: Lazy<ExpressionRegistry> = Lazy::new(ExpressionRegistry::with_builtins);

/// Explicit table of expression parsers, keyed by expression name.
#[derive(Debug, Clone, Default)]
pub struct ExpressionRegistry {
    parsers: HashMap<&'static str, ParseFn>,
}

impl ExpressionRegistry {
    /// An empty registry: every input except literals is rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Type assertions (`string`, `number`, `boolean`, `object`), `literal`
    /// and `get`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for tag in ["string", "number", "boolean", "object"] {
            registry.register(tag, Assertion::parse);
        }
        registry.register("literal", Literal::parse);
        registry.register("get", Get::parse);
        registry
    }

    /// Add or replace the parser for `name`.
    pub fn register(&mut self, name: &'static str, parse: ParseFn) -> &mut Self {
        self.parsers.insert(name, parse);
        self
    }

    pub fn get(&self, name: &str) -> Option<ParseFn> {
        self.parsers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parsers.keys().copied()
    }
}
