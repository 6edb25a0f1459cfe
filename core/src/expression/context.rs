use thiserror::Error;
use tracing::debug;

use crate::expression::{
    Convertible, DEFAULT_REGISTRY, ExpressionRegistry, Literal, ParseResult,
};
use crate::options::ParseOptions;
use crate::types::{Type, check_subtype};
use crate::values::{Color, Value};

/// A parse error together with the path of the offending input, e.g. `[1][2]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message}", key_prefix(.key))]
pub struct ParsingError {
    pub key: String,
    pub message: String,
}

fn key_prefix(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!("{}: ", key)
    }
}

/// State threaded through a recursive parse.
///
/// The error list is borrowed from the caller and shared by every child
/// context derived with [`concat`](Self::concat); errors are only ever
/// appended. Each context also carries the type expected at its position.
pub struct ParsingContext<'a> {
    key: String,
    expected: Option<Type>,
    depth: usize,
    errors: &'a mut Vec<ParsingError>,
    registry: &'a ExpressionRegistry,
    options: &'a ParseOptions,
}

impl<'a> ParsingContext<'a> {
    /// Root context using the built-in expressions and default options.
    pub fn new(errors: &'a mut Vec<ParsingError>) -> Self {
        Self::with_registry(errors, &DEFAULT_REGISTRY, &ParseOptions::DEFAULT)
    }

    pub fn with_registry(
        errors: &'a mut Vec<ParsingError>,
        registry: &'a ExpressionRegistry,
        options: &'a ParseOptions,
    ) -> Self {
        Self {
            key: String::new(),
            expected: None,
            depth: 0,
            errors,
            registry,
            options,
        }
    }

    /// Require the root expression to produce a subtype of `expected`.
    pub fn expecting(mut self, expected: Type) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn expected(&self) -> Option<&Type> {
        self.expected.as_ref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn errors(&self) -> &[ParsingError] {
        self.errors.as_slice()
    }

    /// Record an error at this context's position.
    pub fn error(&mut self, message: impl Into<String>) {
        let error = ParsingError {
            key: self.key.clone(),
            message: message.into(),
        };
        debug!(key = %error.key, message = %error.message, "parse error");
        self.errors.push(error);
    }

    /// Child context for argument `index`, expecting `expected` there.
    pub fn concat(&mut self, index: usize, expected: Option<Type>) -> ParsingContext<'_> {
        ParsingContext {
            key: format!("{}[{}]", self.key, index),
            expected,
            depth: self.depth + 1,
            errors: &mut *self.errors,
            registry: self.registry,
            options: self.options,
        }
    }

    /// Parse `input` into a node and check it against the expected type.
    ///
    /// An array whose first element is a string is dispatched on that name
    /// through the registry; any other input is a literal.
    pub fn parse(&mut self, input: &dyn Convertible) -> ParseResult {
        if self.depth > self.options.max_depth {
            self.error(format!(
                "Expression nesting exceeds the maximum depth of {}.",
                self.options.max_depth
            ));
            return None;
        }

        let parsed = match input.array_length() {
            Some(_) => self.parse_call(input)?,
            None => self.parse_literal(input)?,
        };

        if let Some(expected) = &self.expected {
            if let Err(err) = check_subtype(expected, parsed.ty()) {
                self.error(err.to_string());
                return None;
            }
        }
        Some(parsed)
    }

    fn parse_call(&mut self, input: &dyn Convertible) -> ParseResult {
        let Some(head) = input.array_member(0) else {
            self.error(
                r#"Expected an array with at least one element. If you wanted a literal array, use ["literal", []]."#,
            );
            return None;
        };

        let Some(name) = head.to_str() else {
            let found = head
                .to_value()
                .map_or(Type::Value, |value| value.type_of());
            self.error(format!(
                r#"Expression name must be a string, but found {} instead. If you wanted a literal array, use ["literal", [...]]."#,
                found
            ));
            return None;
        };

        let Some(parse) = self.registry.get(name) else {
            self.error(format!(
                r#"Unknown expression "{}". If you wanted a literal array, use ["literal", [...]]."#,
                name
            ));
            return None;
        };

        parse(input, self)
    }

    /// Literal in place of an expression. Strings are read as colors where
    /// a color is expected.
    pub(crate) fn parse_literal(&mut self, input: &dyn Convertible) -> ParseResult {
        let Some(value) = input.to_value() else {
            self.error("Expected a literal value.");
            return None;
        };

        let expects_color = matches!(self.expected, Some(Type::Color));
        let value = match value {
            Value::String(s) if expects_color => match s.parse::<Color>() {
                Ok(color) => Value::Color(color),
                Err(_) => {
                    self.error(format!(r#"Could not parse color from value "{}"."#, s));
                    return None;
                }
            },
            value => value,
        };

        Some(Box::new(Literal::new(value)))
    }
}
