use crate::expression::{
    Convertible, EvaluationParameters, EvaluationResult, Expression, ParseExpression, ParseResult,
    ParsingContext,
};
use crate::types::Type;
use crate::values::Value;

/// `["get", "name"]`: the property `name` of the evaluation parameters, or
/// `null` when it is absent.
#[derive(Debug, Clone)]
pub struct Get {
    ty: Type,
    key: String,
}

impl Get {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            ty: Type::Value,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ParseExpression for Get {
    fn parse(input: &dyn Convertible, ctx: &mut ParsingContext<'_>) -> ParseResult {
        let length = input.array_length().unwrap_or(0);
        if length != 2 {
            ctx.error(format!(
                "Expected 1 argument, but found {} instead.",
                length.saturating_sub(1)
            ));
            return None;
        }

        let Some(key) = input.array_member(1).and_then(Convertible::to_str) else {
            ctx.concat(1, None).error("Expected a string property name.");
            return None;
        };
        Some(Box::new(Get::new(key)))
    }
}

impl Expression for Get {
    fn ty(&self) -> &Type {
        &self.ty
    }

    fn evaluate(&self, params: &EvaluationParameters) -> EvaluationResult {
        Ok(params.property(&self.key).cloned().unwrap_or(Value::Null))
    }

    fn each_child(&self, _visit: &mut dyn FnMut(&dyn Expression)) {}
}
