use tracing::trace;

use crate::expression::{
    Convertible, EvaluationError, EvaluationParameters, EvaluationResult, Expression,
    ParseExpression, ParseResult, ParsingContext,
};
use crate::types::{Type, is_subtype};

/// Cast with fallback: `["number", input, fallback, ...]`.
///
/// Inputs are evaluated in order and the first value whose runtime type
/// fits the target type is returned. Mismatches are skipped silently except
/// on the last input, which reports the mismatch as an evaluation error.
/// Failing to evaluate an input aborts immediately with that input's error.
#[derive(Debug)]
pub struct Assertion {
    ty: Type,
    inputs: Vec<Box<dyn Expression>>,
}

impl Assertion {
    /// `None` if `inputs` is empty.
    pub fn new(ty: Type, inputs: Vec<Box<dyn Expression>>) -> Option<Self> {
        if inputs.is_empty() {
            return None;
        }
        Some(Self { ty, inputs })
    }

    pub fn inputs(&self) -> &[Box<dyn Expression>] {
        &self.inputs
    }
}

impl ParseExpression for Assertion {
    fn parse(input: &dyn Convertible, ctx: &mut ParsingContext<'_>) -> ParseResult {
        let length = input.array_length().unwrap_or(0);
        if length < 2 {
            ctx.error("Expected at least one argument.");
            return None;
        }

        // The registry only routes known tags here.
        let tag = input.array_member(0).and_then(Convertible::to_str);
        let Some(ty) = tag.and_then(Type::from_tag) else {
            ctx.error(format!("Unknown type assertion {:?}.", tag.unwrap_or_default()));
            return None;
        };

        let mut inputs = Vec::with_capacity(length - 1);
        for i in 1..length {
            let mut child = ctx.concat(i, Some(Type::Value));
            let Some(member) = input.array_member(i) else {
                child.error("Missing argument.");
                return None;
            };
            inputs.push(child.parse(member)?);
        }

        let assertion = Assertion::new(ty, inputs)?;
        Some(Box::new(assertion))
    }
}

impl Expression for Assertion {
    fn ty(&self) -> &Type {
        &self.ty
    }

    fn evaluate(&self, params: &EvaluationParameters) -> EvaluationResult {
        let Some((last, rest)) = self.inputs.split_last() else {
            return Err(EvaluationError::new("Expected at least one argument."));
        };

        for input in rest {
            let value = input.evaluate(params)?;
            let actual = value.type_of();
            if is_subtype(&self.ty, &actual) {
                return Ok(value);
            }
            trace!(expected = %self.ty, found = %actual, "assertion falls back to next input");
        }

        let value = last.evaluate(params)?;
        let actual = value.type_of();
        if is_subtype(&self.ty, &actual) {
            Ok(value)
        } else {
            Err(EvaluationError::new(format!(
                "Expected value to be of type {}, but found {} instead.",
                self.ty, actual
            )))
        }
    }

    fn each_child(&self, visit: &mut dyn FnMut(&dyn Expression)) {
        for input in &self.inputs {
            visit(input.as_ref());
        }
    }
}
