use crate::expression::{
    Convertible, EvaluationParameters, EvaluationResult, Expression, ParseExpression, ParseResult,
    ParsingContext,
};
use crate::types::Type;
use crate::values::Value;

/// A constant. Its type is the exact runtime type of the value.
#[derive(Debug, Clone)]
pub struct Literal {
    ty: Type,
    value: Value,
}

impl Literal {
    pub fn new(value: Value) -> Self {
        Self {
            ty: value.type_of(),
            value,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// `["literal", value]`, for arrays and objects that would otherwise be
/// read as expressions.
impl ParseExpression for Literal {
    fn parse(input: &dyn Convertible, ctx: &mut ParsingContext<'_>) -> ParseResult {
        let length = input.array_length().unwrap_or(0);
        if length != 2 {
            ctx.error(format!(
                "'literal' expression requires exactly one argument, but found {} instead.",
                length.saturating_sub(1)
            ));
            return None;
        }

        let member = input.array_member(1)?;
        let expected = ctx.expected().cloned();
        ctx.concat(1, expected).parse_literal(member)
    }
}

impl Expression for Literal {
    fn ty(&self) -> &Type {
        &self.ty
    }

    fn evaluate(&self, _params: &EvaluationParameters) -> EvaluationResult {
        Ok(self.value.clone())
    }

    fn each_child(&self, _visit: &mut dyn FnMut(&dyn Expression)) {}
}
