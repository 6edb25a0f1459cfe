use pretty_assertions::assert_eq;
use serde_json::json;

use crate::expression::{
    Convertible, EvaluationParameters, ExpressionRegistry, Literal, ParseExpression, ParseResult,
    ParsingContext, ParsingError,
};
use crate::options::ParseOptions;
use crate::types::Type;
use crate::values::{Color, Value};

fn parse(input: serde_json::Value) -> (ParseResult, Vec<ParsingError>) {
    let mut errors = Vec::new();
    let parsed = ParsingContext::new(&mut errors).parse(&input);
    (parsed, errors)
}

fn messages(errors: &[ParsingError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn test_scalar_input_is_a_literal() {
    let (parsed, errors) = parse(json!(3.5));
    assert!(errors.is_empty());
    let node = parsed.expect("literal");
    assert_eq!(node.ty(), &Type::Number);
    assert_eq!(
        node.evaluate(&EvaluationParameters::new()),
        Ok(Value::Number(3.5))
    );
}

#[test]
fn test_literal_expression_wraps_arrays() {
    let (parsed, errors) = parse(json!(["literal", [1, 2, 3]]));
    assert!(errors.is_empty());
    let node = parsed.expect("literal");
    assert_eq!(node.ty(), &Type::array_of_len(Type::Number, 3));
}

#[test]
fn test_literal_expression_arity() {
    let (parsed, errors) = parse(json!(["literal", 1, 2]));
    assert!(parsed.is_none());
    assert_eq!(
        messages(&errors),
        vec!["'literal' expression requires exactly one argument, but found 2 instead."]
    );
}

#[test]
fn test_empty_array() {
    let (parsed, errors) = parse(json!([]));
    assert!(parsed.is_none());
    assert!(errors[0].message.starts_with("Expected an array with at least one element."));
}

#[test]
fn test_non_string_expression_name() {
    let (parsed, errors) = parse(json!([1, 2]));
    assert!(parsed.is_none());
    assert!(
        errors[0]
            .message
            .starts_with("Expression name must be a string, but found number instead.")
    );
}

#[test]
fn test_error_paths_nest() {
    let (parsed, errors) = parse(json!(["number", ["string", ["nope"]]]));
    assert!(parsed.is_none());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "[1][1]");
    assert!(errors[0].to_string().starts_with("[1][1]: Unknown expression"));
}

#[test]
fn test_color_literal_coercion() {
    let mut errors = Vec::new();
    let input = json!("#ff0000");
    let parsed = ParsingContext::new(&mut errors)
        .expecting(Type::Color)
        .parse(&input);

    assert!(errors.is_empty());
    assert_eq!(
        parsed.expect("color").evaluate(&EvaluationParameters::new()),
        Ok(Value::Color(Color::from_rgba8(255, 0, 0, 1.0)))
    );

    let mut errors = Vec::new();
    let input = json!("chartreuse-ish");
    let parsed = ParsingContext::new(&mut errors)
        .expecting(Type::Color)
        .parse(&input);
    assert!(parsed.is_none());
    assert_eq!(
        messages(&errors),
        vec![r#"Could not parse color from value "chartreuse-ish"."#]
    );
}

#[test]
fn test_get_reads_properties() {
    let (parsed, errors) = parse(json!(["number", ["get", "size"], 12]));
    assert!(errors.is_empty());
    let node = parsed.expect("assertion");

    let params = EvaluationParameters::new().with_property("size", 4.0);
    assert_eq!(node.evaluate(&params), Ok(Value::Number(4.0)));

    let params = EvaluationParameters::new().with_property("size", "large");
    assert_eq!(node.evaluate(&params), Ok(Value::Number(12.0)));

    assert_eq!(
        node.evaluate(&EvaluationParameters::new()),
        Ok(Value::Number(12.0))
    );
}

#[test]
fn test_get_requires_string_key() {
    let (parsed, errors) = parse(json!(["get", 3]));
    assert!(parsed.is_none());
    assert_eq!(errors[0].key, "[1]");
    assert_eq!(errors[0].message, "Expected a string property name.");
}

#[test]
fn test_depth_limit() {
    let mut input = json!(1);
    for _ in 0..5 {
        input = json!(["number", input]);
    }

    let registry = ExpressionRegistry::with_builtins();
    let options = ParseOptions { max_depth: 3 };
    let mut errors = Vec::new();
    let parsed = ParsingContext::with_registry(&mut errors, &registry, &options).parse(&input);

    assert!(parsed.is_none());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Expression nesting exceeds the maximum depth of 3."
    );
}

#[test]
fn test_custom_registry() {
    struct Zero;

    impl ParseExpression for Zero {
        fn parse(_input: &dyn Convertible, _ctx: &mut ParsingContext<'_>) -> ParseResult {
            Some(Box::new(Literal::new(Value::Number(0.0))))
        }
    }

    let mut registry = ExpressionRegistry::new();
    registry.register("zero", Zero::parse);
    assert!(registry.contains("zero"));
    assert!(!registry.contains("number"));

    let options = ParseOptions::default();
    let mut errors = Vec::new();
    let input = json!(["zero"]);
    let parsed = ParsingContext::with_registry(&mut errors, &registry, &options).parse(&input);
    assert!(errors.is_empty());
    assert_eq!(
        parsed.expect("zero").evaluate(&EvaluationParameters::new()),
        Ok(Value::Number(0.0))
    );

    let input = json!(["number", 1]);
    let parsed = ParsingContext::with_registry(&mut errors, &registry, &options).parse(&input);
    assert!(parsed.is_none());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_independent_parses_do_not_share_errors() {
    let (_, first) = parse(json!(["string"]));
    let (_, second) = parse(json!(["string", "ok"]));
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn test_concurrent_evaluation_of_one_tree() {
    let (parsed, _) = parse(json!(["string", ["get", "name"], "unnamed"]));
    let node = parsed.expect("assertion");

    std::thread::scope(|scope| {
        for i in 0..4 {
            let node = &node;
            scope.spawn(move || {
                let params = EvaluationParameters::new().with_property("name", format!("n{}", i));
                assert_eq!(node.evaluate(&params), Ok(Value::String(format!("n{}", i))));
            });
        }
    });
}
