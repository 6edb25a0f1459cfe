use pretty_assertions::assert_eq;
use serde_json::json;
use stylexpr::{
    Color, Error, EvaluationParameters, Expression, Position, StyleExpression, Type, Value,
    ValueConverter, enum_value_converter,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum TextTransform {
    None,
    Uppercase,
    Lowercase,
}

enum_value_converter!(TextTransform {
    TextTransform::None => "none",
    TextTransform::Uppercase => "uppercase",
    TextTransform::Lowercase => "lowercase",
});

fn params() -> EvaluationParameters {
    EvaluationParameters::new()
        .with_zoom(14.0)
        .with_property("name", "Main Street")
        .with_property("lanes", 4.0)
        .with_property("transform", "uppercase")
        .with_property("oneway", true)
}

#[test]
fn typed_lookup_with_literal_fallback() {
    let expr = StyleExpression::parse(&json!(["number", ["get", "lanes"], 2])).unwrap();
    assert_eq!(expr.ty(), &Type::Number);
    assert_eq!(expr.evaluate(&params()), Ok(Value::Number(4.0)));

    let expr = StyleExpression::parse(&json!(["number", ["get", "name"], 2])).unwrap();
    assert_eq!(expr.evaluate(&params()), Ok(Value::Number(2.0)));
}

#[test]
fn chain_of_lookups() {
    let expr = StyleExpression::parse(&json!([
        "string",
        ["get", "label"],
        ["get", "name"],
        "unnamed"
    ]))
    .unwrap();
    assert_eq!(expr.evaluate(&params()), Ok(Value::from("Main Street")));
    assert_eq!(
        expr.evaluate(&EvaluationParameters::new()),
        Ok(Value::from("unnamed"))
    );
}

#[test]
fn mismatch_without_fallback_is_an_evaluation_error() {
    let expr = StyleExpression::parse(&json!(["boolean", ["get", "lanes"]])).unwrap();
    let err = expr.evaluate(&params()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected value to be of type boolean, but found number instead."
    );
}

#[test]
fn parse_errors_are_collected() {
    let err = StyleExpression::parse(&json!(["number"])).unwrap_err();
    let Error::Parse(errors) = err else {
        panic!("expected parse errors, got {:?}", err);
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Expected at least one argument.");
}

#[test]
fn expected_root_type_is_enforced() {
    let err = StyleExpression::parse_expecting(&json!(["string", "x"]), Type::Number).unwrap_err();
    assert_eq!(err.to_string(), "Parsing failed with 1 error(s)");

    let expr = StyleExpression::parse_expecting(&json!("#00ff00"), Type::Color).unwrap();
    assert_eq!(
        expr.evaluate_as::<Color>(&params()),
        Ok(Color::from_rgba8(0, 255, 0, 1.0))
    );
}

#[test]
fn results_convert_to_native_types() {
    let expr = StyleExpression::parse(&json!(["string", ["get", "transform"], "none"])).unwrap();
    assert_eq!(
        expr.evaluate_as::<TextTransform>(&params()),
        Ok(TextTransform::Uppercase)
    );

    let expr = StyleExpression::parse(&json!(["literal", [1.15, 210, 30]])).unwrap();
    assert_eq!(
        expr.evaluate_as::<Position>(&params()),
        Ok(Position::new(1.15, 210.0, 30.0))
    );

    let expr = StyleExpression::parse(&json!(["literal", [1, 2]])).unwrap();
    assert_eq!(
        expr.evaluate_as::<Position>(&params()),
        Err(Error::Conversion {
            expected: Type::array_of_len(Type::Number, 3),
            found: Type::array_of_len(Type::Number, 2),
        })
    );
}

#[test]
fn unknown_enum_name_is_a_conversion_error() {
    let expr = StyleExpression::parse(&json!(["string", ["get", "name"]])).unwrap();
    assert_eq!(
        expr.evaluate_as::<TextTransform>(&params()),
        Err(Error::Conversion {
            expected: Type::String,
            found: Type::String,
        })
    );
}

#[test]
fn tree_traversal_counts_nodes() {
    fn count(node: &dyn Expression) -> usize {
        let mut total = 1;
        node.each_child(&mut |child| total += count(child));
        total
    }

    let expr = StyleExpression::parse(&json!([
        "number",
        ["get", "a"],
        ["number", ["get", "b"], 1],
        0
    ]))
    .unwrap();
    assert_eq!(count(expr.root()), 6);
}

#[test]
fn json_converter_feeds_parameters() {
    let properties = json!({ "lanes": 3, "name": "Side Road" });
    let Value::Object(properties) = properties.to_expression_value() else {
        panic!("object expected");
    };
    let params = EvaluationParameters {
        zoom: None,
        properties,
    };

    let expr = StyleExpression::parse(&json!(["number", ["get", "lanes"], 1])).unwrap();
    assert_eq!(expr.evaluate(&params), Ok(Value::Number(3.0)));
}
