// tests/query_tests.rs

use mongo_query::operators::{
    AND, EQ, GT, GTE, IN, LT, LTE, NE, NIN, NOR, NOT, OPTIONS, OR, REGEX,
};
use mongo_query::query::{
    and, eq, field_expr, ge, gt, in_, in_s, in_str, le, lt, ne, nin, nin_s, nin_str, nor, not, or,
    rx, rxo,
};
use mongo_query::{Document, Pattern, Value};
use rust_decimal::Decimal;
use std::str::FromStr;

fn doc(pairs: Vec<(&str, Value)>) -> Document {
    let mut map = Document::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    map
}

fn field_op(field: &str, op: &str, value: Value) -> Document {
    doc(vec![(field, Value::Object(doc(vec![(op, value)])))])
}

fn array(values: Vec<Value>) -> Value {
    Value::Array(values)
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_comparison_builders() {
    let test_cases = vec![
        (eq("qty", 20), EQ),
        (ne("qty", 20), NE),
        (gt("qty", 20), GT),
        (ge("qty", 20), GTE),
        (lt("qty", 20), LT),
        (le("qty", 20), LTE),
    ];

    for (built, op) in test_cases {
        assert_eq!(built, field_op("qty", op, Value::Integer(20)), "operator {}", op);
    }
}

#[test]
fn test_comparison_accepts_any_value_type() {
    assert_eq!(eq("name", "Colin"), field_op("name", EQ, Value::String("Colin".into())));
    assert_eq!(eq("price", 0.99), field_op("price", EQ, Value::Float(0.99)));
    assert_eq!(ne("sale", true), field_op("sale", NE, Value::Boolean(true)));
    assert_eq!(eq("gone", Value::Null), field_op("gone", EQ, Value::Null));
    assert_eq!(eq("maybe", None::<i32>), field_op("maybe", EQ, Value::Null));

    let price = Decimal::from_str("1.99").unwrap();
    assert_eq!(ne("price", price), field_op("price", NE, Value::Decimal(price)));

    let nested = doc(vec![("city", Value::from("NYC"))]);
    assert_eq!(
        eq("address", nested.clone()),
        field_op("address", EQ, Value::Object(nested))
    );
}

#[test]
fn test_wide_integers_stay_exact() {
    let count: usize = vec![1, 2, 3].len();
    assert_eq!(eq("count", count), field_op("count", EQ, Value::Integer(3)));
    assert_eq!(eq("id", 5u64), field_op("id", EQ, Value::Integer(5)));
    assert_eq!(eq("delta", -7isize), field_op("delta", EQ, Value::Integer(-7)));

    let big = Decimal::from(u64::MAX);
    assert_eq!(eq("id", u64::MAX), field_op("id", EQ, Value::Decimal(big)));
    assert_eq!(eq("id", u64::MAX as u128), field_op("id", EQ, Value::Decimal(big)));
    assert_eq!(eq("id", -(u64::MAX as i128)), field_op("id", EQ, Value::Decimal(-big)));
    assert_eq!(eq("id", 9i128), field_op("id", EQ, Value::Integer(9)));
    let huge = eq("huge", u128::MAX);
    assert_eq!(huge["huge"].as_document().unwrap()[EQ].type_name(), "float");
}

#[test]
fn test_arrays_and_slices_become_arrays() {
    let tags = array(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(eq("tags", ["a", "b"]), field_op("tags", EQ, tags.clone()));

    let owned = vec![String::from("a"), String::from("b")];
    assert_eq!(eq("tags", owned.as_slice()), field_op("tags", EQ, tags));
    assert_eq!(owned.len(), 2);

    let empty: [i32; 0] = [];
    assert_eq!(eq("tags", empty), field_op("tags", EQ, array(vec![])));
}

#[test]
fn test_field_name_uses_string_form() {
    assert_eq!(eq(42, 1), field_op("42", EQ, Value::Integer(1)));
    assert_eq!(
        le(String::from("date"), "20151231"),
        field_op("date", LTE, Value::from("20151231"))
    );
    assert_eq!(gt("carrier.fee", 2), field_op("carrier.fee", GT, Value::Integer(2)));
}

#[test]
fn test_field_names_are_not_validated() {
    assert_eq!(eq("", 1), field_op("", EQ, Value::Integer(1)));
    assert_eq!(eq("$weird", 1), field_op("$weird", EQ, Value::Integer(1)));
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_in_wraps_values_in_order() {
    assert_eq!(
        in_("qty", [5, 15]),
        field_op("qty", IN, array(vec![Value::Integer(5), Value::Integer(15)]))
    );
    assert_eq!(
        nin("qty", vec![15, 5]),
        field_op("qty", NIN, array(vec![Value::Integer(15), Value::Integer(5)]))
    );
}

#[test]
fn test_in_with_no_values_is_empty_array() {
    assert_eq!(in_("qty", Vec::<Value>::new()), field_op("qty", IN, array(vec![])));
    assert_eq!(nin("qty", Vec::<i64>::new()), field_op("qty", NIN, array(vec![])));
}

#[test]
fn test_in_accepts_mixed_values() {
    let values = vec![Value::from("a"), Value::from(1), Value::from(Pattern::new("^ack"))];
    assert_eq!(in_("name", values.clone()), field_op("name", IN, array(values)));
}

#[test]
fn test_string_forms_are_not_wrapped() {
    assert_eq!(in_s("name", "abc"), field_op("name", IN, Value::from("abc")));
    assert_eq!(nin_s("name", "abc"), field_op("name", NIN, Value::from("abc")));

    assert_ne!(in_s("name", "abc"), in_("name", ["abc"]));
    assert_eq!(in_("name", ["abc"]), field_op("name", IN, array(vec![Value::from("abc")])));
}

#[test]
fn test_string_target_qualifiers() {
    assert_eq!(in_str("abcdefg"), doc(vec![(IN, Value::from("abcdefg"))]));
    assert_eq!(nin_str("abcdefg"), doc(vec![(NIN, Value::from("abcdefg"))]));
}

// ============================================================================
// Logical
// ============================================================================

#[test]
fn test_logical_builders_preserve_order() {
    let a = eq("qty", 20);
    let b = lt("qty", 5);
    let expected = array(vec![Value::Object(a.clone()), Value::Object(b.clone())]);

    assert_eq!(and([a.clone(), b.clone()]), doc(vec![(AND, expected.clone())]));
    assert_eq!(or([a.clone(), b.clone()]), doc(vec![(OR, expected.clone())]));
    assert_eq!(nor([a.clone(), b.clone()]), doc(vec![(NOR, expected)]));

    let reversed = array(vec![Value::Object(b.clone()), Value::Object(a.clone())]);
    assert_eq!(and([b, a]), doc(vec![(AND, reversed)]));
}

#[test]
fn test_single_clause_still_wrapped_in_array() {
    let a = eq("qty", 20);
    assert_eq!(or([a.clone()]), doc(vec![(OR, array(vec![Value::Object(a)]))]));
}

#[test]
fn test_not_wraps_single_expression() {
    let inner = gt("price", 1.99);
    let negated = not(inner.clone());

    assert_eq!(negated, doc(vec![(NOT, Value::Object(inner))]));
    assert!(negated[NOT].as_array().is_none());
}

#[test]
fn test_logical_nesting() {
    let expr = nor([not(eq("a", 1)), and([or([eq("b", 2)])])]);
    let clauses = expr[NOR].as_array().unwrap();
    assert_eq!(clauses.len(), 2);
    assert!(clauses[0].as_document().unwrap().contains_key(NOT));
    assert!(clauses[1].as_document().unwrap().contains_key(AND));
}

// ============================================================================
// Regex
// ============================================================================

#[test]
fn test_rx_without_qualifiers() {
    assert_eq!(rx("acme.*corp", []), doc(vec![(REGEX, Value::from("acme.*corp"))]));
}

#[test]
fn test_rx_with_options() {
    let expected = doc(vec![
        (REGEX, Value::from("acme.*corp")),
        (OPTIONS, Value::from("i")),
    ]);
    assert_eq!(rx("acme.*corp", [rxo("i")]), expected);
}

#[test]
fn test_rx_later_qualifier_wins() {
    let built = rx("x", [rxo("i"), rxo("m")]);
    assert_eq!(built, doc(vec![(REGEX, Value::from("x")), (OPTIONS, Value::from("m"))]));
}

#[test]
fn test_rx_qualifier_can_replace_pattern() {
    let built = rx("old", [doc(vec![(REGEX, Value::from("new"))])]);
    assert_eq!(built, doc(vec![(REGEX, Value::from("new"))]));
}

#[test]
fn test_rx_merges_arbitrary_operators_in_order() {
    let built = rx(
        Pattern::new("acme.*corp"),
        [rxo("i"), doc(vec![(NIN, array(vec![Value::from("acmeblahcorp")]))])],
    );
    let keys: Vec<&str> = built.keys().map(String::as_str).collect();
    assert_eq!(keys, [REGEX, OPTIONS, NIN]);
    assert_eq!(built[REGEX], Value::Regex(Pattern::new("acme.*corp")));
}

#[test]
fn test_rx_accepts_compiled_regex() {
    let re = regex::Regex::new("^acme").unwrap();
    assert_eq!(rx(&re, []), doc(vec![(REGEX, Value::Regex(Pattern::new("^acme")))]));
}

#[test]
fn test_rxo_coerces_to_string() {
    assert_eq!(rxo("i"), doc(vec![(OPTIONS, Value::from("i"))]));
    assert_eq!(rxo('m'), doc(vec![(OPTIONS, Value::from("m"))]));
    assert_eq!(rxo(""), doc(vec![(OPTIONS, Value::from(""))]));
}

#[test]
fn test_field_expr_attaches_regex_to_field() {
    let built = field_expr("name", rx("^acme", [rxo("i")]));
    assert_eq!(
        built,
        doc(vec![(
            "name",
            Value::Object(doc(vec![(REGEX, Value::from("^acme")), (OPTIONS, Value::from("i"))]))
        )])
    );
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_builders_are_repeatable() {
    assert_eq!(eq("qty", 20), eq("qty", 20));
    assert_eq!(in_("qty", [1, 2]), in_("qty", [1, 2]));
    assert_eq!(rx("a", [rxo("i")]), rx("a", [rxo("i")]));
}

#[test]
fn test_nan_operand_is_repeatable() {
    assert_eq!(eq("x", f64::NAN), eq("x", f64::NAN));
    assert_ne!(eq("x", f64::NAN), eq("x", 0.0));
}

#[test]
fn test_document_equality_ignores_key_order() {
    let a = doc(vec![(REGEX, Value::from("x")), (OPTIONS, Value::from("i"))]);
    let b = doc(vec![(OPTIONS, Value::from("i")), (REGEX, Value::from("x"))]);
    assert_eq!(a, b);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_price_and_quantity_scenario() {
    let built = and([eq("price", 0.99), or([eq("qty", 20), lt("qty", 5)])]);

    let expected = doc(vec![(
        AND,
        array(vec![
            Value::Object(field_op("price", EQ, Value::Float(0.99))),
            Value::Object(doc(vec![(
                OR,
                array(vec![
                    Value::Object(field_op("qty", EQ, Value::Integer(20))),
                    Value::Object(field_op("qty", LT, Value::Integer(5))),
                ]),
            )])),
        ]),
    )]);
    assert_eq!(built, expected);
}

#[test]
fn test_regex_options_scenario() {
    assert_eq!(
        rx("acme.*corp", [rxo("i")]),
        doc(vec![
            (REGEX, Value::from("acme.*corp")),
            (OPTIONS, Value::from("i")),
        ])
    );
}
