use super::*;
use crate::types::Type;
use pretty_assertions::assert_eq;

#[test]
fn test_ty_of_primitives() {
    assert_eq!(Value::bool(true).ty(), Type::Boolean);
    assert_eq!(Value::int(1).ty(), Type::Int);
    assert_eq!(Value::float(1.5).ty(), Type::Float);
    assert_eq!(Value::string("x").ty(), Type::String);
    assert_eq!(Value::array(Type::AnyArray, vec![]).ty(), Type::AnyArray);
}

#[test]
fn test_coerce_identity() {
    let value = Value::string("abc");
    assert_eq!(value.clone().coerce(&Type::String).unwrap(), value);
}

#[test]
fn test_coerce_int_to_float() {
    assert_eq!(Value::int(3).coerce(&Type::Float).unwrap(), Value::float(3.0));
}

#[test]
fn test_coerce_float_to_int_fails() {
    assert_eq!(
        Value::float(3.5).coerce(&Type::Int),
        Err(ValueError::Coercion {
            from: Type::Float,
            to: Type::Int,
        })
    );
}

#[test]
fn test_coerce_array_items() {
    let ints = Value::array(
        Type::array(Type::Int),
        vec![Value::int(1), Value::int(2)],
    );
    let floats = ints.coerce(&Type::array(Type::Float)).unwrap();
    assert_eq!(floats.ty(), Type::array(Type::Float));
    assert_eq!(
        floats.as_array().unwrap(),
        &[Value::float(1.0), Value::float(2.0)]
    );
}

#[test]
fn test_coerce_empty_array_retags() {
    let empty = Value::array(Type::AnyArray, vec![]);
    let retagged = empty.coerce(&Type::array(Type::Boolean)).unwrap();
    assert_eq!(retagged.ty(), Type::array(Type::Boolean));
    assert!(retagged.as_array().unwrap().is_empty());
}

#[test]
fn test_coerce_any_array_target_keeps_tag() {
    let ints = Value::array(Type::array(Type::Int), vec![Value::int(1)]);
    let coerced = ints.clone().coerce(&Type::AnyArray).unwrap();
    assert_eq!(coerced, ints);
}

#[test]
fn test_coerce_incompatible_array_items() {
    let strings = Value::array(Type::array(Type::String), vec![Value::string("a")]);
    assert_eq!(
        strings.coerce(&Type::array(Type::Int)),
        Err(ValueError::Coercion {
            from: Type::array(Type::String),
            to: Type::array(Type::Int),
        })
    );
}

#[test]
fn test_expect_is_exact() {
    assert_eq!(
        Value::bool(false).expect(&Type::Boolean).unwrap(),
        Value::bool(false)
    );
    assert_eq!(
        Value::int(0).expect(&Type::Float),
        Err(ValueError::Unexpected {
            expected: Type::Float,
            found: Type::Int,
        })
    );
}

#[test]
fn test_accessors() {
    assert_eq!(Value::int(7).as_int(), Some(7));
    assert_eq!(Value::int(7).as_float(), Some(7.0));
    assert_eq!(Value::int(7).as_bool(), None);
    assert_eq!(Value::string("s").as_str(), Some("s"));
    assert_eq!(Value::float(1.0).as_array(), None);
}

#[test]
fn test_display() {
    assert_eq!(Value::bool(true).to_string(), "true");
    assert_eq!(Value::int(-4).to_string(), "-4");
    assert_eq!(Value::float(2.0).to_string(), "2.0");
    assert_eq!(Value::float(0.25).to_string(), "0.25");
    assert_eq!(Value::string("a\nb").to_string(), r#""a\nb""#);
    let nested = Value::array(
        Type::array(Type::array(Type::Int)),
        vec![
            Value::array(Type::array(Type::Int), vec![Value::int(1)]),
            Value::array(Type::array(Type::Int), vec![]),
        ],
    );
    assert_eq!(nested.to_string(), "[[1], []]");
}
