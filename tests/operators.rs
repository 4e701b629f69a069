/*
 * Operator function tests
 *
 * The infix and prefix operators of the language are applications of the
 * standard library functions `_add`, `_land`, `_eqeq` and friends.
 */

mod cases;

use cases::*;

test_case!(
    int_arithmetic,
    build: call(
        "_sub",
        vec![call("_mul", vec![ident("threads")?, int(3)])?, call("_rem", vec![int(7), int(4)])?],
    )?,
    ty: Type::Int,
    value: Value::int(21),
);

test_case!(
    mixed_arithmetic_is_float,
    build: call("_mul", vec![ident("threads")?, ident("ratio")?])?,
    ty: Type::Float,
    value: Value::float(4.0),
);

test_case!(
    float_division_by_zero,
    build: call("_div", vec![float(1.0), int(0)])?,
    ty: Type::Float,
    value: Value::float(f64::INFINITY),
);

test_case!(
    int_division_by_zero,
    build: call("_rem", vec![ident("threads")?, int(0)])?,
    eval_error: "1:1: division by zero",
);

test_case!(
    logical_and_short_circuits,
    build: call(
        "_land",
        vec![
            ident("verbose")?,
            call("_eqeq", vec![call("_div", vec![int(1), int(0)])?, int(0)])?,
        ],
    )?,
    ty: Type::Boolean,
    value: Value::bool(false),
);

test_case!(
    logical_or,
    build: call("_lor", vec![ident("verbose")?, call("_negate", vec![ident("verbose")?])?])?,
    ty: Type::Boolean,
    value: Value::bool(true),
);

test_case!(
    int_equals_float,
    build: call("_eqeq", vec![ident("threads")?, float(8.0)])?,
    ty: Type::Boolean,
    value: Value::bool(true),
);

test_case!(
    string_ordering,
    build: call("_lt", vec![ident("sample")?, string("'NA2'")])?,
    ty: Type::Boolean,
    value: Value::bool(true),
);

test_case!(
    array_equality,
    build: call(
        "_neq",
        vec![ident("bams")?, array(vec![string("'a.bam'"), string("'b.bam'")])?],
    )?,
    ty: Type::Boolean,
    value: Value::bool(false),
);

test_case!(
    unknown_function,
    build: call("_pow", vec![int(2), int(3)])?,
    error: "1:1: no such function '_pow'",
);

test_case!(
    wrong_arity,
    build: call("_negate", vec![boolean(true), boolean(false)])?,
    error: "1:1: _negate expects 1 argument(s), found 2",
);

test_case!(
    incompatible_operands,
    build: call("_add", vec![ident("sample")?, int(1)])?,
    error: "1:1: incompatible operand to _add: cannot apply to String and Int",
);

test_case!(
    ordering_booleans,
    build: call("_gte", vec![boolean(true), ident("verbose")?])?,
    error: "1:1: incompatible operand to _gte: cannot compare Boolean with Boolean",
);
