/*
 * Conditional expression tests
 *
 * Branch typing and lazy evaluation of the branch not taken.
 */

mod cases;

use cases::*;

test_case!(
    then_branch,
    build: if_then_else(boolean(true), int(1), int(2))?,
    ty: Type::Int,
    value: Value::int(1),
);

test_case!(
    else_branch,
    build: if_then_else(ident("verbose")?, string("'loud'"), string("'quiet'"))?,
    ty: Type::String,
    value: Value::string("quiet"),
);

test_case!(
    computed_condition,
    build: if_then_else(
        call("_gt", vec![ident("threads")?, int(4)])?,
        ident("threads")?,
        int(4),
    )?,
    ty: Type::Int,
    value: Value::int(8),
);

test_case!(
    untaken_branch_not_evaluated,
    build: if_then_else(
        boolean(false),
        call("_div", vec![int(1), int(0)])?,
        int(0),
    )?,
    ty: Type::Int,
    value: Value::int(0),
);

test_case!(
    taken_branch_error_propagates,
    build: if_then_else(
        boolean(true),
        call("_div", vec![int(1), int(0)])?,
        int(0),
    )?,
    eval_error: "1:1: division by zero",
);

test_case!(
    nested_conditionals,
    build: if_then_else(
        ident("verbose")?,
        float(1.0),
        if_then_else(boolean(true), ident("ratio")?, float(0.0))?,
    )?,
    ty: Type::Float,
    value: Value::float(0.5),
);

test_case!(
    array_branches,
    build: if_then_else(boolean(true), ident("bams")?, ident("bams")?)?,
    ty: Type::array(Type::String),
    value: Value::array(
        Type::array(Type::String),
        vec![Value::string("a.bam"), Value::string("b.bam")],
    ),
);

test_case!(
    condition_must_be_boolean,
    build: if_then_else(int(1), int(0), int(0))?,
    error: "1:1: type mismatch: expected Boolean, found Int (in if condition)",
);

test_case!(
    branches_must_match,
    build: if_then_else(boolean(true), int(1), string(r#""one""#))?,
    error: "1:1: type mismatch: expected Int, found String \
            (if consequent & alternative must have the same type)",
);

test_case!(
    int_and_float_branches_do_not_widen,
    build: if_then_else(boolean(true), int(1), float(1.0))?,
    error: "1:1: type mismatch: expected Int, found Float \
            (if consequent & alternative must have the same type)",
);
