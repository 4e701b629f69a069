/*
 * Type Error Reporting Tests
 *
 * Tests that verify error messages, positions and diagnostic codes for
 * expressions rejected while they are built.
 */

mod cases;

use cases::*;
use miette::Diagnostic;
use pretty_assertions::assert_eq;
use wdl_expr::{render_error_to_string_no_color, render_error_with_source};

test_case!(
    inconsistent_array_items,
    build: array(vec![int(1), string("'two'")])?,
    error: "1:1: type mismatch: expected Int, found String (inconsistent types within array)",
);

test_case!(
    int_identifier_in_float_array,
    build: array(vec![ident("ratio")?, ident("threads")?])?,
    error: "1:1: type mismatch: expected Float, found Int (inconsistent types within array)",
);

test_case!(
    nested_arrays_do_not_widen,
    build: array(vec![array(vec![int(1)])?, array(vec![float(1.5)])?])?,
    error: "1:1: type mismatch: expected Array[Int], found Array[Float] \
            (inconsistent types within array)",
);

test_case!(
    error_in_nested_child_aborts_parent,
    build: if_then_else(
        boolean(true),
        array(vec![boolean(true), int(0)])?,
        array(vec![])?,
    )?,
    error: "1:1: type mismatch: expected Boolean, found Int (inconsistent types within array)",
);

fn build_error(result: Result<Expr, Error>) -> Error {
    match result {
        Ok(expr) => panic!("expected a construction error, built {}", expr),
        Err(e) => e,
    }
}

#[test]
fn error_reports_node_position() {
    let condition = Expr::int(pos(3, 4), 1);
    let error = build_error(Expr::if_then_else(pos(3, 1), condition, int(0), int(0)));
    assert_eq!(error.pos(), pos(3, 1));
}

#[test]
fn diagnostic_codes() {
    let codes = [
        (build_error(if_then_else(int(1), int(0), int(0))), "E001"),
        (build_error(call("_pow", vec![])), "E002"),
        (build_error(ident("memory")), "E003"),
        (build_error(call("length", vec![])), "E004"),
        (build_error(call("_land", vec![int(1), boolean(true)])), "E005"),
    ];
    for (error, code) in codes {
        let actual = error.code().map(|c| c.to_string());
        assert_eq!(actual.as_deref(), Some(code), "{}", error);
    }
}

#[test]
fn render_without_source() {
    let error = build_error(if_then_else(int(1), int(0), int(0)));
    let output = render_error_to_string_no_color(&error);
    assert!(output.contains("E001"), "{}", output);
    assert!(output.contains("expected Boolean, found Int"), "{}", output);
    assert!(output.contains("types must match in this context"), "{}", output);
}

#[test]
fn render_with_source() {
    let source = "if threads then 1 else 0";
    let threads = Expr::ident(SourcePosition::new(1, 4, 1, 11), &["threads"], &STATIC_ENV).unwrap();
    let error = build_error(Expr::if_then_else(
        SourcePosition::new(1, 1, 1, 25),
        threads,
        int(1),
        int(0),
    ));
    let output = render_error_with_source(&error, "expr.wdl", source);
    assert!(output.contains("expr.wdl"), "{}", output);
    assert!(output.contains(source), "{}", output);
}
