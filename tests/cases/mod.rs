//! Shared fixtures for the expression tests.
//!
//! Trees are built through the public constructors, the way a parser would
//! build them, against one static environment and the matching runtime one.

#![allow(dead_code)]

use once_cell::sync::Lazy;

pub use wdl_expr::{Env, Error, Expr, SourcePosition, StaticEnv, Type, Value, stdlib};

pub static STATIC_ENV: Lazy<StaticEnv> = Lazy::new(|| env().types());

/// Runtime bindings every case evaluates against.
pub fn env() -> Env {
    [
        ("threads", Value::int(8)),
        ("ratio", Value::float(0.5)),
        ("sample", Value::string("NA12878")),
        ("verbose", Value::bool(false)),
        (
            "bams",
            Value::array(
                Type::array(Type::String),
                vec![Value::string("a.bam"), Value::string("b.bam")],
            ),
        ),
    ]
    .into_iter()
    .collect()
}

pub fn pos(line: u32, column: u32) -> SourcePosition {
    SourcePosition::new(line, column, line, column + 1)
}

pub fn int(i: i64) -> Expr {
    Expr::int(pos(1, 1), i)
}

pub fn float(x: f64) -> Expr {
    Expr::float(pos(1, 1), x)
}

pub fn boolean(b: bool) -> Expr {
    Expr::boolean(pos(1, 1), b)
}

/// String literal, quotes included.
pub fn string(literal: &str) -> Expr {
    Expr::string(pos(1, 1), literal)
}

pub fn ident(name: &str) -> Result<Expr, Error> {
    Expr::ident(pos(1, 1), &[name], &STATIC_ENV)
}

pub fn array(items: Vec<Expr>) -> Result<Expr, Error> {
    Expr::array(pos(1, 1), items)
}

pub fn if_then_else(condition: Expr, consequent: Expr, alternative: Expr) -> Result<Expr, Error> {
    Expr::if_then_else(pos(1, 1), condition, consequent, alternative)
}

pub fn call(name: &str, arguments: Vec<Expr>) -> Result<Expr, Error> {
    Expr::apply(pos(1, 1), stdlib::registry(), name, arguments)
}

/// Declares a test that builds an expression and checks the outcome.
///
/// - `ty:` and `value:` check the static type and the evaluated value.
/// - `error:` expects construction to fail with the given message.
/// - `eval_error:` expects construction to succeed and evaluation to fail.
#[macro_export]
macro_rules! test_case {
    ($name:ident, build: $build:expr, ty: $ty:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            fn build() -> Result<Expr, Error> {
                Ok($build)
            }
            let expr = build().unwrap_or_else(|e| panic!("construction failed: {}", e));
            pretty_assertions::assert_eq!(expr.ty(), &$ty);
            pretty_assertions::assert_eq!(expr.eval(&env()), Ok($value));
        }
    };
    ($name:ident, build: $build:expr, error: $error:expr $(,)?) => {
        #[test]
        fn $name() {
            fn build() -> Result<Expr, Error> {
                Ok($build)
            }
            match build() {
                Ok(expr) => panic!("expected a construction error, built {}", expr),
                Err(e) => pretty_assertions::assert_eq!(e.to_string(), $error),
            }
        }
    };
    ($name:ident, build: $build:expr, eval_error: $error:expr $(,)?) => {
        #[test]
        fn $name() {
            fn build() -> Result<Expr, Error> {
                Ok($build)
            }
            let expr = build().unwrap_or_else(|e| panic!("construction failed: {}", e));
            match expr.eval(&env()) {
                Ok(value) => panic!("expected an evaluation error, got {}", value),
                Err(e) => pretty_assertions::assert_eq!(e.to_string(), $error),
            }
        }
    };
}
