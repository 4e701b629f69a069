//! Standard library
//!
//! This module provides the operator functions the surrounding language
//! desugars its infix and prefix operators into, plus a few array helpers:
//! - Arithmetic: `_add`, `_sub`, `_mul`, `_div`, `_rem`
//! - Logic: `_land`, `_lor`, `_negate`
//! - Comparison: `_eqeq`, `_neq`, `_lt`, `_lte`, `_gt`, `_gte`
//! - Arrays: `_get`, `length`
//!
//! Each function typechecks its own call sites and evaluates its own
//! arguments, so the logical operators short-circuit.

use once_cell::sync::Lazy;

use crate::{
    env::Env,
    error::Error,
    functions::{Call, FunctionRegistry},
    types::Type,
    values::{Value, ValueError},
};

mod arithmetic;
mod array;
mod compare;
mod logic;


static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(|| {
    let mut registry = FunctionRegistry::new();
    register_stdlib(&mut registry);
    registry
});

/// Register every standard library function in `registry`.
///
/// Use this to build a registry that also carries host-specific functions;
/// otherwise [`registry`] is the ready-made, shared one.
pub fn register_stdlib(registry: &mut FunctionRegistry) {
    arithmetic::register(registry);
    logic::register(registry);
    compare::register(registry);
    array::register(registry);
}

/// The process-wide standard library registry. Built on first use and
/// read-only afterwards.
pub fn registry() -> &'static FunctionRegistry {
    &REGISTRY
}

fn eval_bool(call: &Call<'_>, index: usize, env: &Env) -> Result<bool, Error> {
    let argument = call.argument(index);
    match argument.eval(env)? {
        Value::Boolean(b) => Ok(b),
        other => Err(unexpected(argument.pos(), Type::Boolean, &other)),
    }
}

fn eval_int(call: &Call<'_>, index: usize, env: &Env) -> Result<i64, Error> {
    let argument = call.argument(index);
    match argument.eval(env)? {
        Value::Int(i) => Ok(i),
        other => Err(unexpected(argument.pos(), Type::Int, &other)),
    }
}

fn unexpected(pos: crate::SourcePosition, expected: Type, found: &Value) -> Error {
    Error::Value {
        pos,
        source: ValueError::Unexpected {
            expected,
            found: found.ty(),
        },
    }
}

/// Fail with `IncompatibleOperand` unless `index` typechecks against `expected`.
fn expect_operand(call: &Call<'_>, index: usize, expected: &Type) -> Result<(), Error> {
    let argument = call.argument(index);
    argument
        .typecheck(Some(expected))
        .map(|_| ())
        .map_err(|_| call.incompatible(format!("expected {}, found {}", expected, argument.ty())))
}
