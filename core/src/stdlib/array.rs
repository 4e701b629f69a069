//! Array helpers.

use super::{eval_int, expect_operand};
use crate::{
    env::Env,
    error::Error,
    functions::{Call, Function, FunctionRegistry},
    types::Type,
    values::{Value, ValueError},
};

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register("_get", Get);
    registry.register("length", Length);
}

/// `_get(array, index)`: the item at a zero-based index.
struct Get;

impl Function for Get {
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error> {
        call.arity_check(2)?;
        let item_type = match call.argument(0).ty() {
            Type::Array(item) => Type::clone(item),
            Type::AnyArray => return Err(call.incompatible("cannot index an empty array")),
            other => return Err(call.incompatible(format!("expected an array, found {}", other))),
        };
        expect_operand(call, 1, &Type::Int)?;
        Ok(item_type)
    }

    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error> {
        let items = eval_array(call, env)?;
        let index = eval_int(call, 1, env)?;
        usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i).cloned())
            .ok_or(Error::IndexOutOfBounds {
                pos: call.pos,
                index,
                len: items.len(),
            })
    }
}

/// `length(array)`: the number of items.
struct Length;

impl Function for Length {
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error> {
        call.arity_check(1)?;
        let ty = call.argument(0).ty();
        if !ty.is_array() {
            return Err(call.incompatible(format!("expected an array, found {}", ty)));
        }
        Ok(Type::Int)
    }

    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error> {
        let items = eval_array(call, env)?;
        Ok(Value::Int(items.len() as i64))
    }
}

fn eval_array(call: &Call<'_>, env: &Env) -> Result<Vec<Value>, Error> {
    let argument = call.argument(0);
    match argument.eval(env)? {
        Value::Array { items, .. } => Ok(items),
        other => Err(Error::Value {
            pos: argument.pos(),
            source: ValueError::Unexpected {
                expected: argument.ty().clone(),
                found: other.ty(),
            },
        }),
    }
}
