//! Boolean connectives.

use super::{eval_bool, expect_operand};
use crate::{
    env::Env,
    error::Error,
    functions::{Call, Function, FunctionRegistry},
    types::Type,
    values::Value,
};

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register("_land", Connective { and: true });
    registry.register("_lor", Connective { and: false });
    registry.register("_negate", Negate);
}

/// `_land` / `_lor`. The right operand is evaluated only when the left one
/// does not already decide the result.
struct Connective {
    and: bool,
}

impl Function for Connective {
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error> {
        call.arity_check(2)?;
        expect_operand(call, 0, &Type::Boolean)?;
        expect_operand(call, 1, &Type::Boolean)?;
        Ok(Type::Boolean)
    }

    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error> {
        let left = eval_bool(call, 0, env)?;
        if left != self.and {
            return Ok(Value::Boolean(left));
        }
        eval_bool(call, 1, env).map(Value::Boolean)
    }
}

struct Negate;

impl Function for Negate {
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error> {
        call.arity_check(1)?;
        expect_operand(call, 0, &Type::Boolean)?;
        Ok(Type::Boolean)
    }

    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error> {
        eval_bool(call, 0, env).map(|b| Value::Boolean(!b))
    }
}
