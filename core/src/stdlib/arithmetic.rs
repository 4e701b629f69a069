//! Binary arithmetic operators.

use crate::{
    env::Env,
    error::Error,
    functions::{Call, Function, FunctionRegistry},
    syntax::SourcePosition,
    types::Type,
    values::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register("_add", Arithmetic(ArithOp::Add));
    registry.register("_sub", Arithmetic(ArithOp::Sub));
    registry.register("_mul", Arithmetic(ArithOp::Mul));
    registry.register("_div", Arithmetic(ArithOp::Div));
    registry.register("_rem", Arithmetic(ArithOp::Rem));
}

/// Int op Int is Int, any other numeric mix is Float, and `_add` also
/// concatenates two Strings.
struct Arithmetic(ArithOp);

impl Function for Arithmetic {
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error> {
        call.arity_check(2)?;
        let left = call.argument(0).ty();
        let right = call.argument(1).ty();
        match (left, right) {
            (Type::Int, Type::Int) => Ok(Type::Int),
            (l, r) if l.is_numeric() && r.is_numeric() => Ok(Type::Float),
            (Type::String, Type::String) if self.0 == ArithOp::Add => Ok(Type::String),
            (l, r) => Err(call.incompatible(format!("cannot apply to {} and {}", l, r))),
        }
    }

    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error> {
        let left = call.argument(0).eval(env)?;
        let right = call.argument(1).eval(env)?;
        match (left, right) {
            (Value::Int(l), Value::Int(r)) => {
                eval_binary_int(self.0, l, r, call.pos).map(Value::Int)
            }
            (Value::String(l), Value::String(r)) if self.0 == ArithOp::Add => {
                Ok(Value::String(l + &r))
            }
            (l, r) => match (l.as_float(), r.as_float()) {
                (Some(l), Some(r)) => Ok(Value::Float(eval_binary_float(self.0, l, r))),
                _ => Err(call.incompatible(format!(
                    "cannot apply to {} and {}",
                    l.ty(),
                    r.ty()
                ))),
            },
        }
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division by zero returns an error.
pub(super) fn eval_binary_int(
    op: ArithOp,
    left: i64,
    right: i64,
    pos: SourcePosition,
) -> Result<i64, Error> {
    match op {
        ArithOp::Add => Ok(left.wrapping_add(right)),
        ArithOp::Sub => Ok(left.wrapping_sub(right)),
        ArithOp::Mul => Ok(left.wrapping_mul(right)),
        ArithOp::Div | ArithOp::Rem if right == 0 => Err(Error::DivisionByZero { pos }),
        // wrapping_* handles i64::MIN / -1
        ArithOp::Div => Ok(left.wrapping_div(right)),
        ArithOp::Rem => Ok(left.wrapping_rem(right)),
    }
}

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than failing).
pub(super) fn eval_binary_float(op: ArithOp, left: f64, right: f64) -> f64 {
    match op {
        ArithOp::Add => left + right,
        ArithOp::Sub => left - right,
        ArithOp::Mul => left * right,
        ArithOp::Div => left / right,
        ArithOp::Rem => left % right,
    }
}
