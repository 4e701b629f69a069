//! Equality and ordering.

use core::cmp::Ordering;

use crate::{
    env::Env,
    error::Error,
    functions::{Call, Function, FunctionRegistry},
    types::Type,
    values::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register("_eqeq", Comparison(CompareOp::Eq));
    registry.register("_neq", Comparison(CompareOp::Ne));
    registry.register("_lt", Comparison(CompareOp::Lt));
    registry.register("_lte", Comparison(CompareOp::Le));
    registry.register("_gt", Comparison(CompareOp::Gt));
    registry.register("_gte", Comparison(CompareOp::Ge));
}

/// Equality accepts operands of the same type; ordering accepts numbers or
/// strings. Int operands compared with Float operands are widened first.
struct Comparison(CompareOp);

impl Function for Comparison {
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error> {
        call.arity_check(2)?;
        let left = call.argument(0).ty();
        let right = call.argument(1).ty();
        let comparable = match self.0 {
            CompareOp::Eq | CompareOp::Ne => {
                left == right
                    || (left.is_numeric() && right.is_numeric())
                    || (left.is_array() && right.is_array() && arrays_compatible(left, right))
            }
            _ => {
                (left.is_numeric() && right.is_numeric())
                    || (*left == Type::String && *right == Type::String)
            }
        };
        if !comparable {
            return Err(call.incompatible(format!("cannot compare {} with {}", left, right)));
        }
        Ok(Type::Boolean)
    }

    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error> {
        let left = call.argument(0).eval(env)?;
        let right = call.argument(1).eval(env)?;
        let result = match self.0 {
            CompareOp::Eq => values_equal(&left, &right),
            CompareOp::Ne => !values_equal(&left, &right),
            op => {
                let ordering = compare(&left, &right);
                match op {
                    CompareOp::Lt => ordering == Some(Ordering::Less),
                    CompareOp::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                    CompareOp::Gt => ordering == Some(Ordering::Greater),
                    _ => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
                }
            }
        };
        Ok(Value::Boolean(result))
    }
}

/// The empty array compares with any array.
fn arrays_compatible(left: &Type, right: &Type) -> bool {
    matches!(left, Type::AnyArray) || matches!(right, Type::AnyArray) || left == right
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => l == r,
        (Value::Array { items: l, .. }, Value::Array { items: r, .. }) => {
            l.len() == r.len() && l.iter().zip(r).all(|(l, r)| values_equal(l, r))
        }
        (l, r) => match (l.as_float(), r.as_float()) {
            (Some(l), Some(r)) => l == r,
            _ => l == r,
        },
    }
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Some(l.cmp(r)),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (l, r) => l.as_float()?.partial_cmp(&r.as_float()?),
    }
}
