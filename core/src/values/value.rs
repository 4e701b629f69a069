//! Runtime values and their coercion contract.

use core::fmt;
use thiserror::Error;

use crate::{syntax::string_literal::escape_string, types::Type};

/// Failure of a value-level conversion. Carries no position; the expression
/// layer attaches one when propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("cannot coerce {from} to {to}")]
    Coercion { from: Type, to: Type },

    #[error("expected a value of type {expected}, found {found}")]
    Unexpected { expected: Type, found: Type },
}

/// A runtime value, tagged by its type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Array values keep the static type they were built under, which may be
    /// `AnyArray` for the empty literal.
    Array { ty: Type, items: Vec<Value> },
}

impl Value {
    pub fn bool(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn array(ty: Type, items: Vec<Value>) -> Self {
        debug_assert!(ty.is_array(), "array value tagged with {}", ty);
        Value::Array { ty, items }
    }

    pub fn ty(&self) -> Type {
        match self {
            Value::Boolean(_) => Type::Boolean,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::String(_) => Type::String,
            Value::Array { ty, .. } => ty.clone(),
        }
    }

    /// Convert this value to `target`.
    ///
    /// Int widens to Float, arrays coerce item by item and are retagged, and
    /// any array satisfies `AnyArray`. A value already of type `target` is
    /// returned unchanged.
    pub fn coerce(self, target: &Type) -> Result<Value, ValueError> {
        match (self, target) {
            (Value::Int(i), Type::Float) => Ok(Value::Float(i as f64)),
            (value @ Value::Array { .. }, Type::AnyArray) => Ok(value),
            (Value::Array { ty, items }, Type::Array(item_ty)) => {
                if ty == *target {
                    return Ok(Value::Array { ty, items });
                }
                let items = items
                    .into_iter()
                    .map(|item| item.coerce(item_ty))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| ValueError::Coercion {
                        from: ty,
                        to: target.clone(),
                    })?;
                Ok(Value::Array {
                    ty: target.clone(),
                    items,
                })
            }
            (value, target) => {
                let ty = value.ty();
                if ty == *target {
                    Ok(value)
                } else {
                    Err(ValueError::Coercion {
                        from: ty,
                        to: target.clone(),
                    })
                }
            }
        }
    }

    /// Return this value if its type is exactly `expected`.
    pub fn expect(self, expected: &Type) -> Result<Value, ValueError> {
        let found = self.ty();
        if found == *expected {
            Ok(self)
        } else {
            Err(ValueError::Unexpected {
                expected: expected.clone(),
                found,
            })
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float view of a numeric value; Int values widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array { items, .. } => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => format_float(f, *x),
            Value::String(s) => escape_string(f, s),
            Value::Array { items, .. } => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Write a float so that it always reads back as a float (`1.0`, not `1`).
pub(crate) fn format_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            write!(f, "{}", s)
        } else {
            write!(f, "{}.0", s)
        }
    }
}
