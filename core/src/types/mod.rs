//! The static type model.

use core::fmt::{self, Display};

/// Static type of an expression node.
///
/// `AnyArray` is the type of the empty array literal: an array whose item type
/// is not yet known and which satisfies any concrete array type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    // Primitives.
    Boolean,
    Int,
    Float,
    String,

    // Collections.
    Array(Box<Type>),
    AnyArray,
}

impl Type {
    pub fn array(item: Type) -> Self {
        Type::Array(Box::new(item))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// True for both concrete arrays and `AnyArray`.
    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_) | Type::AnyArray)
    }

    /// Item type of a concrete array; `None` for `AnyArray` and non-arrays.
    pub fn item_type(&self) -> Option<&Type> {
        match self {
            Type::Array(item) => Some(item),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "Boolean"),
            Type::Int => write!(f, "Int"),
            Type::Float => write!(f, "Float"),
            Type::String => write!(f, "String"),
            Type::Array(item) => write!(f, "Array[{}]", item),
            Type::AnyArray => write!(f, "Array[Any]"),
        }
    }
}
