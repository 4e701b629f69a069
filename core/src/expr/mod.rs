//! Typed expression nodes.
//!
//! Every constructor typechecks the node it builds, so an [`Expr`] always
//! carries a valid static type; there is no separate typechecking pass.
//! Construction is bottom-up: children are built (and typed) first and then
//! moved into their parent.
//!
//! Evaluation walks the typed tree against an [`Env`]. Because every type
//! error was rejected during construction, evaluation only fails on missing
//! bindings, failed runtime coercions, or errors raised by functions.

mod apply;
mod array;
mod conditional;
mod ident;
mod literal;


pub use apply::ResolvedFunction;

use core::fmt;

use crate::{
    env::Env, error::Error, functions::Call, syntax::SourcePosition, types::Type,
    values::{Value, value::format_float},
};

/// An expression node together with its position and static type.
///
/// The fields are private: the only way to obtain an `Expr` is through one of
/// the typechecking constructors, and nodes are never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Expr {
    pos: SourcePosition,
    ty: Type,
    inner: ExprInner,
}

#[derive(Debug, Clone)]
pub enum ExprInner {
    Boolean(bool),
    Int(i64),
    Float(f64),
    /// Literal text as written in source, quote delimiters included.
    String(String),
    Array {
        items: Vec<Expr>,
        /// Unified item type; `None` for the empty array.
        item_type: Option<Type>,
    },
    IfThenElse {
        condition: Box<Expr>,
        consequent: Box<Expr>,
        alternative: Box<Expr>,
    },
    Apply {
        function: ResolvedFunction,
        arguments: Vec<Expr>,
    },
    Ident {
        namespace: Vec<String>,
        identifier: String,
    },
}

impl Expr {
    fn new(pos: SourcePosition, ty: Type, inner: ExprInner) -> Self {
        tracing::trace!(pos = %pos, ty = %ty, "constructed expression");
        Self { pos, ty, inner }
    }

    pub fn pos(&self) -> SourcePosition {
        self.pos
    }

    /// The static type, fixed at construction.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn inner(&self) -> &ExprInner {
        &self.inner
    }

    /// Check this node against an expected type.
    ///
    /// `None` places no constraint. Otherwise the node's static type must equal
    /// `expected`, except that an Int literal also satisfies Float and the
    /// empty array satisfies every array type. On success the node itself is
    /// returned, unchanged.
    pub fn typecheck(&self, expected: Option<&Type>) -> Result<&Self, Error> {
        let Some(expected) = expected else {
            return Ok(self);
        };
        match &self.inner {
            ExprInner::Int(_) if *expected == Type::Float => return Ok(self),
            ExprInner::Array { items, .. } if items.is_empty() && expected.is_array() => {
                return Ok(self);
            }
            _ => {}
        }
        if self.ty != *expected {
            return Err(Error::mismatch(self.pos, expected, &self.ty));
        }
        Ok(self)
    }

    /// Evaluate this node against the runtime bindings in `env`.
    pub fn eval(&self, env: &Env) -> Result<Value, Error> {
        let _depth = env.enter(self.pos)?;
        tracing::trace!(pos = %self.pos, ty = %self.ty, "evaluating expression");
        match &self.inner {
            ExprInner::Boolean(b) => Ok(Value::Boolean(*b)),
            ExprInner::Int(i) => Ok(Value::Int(*i)),
            ExprInner::Float(x) => Ok(Value::Float(*x)),
            ExprInner::String(literal) => self.eval_string(literal),
            ExprInner::Array { items, item_type } => {
                self.eval_array(items, item_type.as_ref(), env)
            }
            ExprInner::IfThenElse {
                condition,
                consequent,
                alternative,
            } => self.eval_if(condition, consequent, alternative, env),
            ExprInner::Apply {
                function,
                arguments,
            } => {
                let call = Call::new(self.pos, function.name(), arguments);
                function.implementation().call(&call, env)
            }
            ExprInner::Ident { identifier, .. } => self.eval_ident(identifier, env),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            ExprInner::Boolean(b) => write!(f, "{}", b),
            ExprInner::Int(i) => write!(f, "{}", i),
            ExprInner::Float(x) => format_float(f, *x),
            ExprInner::String(literal) => write!(f, "{}", literal),
            ExprInner::Array { items, .. } => {
                write!(f, "[")?;
                write_list(f, items)?;
                write!(f, "]")
            }
            ExprInner::IfThenElse {
                condition,
                consequent,
                alternative,
            } => write!(
                f,
                "if {} then {} else {}",
                condition, consequent, alternative
            ),
            ExprInner::Apply {
                function,
                arguments,
            } => {
                write!(f, "{}(", function.name())?;
                write_list(f, arguments)?;
                write!(f, ")")
            }
            ExprInner::Ident {
                namespace,
                identifier,
            } => {
                for part in namespace {
                    write!(f, "{}.", part)?;
                }
                write!(f, "{}", identifier)
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", expr)?;
    }
    Ok(())
}
