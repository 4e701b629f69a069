//! Function implementations and the registry that resolves call sites.
//!
//! An [`Apply`](crate::ExprInner::Apply) node delegates both of its phases to
//! the implementation it resolved at construction time:
//! - [`Function::typecheck`] decides the node's static type (or rejects the
//!   call), so arity, overloads and argument coercions are each function's own
//!   business.
//! - [`Function::call`] produces the value. It receives the unevaluated
//!   arguments, so it controls evaluation order and short-circuiting.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::{
    env::Env,
    error::Error,
    expr::Expr,
    syntax::SourcePosition,
    types::Type,
    values::Value,
};

/// A callable known to the registry.
///
/// Implementations are shared between threads through the registry, and must
/// not keep state that changes the result of `typecheck`.
pub trait Function: Send + Sync {
    /// Return type of the function applied at `call`, or why it cannot be applied.
    fn typecheck(&self, call: &Call<'_>) -> Result<Type, Error>;

    /// Evaluate the function applied at `call` against `env`.
    fn call(&self, call: &Call<'_>, env: &Env) -> Result<Value, Error>;
}

/// The call site as seen by a [`Function`]: where it is, the name it was
/// called by, and its already-typed (but unevaluated) arguments.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    pub pos: SourcePosition,
    pub name: &'a str,
    pub arguments: &'a [Expr],
}

impl<'a> Call<'a> {
    pub fn new(pos: SourcePosition, name: &'a str, arguments: &'a [Expr]) -> Self {
        Self {
            pos,
            name,
            arguments,
        }
    }

    /// Fail with `WrongArity` unless exactly `expected` arguments were given.
    pub fn arity_check(&self, expected: usize) -> Result<(), Error> {
        if self.arguments.len() != expected {
            return Err(Error::WrongArity {
                pos: self.pos,
                function: self.name.to_string(),
                expected,
                found: self.arguments.len(),
            });
        }
        Ok(())
    }

    pub fn argument(&self, index: usize) -> &'a Expr {
        &self.arguments[index]
    }

    pub fn incompatible(&self, message: impl Into<String>) -> Error {
        Error::IncompatibleOperand {
            pos: self.pos,
            function: self.name.to_string(),
            message: message.into(),
        }
    }
}

/// Name → function table consulted when constructing `Apply` nodes.
///
/// Populate it once during setup, then share it read-only.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn Function>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `function` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, function: impl Function + 'static) {
        let name = name.into();
        tracing::debug!(name = %name, "registering function");
        if self.functions.insert(name, Arc::new(function)).is_some() {
            tracing::debug!("replaced previously registered function");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Function>> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl core::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}
