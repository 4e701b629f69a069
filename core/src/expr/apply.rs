use std::sync::Arc;

use super::{Expr, ExprInner};
use crate::{
    error::Error,
    functions::{Call, Function, FunctionRegistry},
    syntax::SourcePosition,
};

/// A function resolved from the registry when its `Apply` node was built.
#[derive(Clone)]
pub struct ResolvedFunction {
    name: String,
    implementation: Arc<dyn Function>,
}

impl ResolvedFunction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn implementation(&self) -> &dyn Function {
        self.implementation.as_ref()
    }
}

impl core::fmt::Debug for ResolvedFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ResolvedFunction").field(&self.name).finish()
    }
}

impl Expr {
    /// Application of the function registered as `name` to `arguments`.
    ///
    /// The function's own `typecheck` decides whether the call is valid and
    /// what type it has.
    pub fn apply(
        pos: SourcePosition,
        registry: &FunctionRegistry,
        name: &str,
        arguments: Vec<Expr>,
    ) -> Result<Self, Error> {
        let implementation = registry.get(name).ok_or_else(|| Error::NoSuchFunction {
            pos,
            name: name.to_string(),
        })?;
        let ty = implementation.typecheck(&Call::new(pos, name, &arguments))?;
        tracing::debug!(function = name, ty = %ty, "resolved function application");
        Ok(Self::new(
            pos,
            ty,
            ExprInner::Apply {
                function: ResolvedFunction {
                    name: name.to_string(),
                    implementation: Arc::clone(implementation),
                },
                arguments,
            },
        ))
    }
}
