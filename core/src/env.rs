//! Binding tables for the two phases.
//!
//! - [`StaticEnv`] binds identifiers to static types and is consulted only
//!   while nodes are being constructed.
//! - [`Env`] binds identifiers to runtime values and is consulted only during
//!   evaluation.
//!
//! The two are never mixed: a tree is typed against a `StaticEnv` once and may
//! then be evaluated against any number of `Env`s.

use core::cell::Cell;

use hashbrown::HashMap;

use crate::{
    error::Error, options::EvalOptions, syntax::SourcePosition, types::Type, values::Value,
};

/// Identifier → static type.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    bindings: HashMap<String, Type>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the type it was previously bound to.
    pub fn insert(&mut self, name: impl Into<String>, ty: Type) -> Option<Type> {
        self.bindings.insert(name.into(), ty)
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Type)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (S, Type)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        }
    }
}

/// Identifier → runtime value, plus the limits of one evaluation context.
///
/// An `Env` tracks the current evaluation depth, so it is meant to be used by
/// one evaluation at a time. Create one per context and share the expression
/// tree instead.
#[derive(Debug, Clone, Default)]
pub struct Env {
    bindings: HashMap<String, Value>,
    options: EvalOptions,
    depth: Cell<usize>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Bind `name`, returning the value it was previously bound to.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Static types of the current bindings.
    pub fn types(&self) -> StaticEnv {
        self.bindings
            .iter()
            .map(|(name, value)| (name.clone(), value.ty()))
            .collect()
    }

    /// Enter one level of evaluation. The returned guard leaves it on drop.
    pub(crate) fn enter(&self, pos: SourcePosition) -> Result<DepthGuard<'_>, Error> {
        let depth = self.depth.get();
        if depth >= self.options.max_depth {
            return Err(Error::StackOverflow {
                pos,
                depth,
                max_depth: self.options.max_depth,
            });
        }
        self.depth.set(depth + 1);
        Ok(DepthGuard { depth: &self.depth })
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Env {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            ..Self::default()
        }
    }
}

pub(crate) struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}
