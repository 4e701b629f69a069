use super::{Expr, ExprInner};
use crate::{
    env::{Env, StaticEnv},
    error::Error,
    syntax::SourcePosition,
    values::Value,
};

impl Expr {
    /// Identifier reference, typed by its binding in `static_env`.
    ///
    /// `parts` is the dotted name already split, e.g. `["x"]`.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is empty or names a namespace (has more than one
    /// part); namespaced identifiers are not supported yet.
    pub fn ident(
        pos: SourcePosition,
        parts: &[&str],
        static_env: &StaticEnv,
    ) -> Result<Self, Error> {
        let Some((identifier, namespace)) = parts.split_last() else {
            panic!("identifier must have at least one part");
        };
        assert!(
            namespace.is_empty(),
            "namespaced identifiers are not supported: {}",
            parts.join(".")
        );

        let ty = static_env
            .get(identifier)
            .cloned()
            .ok_or_else(|| Error::UnknownIdentifier {
                pos,
                name: identifier.to_string(),
            })?;
        Ok(Self::new(
            pos,
            ty,
            ExprInner::Ident {
                namespace: Vec::new(),
                identifier: identifier.to_string(),
            },
        ))
    }

    /// A missing runtime binding is an error; there is no "unset" value.
    /// The bound value is coerced to the identifier's static type.
    pub(super) fn eval_ident(&self, identifier: &str, env: &Env) -> Result<Value, Error> {
        let value = env
            .get(identifier)
            .cloned()
            .ok_or_else(|| Error::UnknownIdentifier {
                pos: self.pos,
                name: identifier.to_string(),
            })?;
        value.coerce(&self.ty).map_err(|source| Error::Value {
            pos: self.pos,
            source,
        })
    }
}
