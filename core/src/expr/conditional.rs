use super::{Expr, ExprInner};
use crate::{
    env::Env, error::Error, syntax::SourcePosition, types::Type, values::Value,
};

impl Expr {
    /// `if condition then consequent else alternative`.
    ///
    /// The condition must be Boolean and both branches must have exactly the
    /// same type, which becomes the type of the node.
    pub fn if_then_else(
        pos: SourcePosition,
        condition: Expr,
        consequent: Expr,
        alternative: Expr,
    ) -> Result<Self, Error> {
        if condition.ty != Type::Boolean {
            return Err(
                Error::mismatch(pos, &Type::Boolean, &condition.ty).with_note("in if condition")
            );
        }
        // TODO: accept one Int and one Float branch, widening the node to Float.
        if consequent.ty != alternative.ty {
            return Err(Error::mismatch(pos, &consequent.ty, &alternative.ty)
                .with_note("if consequent & alternative must have the same type"));
        }
        let ty = consequent.ty.clone();
        Ok(Self::new(
            pos,
            ty,
            ExprInner::IfThenElse {
                condition: Box::new(condition),
                consequent: Box::new(consequent),
                alternative: Box::new(alternative),
            },
        ))
    }

    /// Only the selected branch is evaluated.
    pub(super) fn eval_if(
        &self,
        condition: &Expr,
        consequent: &Expr,
        alternative: &Expr,
        env: &Env,
    ) -> Result<Value, Error> {
        let value = condition
            .eval(env)?
            .expect(&Type::Boolean)
            .map_err(|source| Error::Value {
                pos: condition.pos,
                source,
            })?;
        if value.as_bool() == Some(false) {
            alternative.eval(env)
        } else {
            consequent.eval(env)
        }
    }
}
