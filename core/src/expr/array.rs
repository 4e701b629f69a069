use super::{Expr, ExprInner};
use crate::{
    env::Env, error::Error, syntax::SourcePosition, types::Type, values::Value,
};

const INCONSISTENT_ITEMS: &str = "inconsistent types within array";

impl Expr {
    /// Array literal over already-built items.
    ///
    /// The item type is the first item's type, widened to Float when Int and
    /// Float items are mixed, and made concrete when the first item is an
    /// empty array but a later one is not. Every item must then typecheck
    /// against it. An empty literal has type `AnyArray`.
    pub fn array(pos: SourcePosition, items: Vec<Expr>) -> Result<Self, Error> {
        if items.is_empty() {
            return Ok(Self::new(
                pos,
                Type::AnyArray,
                ExprInner::Array {
                    items,
                    item_type: None,
                },
            ));
        }

        let mut item_type = items[0].ty.clone();
        if item_type == Type::Int && items.iter().any(|item| item.ty == Type::Float) {
            tracing::trace!(pos = %pos, "widening array items to Float");
            item_type = Type::Float;
        }
        if item_type == Type::AnyArray {
            if let Some(concrete) = items.iter().find(|item| item.ty.item_type().is_some()) {
                item_type = concrete.ty.clone();
            }
        }

        // Report the mismatch at the array, not at the item.
        for item in &items {
            if item.typecheck(Some(&item_type)).is_err() {
                return Err(Error::StaticTypeMismatch {
                    pos,
                    expected: item_type,
                    actual: item.ty.clone(),
                    note: Some(INCONSISTENT_ITEMS.to_string()),
                });
            }
        }

        Ok(Self::new(
            pos,
            Type::array(item_type.clone()),
            ExprInner::Array {
                items,
                item_type: Some(item_type),
            },
        ))
    }

    pub(super) fn eval_array(
        &self,
        items: &[Expr],
        item_type: Option<&Type>,
        env: &Env,
    ) -> Result<Value, Error> {
        let values = items
            .iter()
            .map(|item| {
                let value = item.eval(env)?;
                match item_type {
                    Some(item_type) => value.coerce(item_type).map_err(|source| Error::Value {
                        pos: item.pos,
                        source,
                    }),
                    None => Ok(value),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::array(self.ty.clone(), values))
    }
}
