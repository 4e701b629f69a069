use super::{Expr, ExprInner};
use crate::{
    error::Error,
    syntax::{SourcePosition, string_literal::decode_literal},
    types::Type,
    values::Value,
};

impl Expr {
    pub fn boolean(pos: SourcePosition, literal: bool) -> Self {
        Self::new(pos, Type::Boolean, ExprInner::Boolean(literal))
    }

    pub fn int(pos: SourcePosition, literal: i64) -> Self {
        Self::new(pos, Type::Int, ExprInner::Int(literal))
    }

    pub fn float(pos: SourcePosition, literal: f64) -> Self {
        Self::new(pos, Type::Float, ExprInner::Float(literal))
    }

    /// String literal as it appears in source, including its quotes.
    ///
    /// Escape sequences are left alone here and decoded by `eval`.
    pub fn string(pos: SourcePosition, literal: impl Into<String>) -> Self {
        Self::new(pos, Type::String, ExprInner::String(literal.into()))
    }

    pub(super) fn eval_string(&self, literal: &str) -> Result<Value, Error> {
        let decoded = decode_literal(literal).map_err(|source| Error::InvalidEscape {
            pos: self.pos,
            source,
        })?;
        Ok(Value::String(decoded.into_owned()))
    }
}
