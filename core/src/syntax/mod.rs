pub mod position;
pub mod string_literal;

pub use position::SourcePosition;
