//! The error taxonomy shared by construction and evaluation.
//!
//! Construction-time errors (`StaticTypeMismatch`, `NoSuchFunction`,
//! `WrongArity`, `IncompatibleOperand`) abort building a tree.
//! `UnknownIdentifier` is raised in both phases. The remaining variants occur
//! only while evaluating an already-typed tree. Every variant records the
//! position of the node that detected it.

use miette::Diagnostic;
use thiserror::Error;

use crate::{
    syntax::{SourcePosition, string_literal::UnescapeError},
    types::Type,
    values::ValueError,
};

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum Error {
    #[error("{pos}: type mismatch: expected {expected}, found {actual}{}", note_suffix(.note))]
    #[diagnostic(code(E001), help("types must match in this context"))]
    StaticTypeMismatch {
        pos: SourcePosition,
        expected: Type,
        actual: Type,
        note: Option<String>,
    },

    #[error("{pos}: no such function '{name}'")]
    #[diagnostic(code(E002), help("check the function name for typos"))]
    NoSuchFunction { pos: SourcePosition, name: String },

    #[error("{pos}: unknown identifier '{name}'")]
    #[diagnostic(code(E003), help("make sure the identifier is bound before use"))]
    UnknownIdentifier { pos: SourcePosition, name: String },

    #[error("{pos}: {function} expects {expected} argument(s), found {found}")]
    #[diagnostic(code(E004), help("check the number of arguments in the function call"))]
    WrongArity {
        pos: SourcePosition,
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("{pos}: incompatible operand to {function}: {message}")]
    #[diagnostic(code(E005))]
    IncompatibleOperand {
        pos: SourcePosition,
        function: String,
        message: String,
    },

    #[error("{pos}: division by zero")]
    #[diagnostic(code(E101))]
    DivisionByZero { pos: SourcePosition },

    #[error("{pos}: index {index} out of bounds (length: {len})")]
    #[diagnostic(code(E102))]
    IndexOutOfBounds {
        pos: SourcePosition,
        index: i64,
        len: usize,
    },

    #[error("{pos}: {source}")]
    #[diagnostic(code(E103))]
    Value {
        pos: SourcePosition,
        #[source]
        source: ValueError,
    },

    #[error("{pos}: invalid string literal: {source}")]
    #[diagnostic(code(E104))]
    InvalidEscape {
        pos: SourcePosition,
        #[source]
        source: UnescapeError,
    },

    #[error("{pos}: evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    #[diagnostic(code(E105), help("simplify the expression or raise max_depth"))]
    StackOverflow {
        pos: SourcePosition,
        depth: usize,
        max_depth: usize,
    },
}

impl Error {
    /// Position of the node that raised the error.
    pub fn pos(&self) -> SourcePosition {
        match self {
            Error::StaticTypeMismatch { pos, .. }
            | Error::NoSuchFunction { pos, .. }
            | Error::UnknownIdentifier { pos, .. }
            | Error::WrongArity { pos, .. }
            | Error::IncompatibleOperand { pos, .. }
            | Error::DivisionByZero { pos }
            | Error::IndexOutOfBounds { pos, .. }
            | Error::Value { pos, .. }
            | Error::InvalidEscape { pos, .. }
            | Error::StackOverflow { pos, .. } => *pos,
        }
    }

    /// Shorthand for a mismatch with no qualifying note.
    pub fn mismatch(pos: SourcePosition, expected: &Type, actual: &Type) -> Self {
        Error::StaticTypeMismatch {
            pos,
            expected: expected.clone(),
            actual: actual.clone(),
            note: None,
        }
    }

    /// Attach a note to a `StaticTypeMismatch`; other errors pass through.
    pub fn with_note(self, note: impl Into<String>) -> Self {
        match self {
            Error::StaticTypeMismatch {
                pos,
                expected,
                actual,
                ..
            } => Error::StaticTypeMismatch {
                pos,
                expected,
                actual,
                note: Some(note.into()),
            },
            other => other,
        }
    }
}

fn note_suffix(note: &Option<String>) -> String {
    match note {
        Some(note) => format!(" ({})", note),
        None => String::new(),
    }
}
