//! Typed expression trees for the workflow description language.
//!
//! # Overview
//!
//! A host (typically a parser) builds expressions bottom-up through the
//! constructors on [`Expr`]. Each constructor typechecks the node it builds,
//! so a successfully built tree is well-typed and can be evaluated any number
//! of times against different runtime environments.
//!
//! # Quick Start
//!
//! ```
//! use wdl_expr::{Env, Expr, SourcePosition, StaticEnv, Type, Value, stdlib};
//!
//! let pos = SourcePosition::new(1, 1, 1, 20);
//! let static_env: StaticEnv = [("threads", Type::Int)].into_iter().collect();
//!
//! // if threads > 4 then threads else 4
//! let threads = || Expr::ident(pos, &["threads"], &static_env);
//! let condition = Expr::apply(
//!     pos,
//!     stdlib::registry(),
//!     "_gt",
//!     vec![threads()?, Expr::int(pos, 4)],
//! )?;
//! let expr = Expr::if_then_else(pos, condition, threads()?, Expr::int(pos, 4))?;
//! assert_eq!(expr.ty(), &Type::Int);
//!
//! let env: Env = [("threads", Value::int(8))].into_iter().collect();
//! assert_eq!(expr.eval(&env)?, Value::int(8));
//! # Ok::<(), wdl_expr::Error>(())
//! ```
//!
//! # Errors
//!
//! Every failure is an [`Error`] carrying the [`SourcePosition`] of the node
//! that detected it. [`Error`] implements [`miette::Diagnostic`]; the
//! [`error_renderer`] module turns one into a human-readable report.

pub mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to_string, render_error_to_string_no_color,
    render_error_with_source,
};
pub use wdl_expr_core::{
    Call, Env, Error, EvalOptions, Expr, ExprInner, Function, FunctionRegistry, SourcePosition,
    StaticEnv, Type, Value, ValueError, env, error, expr, functions, options, stdlib, syntax,
    types, values,
};
