//! Typed expression core for the workflow description language.
//!
//! Expression nodes are typed as they are built: a constructor either returns
//! a node whose static type is known and valid, or an [`Error`]. Evaluation is
//! a separate pass over the already-typed tree against a runtime [`Env`].
//!
//! ```
//! use wdl_expr_core::{Env, Expr, SourcePosition, StaticEnv, Type, Value, stdlib};
//!
//! let pos = SourcePosition::default();
//! let static_env: StaticEnv = [("x", Type::Int)].into_iter().collect();
//!
//! let x = Expr::ident(pos, &["x"], &static_env).unwrap();
//! let half = Expr::float(pos, 0.5);
//! let sum = Expr::apply(pos, stdlib::registry(), "_add", vec![x, half]).unwrap();
//! assert_eq!(sum.ty(), &Type::Float);
//!
//! let env: Env = [("x", Value::int(2))].into_iter().collect();
//! assert_eq!(sum.eval(&env).unwrap(), Value::float(2.5));
//! ```

pub mod env;
pub mod error;
pub mod expr;
pub mod functions;
pub mod options;
pub mod stdlib;
pub mod syntax;
pub mod types;
pub mod values;

pub use env::{Env, StaticEnv};
pub use error::Error;
pub use expr::{Expr, ExprInner};
pub use functions::{Call, Function, FunctionRegistry};
pub use options::EvalOptions;
pub use syntax::SourcePosition;
pub use types::Type;
pub use values::{Value, ValueError};
