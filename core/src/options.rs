//! Configuration options for expression evaluation.

/// Configuration options for expression evaluation.
///
/// These options control resource limits during evaluation. They are carried
/// by the runtime [`Env`](crate::Env), so each evaluation context may use its
/// own limits.
///
/// # Example
///
/// ```
/// use wdl_expr_core::{Env, EvalOptions};
///
/// let env = Env::with_options(EvalOptions { max_depth: 64 });
/// assert_eq!(env.options().max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Each level of nesting costs one unit. The default fits the stack of a
    /// spawned thread (2 MiB) in debug builds.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}
