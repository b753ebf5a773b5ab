/// Syntax errors.
///
/// Defines all error types that can occur before an expression is evaluated:
/// illegal characters, unbalanced parentheses, rejected operator mixes, and
/// malformed commands.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while resolving and
/// evaluating a function: unknown or duplicate names, and literals that
/// survive substitution without being valid integers.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
