#[derive(Debug)]
/// Represents all errors that can occur while resolving and evaluating a
/// function.
pub enum EvalError {
    /// Attempted to define a function that already exists.
    AlreadyDefined {
        /// The name of the function.
        name: String,
    },
    /// Solved a function that was never defined.
    NotDefined {
        /// The name of the function.
        name: String,
    },
    /// Evaluation reached a leaf that is not a valid integer literal.
    /// Substitution produced text the evaluator cannot interpret.
    MalformedLiteral {
        /// The leaf text that failed to parse.
        literal: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDefined { name } => {
                write!(f, "Error: Function '{name}' is already defined.")
            },

            Self::NotDefined { name } => write!(f, "Error: Function '{name}' is not defined."),

            Self::MalformedLiteral { literal } => {
                write!(f, "Error: '{literal}' is not a valid integer literal.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
