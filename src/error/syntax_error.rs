#[derive(Debug)]
/// Represents all errors that can occur before evaluation begins.
pub enum SyntaxError {
    /// The expression contains a character outside the accepted set.
    InvalidCharacter {
        /// The offending character.
        found:  char,
        /// 1-based column of the character within the expression.
        column: usize,
    },
    /// The counts of `(` and `)` differ.
    UnbalancedParentheses {
        /// Number of opening parentheses.
        open:  usize,
        /// Number of closing parentheses.
        close: usize,
    },
    /// The expression was rejected by the loose validation policy.
    InvalidSyntax,
    /// The line does not start with a recognized command keyword.
    UnknownCommand {
        /// The leading token that was not recognized.
        command: String,
    },
    /// A command requires a function name, but none was supplied.
    MissingFunctionName,
    /// A `define` command names a function but carries no expression.
    MissingExpression {
        /// The function name the definition was for.
        name: String,
    },
    /// Found extra tokens after the expression of a `define` command.
    TrailingTokens {
        /// The first extra token.
        token: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found, column } => {
                write!(f, "Error: Invalid character '{found}' at column {column}.")
            },

            Self::UnbalancedParentheses { open, close } => write!(f,
                "Error: Unbalanced parentheses. Found {open} opening and {close} closing."),

            Self::InvalidSyntax => write!(f, "Error: Invalid syntax."),

            Self::UnknownCommand { command } => {
                write!(f, "Error: Unknown command '{command}'. Expected 'define' or 'solve'.")
            },

            Self::MissingFunctionName => write!(f, "Error: Expected a function name."),

            Self::MissingExpression { name } => {
                write!(f, "Error: Definition of '{name}' carries no expression.")
            },

            Self::TrailingTokens { token } => {
                write!(f, "Error: Extra tokens after expression. Check your input: {token}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
