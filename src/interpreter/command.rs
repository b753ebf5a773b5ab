use crate::error::SyntaxError;

/// Represents one parsed input line.
///
/// A command is either a function definition or a request to solve a
/// previously defined function with positional arguments. Commands carry
/// raw expression text; nothing is evaluated at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `define <name> <expression>`
    Define {
        /// The function name to register.
        name: String,
        /// The unsubstituted expression text.
        body: String,
    },
    /// `solve <name> <arg0> <arg1> ...`
    Solve {
        /// The function name to look up.
        name: String,
        /// Positional argument tokens, bound to `arg0`, `arg1`, ... in
        /// call order.
        args: Vec<String>,
    },
}

/// Parses one raw input line into a [`Command`].
///
/// The line is split on whitespace and dispatched on the leading token,
/// matched case-insensitively. A definition carries exactly one expression
/// token; a solve carries zero or more argument tokens.
///
/// # Parameters
/// - `line`: One non-empty input line.
///
/// # Errors
/// - `UnknownCommand` when the leading token is neither `define` nor
///   `solve`.
/// - `MissingFunctionName` when a command has no name token.
/// - `MissingExpression` when a definition has no expression token.
/// - `TrailingTokens` when a definition carries tokens after its
///   expression.
pub fn parse_command(line: &str) -> Result<Command, SyntaxError> {
    let mut tokens = line.split_whitespace();

    let Some(keyword) = tokens.next() else {
        return Err(SyntaxError::UnknownCommand { command: String::new() });
    };

    match keyword.to_lowercase().as_str() {
        "define" => {
            let Some(name) = tokens.next() else {
                return Err(SyntaxError::MissingFunctionName);
            };
            let Some(body) = tokens.next() else {
                return Err(SyntaxError::MissingExpression { name: name.to_string() });
            };
            if let Some(extra) = tokens.next() {
                return Err(SyntaxError::TrailingTokens { token: extra.to_string() });
            }

            Ok(Command::Define { name: name.to_string(),
                                 body: body.to_string() })
        },

        "solve" => {
            let Some(name) = tokens.next() else {
                return Err(SyntaxError::MissingFunctionName);
            };
            let args = tokens.map(str::to_string).collect();

            Ok(Command::Solve { name: name.to_string(),
                                args })
        },

        _ => Err(SyntaxError::UnknownCommand { command: keyword.to_string() }),
    }
}
