use log::debug;

use crate::interpreter::{
    command::{Command, parse_command},
    registry::Registry,
    validator::Policy,
};

/// Holds all state for one interactive run.
///
/// A session ties one validation policy to one function registry. It is
/// created at program start, passed into each command, and discarded at
/// exit; there is no ambient global state.
///
/// ## Usage
///
/// Feed one raw input line at a time to [`Session::run_line`]. A solve
/// yields `Some(value)`, a definition (or a skipped line) yields `None`,
/// and any failure aborts that command only — the session remains usable.
pub struct Session {
    registry: Registry,
    policy:   Policy,
}

impl Session {
    /// Creates a session with an empty registry and the given validation
    /// policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self { registry: Registry::new(),
               policy }
    }

    /// Returns the validation policy this session applies to definitions.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the session's function registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Executes one input line.
    ///
    /// Blank lines and lines starting with `//` are skipped. Everything
    /// else is parsed as a command:
    /// - `define` validates the body under the session policy and registers
    ///   it, yielding `None`;
    /// - `solve` substitutes and evaluates, yielding `Some(value)`.
    ///
    /// # Errors
    /// Returns the first `SyntaxError` or `EvalError` the command runs
    /// into. Errors never leave partial state behind: a rejected definition
    /// is not registered.
    pub fn run_line(&mut self, line: &str) -> Result<Option<i64>, Box<dyn std::error::Error>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            return Ok(None);
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => return Err(Box::new(e)),
        };

        match command {
            Command::Define { name, body } => {
                if let Err(e) = self.policy.check(&body) {
                    return Err(Box::new(e));
                }
                match self.registry.define(&name, &body) {
                    Ok(()) => {
                        debug!("defined function '{name}' as '{body}'");
                        Ok(None)
                    },
                    Err(e) => Err(Box::new(e)),
                }
            },

            Command::Solve { name, args } => match self.registry.solve(&name, &args) {
                Ok(value) => Ok(Some(value)),
                Err(e) => Err(Box::new(e)),
            },
        }
    }
}
