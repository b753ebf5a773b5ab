use log::debug;

use crate::{
    error::EvalError,
    interpreter::evaluator::{EvalResult, evaluate},
};

/// One registered function: a name bound to unsubstituted expression text.
#[derive(Debug, Clone)]
struct Function {
    name: String,
    body: String,
}

/// Stores user-defined functions for one session.
///
/// The registry maps function names to their raw body text. Names are
/// unique; entries are kept in definition order, which is also the order
/// function expansion sweeps them in. Entries are only ever added — the
/// registry lives for one session and is discarded with it.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Function>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no function has been defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored body text of `name`, if defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.body.as_str())
    }

    /// Registers a function under a new name.
    ///
    /// The body is stored verbatim; the caller is responsible for having
    /// validated it first.
    ///
    /// # Errors
    /// - `AlreadyDefined` when `name` is already registered. Functions are
    ///   never redefined or removed.
    pub fn define(&mut self, name: &str, body: &str) -> EvalResult<()> {
        if self.get(name).is_some() {
            return Err(EvalError::AlreadyDefined { name: name.to_string() });
        }

        self.entries.push(Function { name: name.to_string(),
                                     body: body.to_string() });
        Ok(())
    }

    /// Solves a registered function with positional arguments.
    ///
    /// The stored body is substituted (see [`Self::substitute`]) and the
    /// result is evaluated.
    ///
    /// # Parameters
    /// - `name`: Function to look up.
    /// - `args`: Argument tokens bound to `arg0`, `arg1`, ... in order.
    ///
    /// # Errors
    /// - `NotDefined` when `name` was never defined.
    /// - `MalformedLiteral` when substitution leaves text the evaluator
    ///   cannot interpret.
    pub fn solve(&self, name: &str, args: &[String]) -> EvalResult<i64> {
        let body = self.get(name)
                       .ok_or_else(|| EvalError::NotDefined { name: name.to_string() })?;

        let text = self.substitute(body, args);
        debug!("solve '{name}': expanded to '{text}'");

        evaluate(&text)
    }

    /// Substitutes arguments and function bodies into expression text.
    ///
    /// Two passes of literal text replacement:
    ///
    /// 1. For each argument index `i` in call order, every occurrence of
    ///    `arg{i}` is replaced with the argument text.
    /// 2. For every registry entry in definition order, every occurrence of
    ///    the entry's name is replaced with its raw, unsubstituted body.
    ///
    /// The second pass runs exactly once: function names introduced by an
    /// expansion are not expanded again. Replacement is plain substring
    /// search, so an argument whose text contains a later placeholder or a
    /// defined function name is rewritten by the later passes.
    fn substitute(&self, body: &str, args: &[String]) -> String {
        let mut text = body.to_string();

        for (index, argument) in args.iter().enumerate() {
            let placeholder = format!("arg{index}");
            text = text.replace(&placeholder, argument);
        }

        for entry in &self.entries {
            text = text.replace(&entry.name, &entry.body);
        }

        text
    }
}
