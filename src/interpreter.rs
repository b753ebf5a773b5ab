/// The command module parses raw input lines into commands.
///
/// A line is split on whitespace and dispatched on its leading keyword,
/// producing either a function definition or a solve request.
pub mod command;

/// The evaluator module computes the value of expression text.
///
/// Implements the leftmost-operator-scan evaluation rule: NOT, then AND,
/// then OR, then an integer leaf.
pub mod evaluator;

/// The lexer module tokenizes expression text.
///
/// Classifies raw expression characters into operator, parenthesis, and
/// digit-run tokens, rejecting everything outside the accepted alphabet.
pub mod lexer;

/// The registry module stores user-defined functions.
///
/// Owns the name-to-body mapping and performs argument substitution and
/// function expansion when a function is solved.
pub mod registry;

/// The session module ties a validation policy to a registry.
///
/// Executes one command per call and holds all state for one interactive
/// run.
pub mod session;

/// The validator module checks expression text before evaluation.
///
/// Provides the pluggable validation policy: a strict character-set and
/// parenthesis check, and a looser operator-mix check.
pub mod validator;
