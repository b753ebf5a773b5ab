//! # logica
//!
//! logica is a boolean logic expression evaluator written in Rust.
//! It validates, defines, and solves logical expressions built from the
//! operators `!`, `&` and `|`, with named functions and positional
//! argument substitution.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{session::Session, validator::Policy};

/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors that can be raised while validating,
/// defining, or solving expressions. It standardizes error reporting and
/// carries detailed information about failures, including offending
/// characters, parenthesis counts, and function names.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, evaluation).
/// - Renders each failure as a single human-readable line.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of command execution.
///
/// This module ties together command parsing, expression validation,
/// function registration, substitution, and evaluation to provide a
/// complete runtime for one interactive session.
///
/// # Responsibilities
/// - Coordinates all core components: command parser, validator, registry,
///   and evaluator.
/// - Provides entry points for executing user commands.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs every line of a script through a fresh session.
///
/// Each line is one command: `define` registers a function, `solve` prints
/// `Result: {value}` for the computed result. Blank lines and `//` comment
/// lines are skipped. Execution stops at the first failing command.
///
/// # Errors
/// Returns the first syntax or evaluation error any command raises.
///
/// # Examples
/// ```
/// use logica::{interpreter::validator::Policy, run_script};
///
/// // Define a function of two parameters and solve it.
/// let source = "define conj arg0&arg1\nsolve conj 1 1";
/// assert!(run_script(source, Policy::Strict).is_ok());
///
/// // An unbalanced expression is rejected at definition time.
/// assert!(run_script("define bad (1", Policy::Strict).is_err());
/// ```
pub fn run_script(source: &str, policy: Policy) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(policy);

    for line in source.lines() {
        if let Some(value) = session.run_line(line)? {
            println!("Result: {value}");
        }
    }

    Ok(())
}
