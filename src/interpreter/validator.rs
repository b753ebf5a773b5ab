use clap::ValueEnum;
use logos::Logos;

use crate::{error::SyntaxError, interpreter::lexer::Symbol};

/// Selects how expression text is validated before it is accepted.
///
/// The two policies accept different input sets and are never combined.
/// `Strict` is the default; `Loose` exists for compatibility with scripts
/// written against the older, weaker rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Policy {
    /// Accepts only the characters `0`-`9`, `&`, `|`, `!`, `(` and `)`,
    /// and requires balanced parentheses.
    #[default]
    Strict,
    /// Rejects only expressions in which `&`, `|` and `!` all appear
    /// together, plus unbalanced parentheses. Any other character is
    /// accepted and left for the evaluator to reject.
    Loose,
}

impl Policy {
    /// Validates expression text under this policy.
    ///
    /// Validation is pure: it never mutates state, and checking the same
    /// text twice yields the same result. Parentheses are only counted
    /// here; the evaluator ignores them entirely.
    ///
    /// # Parameters
    /// - `text`: Raw expression text, without surrounding whitespace.
    ///
    /// # Errors
    /// - `InvalidCharacter` for text outside the accepted set (strict only).
    /// - `InvalidSyntax` when `&`, `|` and `!` all appear (loose only).
    /// - `UnbalancedParentheses` when the `(` and `)` counts differ.
    pub fn check(self, text: &str) -> Result<(), SyntaxError> {
        match self {
            Self::Strict => check_strict(text),
            Self::Loose => check_loose(text),
        }
    }
}

/// Scans the text with the expression lexer, failing at the first character
/// outside the accepted alphabet, then compares parenthesis counts.
///
/// The character check runs before the parenthesis check: text that is both
/// illegal and unbalanced reports the illegal character.
fn check_strict(text: &str) -> Result<(), SyntaxError> {
    let mut open = 0;
    let mut close = 0;

    let mut lexer = Symbol::lexer(text);
    while let Some(symbol) = lexer.next() {
        match symbol {
            Ok(Symbol::LParen) => open += 1,
            Ok(Symbol::RParen) => close += 1,
            Ok(_) => {},
            Err(()) => {
                let span = lexer.span();
                let found = text[span.clone()].chars().next().unwrap_or(' ');
                return Err(SyntaxError::InvalidCharacter { found,
                                                           column: span.start + 1 });
            },
        }
    }

    if open != close {
        return Err(SyntaxError::UnbalancedParentheses { open, close });
    }
    Ok(())
}

/// Applies the historical weak rule: the three operators may not all appear
/// in one expression, and parentheses must balance. Characters outside the
/// strict alphabet pass through untouched.
fn check_loose(text: &str) -> Result<(), SyntaxError> {
    if text.contains('&') && text.contains('|') && text.contains('!') {
        return Err(SyntaxError::InvalidSyntax);
    }

    let open = text.chars().filter(|&c| c == '(').count();
    let close = text.chars().filter(|&c| c == ')').count();
    if open != close {
        return Err(SyntaxError::UnbalancedParentheses { open, close });
    }
    Ok(())
}
