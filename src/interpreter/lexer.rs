use logos::Logos;

/// Represents a lexical symbol in expression text.
/// A symbol is a minimal meaningful unit of an expression. This enum defines
/// the complete accepted alphabet; any other character fails to lex and is
/// reported by the validator as an invalid character.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `!`
    #[token("!")]
    Not,
    /// `&`
    #[token("&")]
    And,
    /// `|`
    #[token("|")]
    Or,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Decimal digit runs, such as `0`, `1` or `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// Identifier runs: argument placeholders like `arg0` and references to
    /// defined functions. Resolved by substitution, never by the evaluator.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}
