use crate::error::EvalError;

/// Result type used by the evaluator and the registry.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates expression text and returns its integer value.
///
/// The evaluation rule is a fixed leftmost-operator scan, not precedence
/// parsing:
///
/// 1. If the text contains `!`, everything after the *first* `!` is the
///    operand. The operand is evaluated recursively; the result is `1` if
///    the operand evaluated to `0`, else `0`. Text before the `!` is
///    discarded.
/// 2. Else if the text contains `&`, it is split at the *first* occurrence
///    and both sides are evaluated; the result is `1` iff both sides are
///    exactly `1`.
/// 3. Else if the text contains `|`, it is split the same way; the result
///    is `1` iff either side is exactly `1`.
/// 4. Else the text, with any parentheses discarded, is parsed as a
///    base-10 integer.
///
/// Parentheses never group. They are counted during validation and
/// discarded here, so `1|(0&0)` splits at `&` and evaluates to `0`.
/// Literals may be any `i64`; only operator results are coerced to 0/1.
///
/// Every recursive call receives a strictly shorter substring, so
/// evaluation terminates on all inputs.
///
/// # Parameters
/// - `text`: Expression text, fully substituted.
///
/// # Errors
/// - `MalformedLiteral` when a leaf is not a valid integer, including the
///   empty leaf produced by a dangling operator.
///
/// # Example
/// ```
/// use logica::interpreter::evaluator::evaluate;
///
/// assert_eq!(evaluate("!0").unwrap(), 1);
/// assert_eq!(evaluate("1&1").unwrap(), 1);
/// // AND is found first and splits the whole text.
/// assert_eq!(evaluate("0|1&0").unwrap(), 0);
/// ```
pub fn evaluate(text: &str) -> EvalResult<i64> {
    if let Some(index) = text.find('!') {
        let operand = evaluate(&text[index + 1..])?;
        return Ok(i64::from(operand == 0));
    }

    if let Some(index) = text.find('&') {
        let left = evaluate(&text[..index])?;
        let right = evaluate(&text[index + 1..])?;
        return Ok(i64::from(left == 1 && right == 1));
    }

    if let Some(index) = text.find('|') {
        let left = evaluate(&text[..index])?;
        let right = evaluate(&text[index + 1..])?;
        return Ok(i64::from(left == 1 || right == 1));
    }

    let literal = text.replace(['(', ')'], "");
    literal.parse()
           .map_err(|_| EvalError::MalformedLiteral { literal })
}
