use std::fs::{self};

use logica::{
    error::{EvalError, SyntaxError},
    interpreter::{evaluator::evaluate, registry::Registry, session::Session, validator::Policy},
    run_script,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_logica_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_script(&code, Policy::Strict) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_logica_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```logica") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run_script(src, Policy::Strict) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src, Policy::Strict).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn not_operator() {
    assert_eq!(evaluate("!0").unwrap(), 1);
    assert_eq!(evaluate("!1").unwrap(), 0);
}

#[test]
fn and_operator() {
    assert_eq!(evaluate("1&0").unwrap(), 0);
    assert_eq!(evaluate("0&1").unwrap(), 0);
    assert_eq!(evaluate("1&1").unwrap(), 1);
}

#[test]
fn or_operator() {
    assert_eq!(evaluate("0|0").unwrap(), 0);
    assert_eq!(evaluate("1|0").unwrap(), 1);
    assert_eq!(evaluate("0|1").unwrap(), 1);
}

#[test]
fn and_splits_before_or_is_scanned() {
    // The AND scan runs first and splits the whole text: left "0|1" is 1,
    // right "0" is 0, so the result is 0 even though `|` appears first.
    assert_eq!(evaluate("0|1&0").unwrap(), 0);
    assert_eq!(evaluate("1&0|1").unwrap(), 1);
}

#[test]
fn not_consumes_the_remainder() {
    // Everything after the first `!` is the operand; the text before it is
    // discarded.
    assert_eq!(evaluate("1&!0").unwrap(), 1);
    assert_eq!(evaluate("!1&1").unwrap(), 0);
}

#[test]
fn parentheses_do_not_group() {
    // Balanced parens are required by validation but never consulted during
    // evaluation: the AND scan splits straight through the group.
    assert_eq!(evaluate("1|(0&0)").unwrap(), 0);
    assert_eq!(evaluate("(1)&0").unwrap(), 0);
    assert_eq!(evaluate("(0|1)&1").unwrap(), 1);
}

#[test]
fn literals_are_plain_integers() {
    assert_eq!(evaluate("42").unwrap(), 42);
    assert_eq!(evaluate("-3").unwrap(), -3);
    // Only the exact value 1 counts as true for the operators.
    assert_eq!(evaluate("5&1").unwrap(), 0);
    assert_eq!(evaluate("12|0").unwrap(), 0);
}

#[test]
fn malformed_leaves_are_errors() {
    assert!(matches!(evaluate("abc"), Err(EvalError::MalformedLiteral { .. })));
    assert!(matches!(evaluate(""), Err(EvalError::MalformedLiteral { .. })));
    // A dangling operator leaves an empty leaf.
    assert!(matches!(evaluate("1&"), Err(EvalError::MalformedLiteral { .. })));
}

#[test]
fn strict_policy_accepts_legal_expressions() {
    assert!(Policy::Strict.check("(1&0)|!1").is_ok());
    assert!(Policy::Strict.check("arg0&arg1").is_ok());
    assert!(Policy::Strict.check("10|01").is_ok());
}

#[test]
fn strict_policy_rejects_illegal_characters() {
    let err = Policy::Strict.check("1+1").unwrap_err();
    assert!(matches!(err, SyntaxError::InvalidCharacter { found: '+', column: 2 }));

    // The character check runs before the parenthesis check.
    let err = Policy::Strict.check("(1+").unwrap_err();
    assert!(matches!(err, SyntaxError::InvalidCharacter { found: '+', .. }));
}

#[test]
fn strict_policy_rejects_unbalanced_parentheses() {
    let err = Policy::Strict.check("((1)").unwrap_err();
    assert!(matches!(err, SyntaxError::UnbalancedParentheses { open: 2, close: 1 }));
    assert!(matches!(Policy::Strict.check(")1("), Ok(())),
            "balance only compares counts, not nesting");
}

#[test]
fn loose_policy_rejects_the_full_operator_mix() {
    assert!(matches!(Policy::Loose.check("1&0|!1"), Err(SyntaxError::InvalidSyntax)));
    // Any two operators are fine.
    assert!(Policy::Loose.check("1&!0").is_ok());
    assert!(Policy::Loose.check("1|0").is_ok());
}

#[test]
fn loose_policy_ignores_the_character_set() {
    assert!(Policy::Loose.check("x%1").is_ok());
    assert!(matches!(Policy::Loose.check("((x"),
                     Err(SyntaxError::UnbalancedParentheses { open: 2, close: 0 })));
}

#[test]
fn validation_is_idempotent() {
    let text = "(1&0)|arg0";
    assert_eq!(Policy::Strict.check(text).is_ok(), Policy::Strict.check(text).is_ok());
    assert_eq!(Policy::Loose.check(text).is_ok(), Policy::Loose.check(text).is_ok());
}

#[test]
fn define_and_solve_substitutes_positionally() {
    let mut registry = Registry::new();
    registry.define("f", "arg0&arg1").unwrap();

    let result = registry.solve("f", &["1".to_string(), "0".to_string()]).unwrap();
    assert_eq!(result, 0);
}

#[test]
fn redefinition_is_rejected() {
    let mut registry = Registry::new();
    registry.define("f", "1").unwrap();

    let err = registry.define("f", "0").unwrap_err();
    assert!(matches!(err, EvalError::AlreadyDefined { .. }));
    assert_eq!(registry.get("f"), Some("1"), "the first definition stays");
}

#[test]
fn solving_an_unknown_function_is_rejected() {
    let registry = Registry::new();
    let err = registry.solve("missing", &[]).unwrap_err();
    assert!(matches!(err, EvalError::NotDefined { .. }));
}

#[test]
fn function_names_expand_to_their_bodies() {
    let mut registry = Registry::new();
    registry.define("t", "1").unwrap();
    registry.define("g", "t&arg0").unwrap();

    // "t&arg0" -> "t&1" -> "1&1"
    assert_eq!(registry.solve("g", &["1".to_string()]).unwrap(), 1);
}

#[test]
fn argument_text_is_rewritten_by_later_passes() {
    // Substitution is literal text replacement: an argument whose text is a
    // later placeholder gets replaced again by that placeholder's pass.
    let mut registry = Registry::new();
    registry.define("h", "arg0&arg1").unwrap();

    let args = ["arg1".to_string(), "0".to_string()];
    assert_eq!(registry.solve("h", &args).unwrap(), 0, "body became 0&0, not arg1&0");
}

#[test]
fn expansion_is_a_single_pass() {
    // Expanding "outer" introduces "arg0" from the body of "inner", but the
    // argument pass already ran and never runs again.
    let mut registry = Registry::new();
    registry.define("inner", "arg0|0").unwrap();
    registry.define("outer", "inner&1").unwrap();

    let err = registry.solve("outer", &[]).unwrap_err();
    assert!(matches!(err, EvalError::MalformedLiteral { ref literal } if literal == "arg0"));
}

#[test]
fn session_runs_commands() {
    let mut session = Session::new(Policy::Strict);

    assert_eq!(session.run_line("define conj arg0&arg1").unwrap(), None);
    assert_eq!(session.run_line("solve conj 1 1").unwrap(), Some(1));
    assert_eq!(session.run_line("solve conj 1 0").unwrap(), Some(0));
}

#[test]
fn session_keywords_are_case_insensitive() {
    let mut session = Session::new(Policy::Strict);

    assert_eq!(session.run_line("DEFINE top 1").unwrap(), None);
    assert_eq!(session.run_line("Solve top").unwrap(), Some(1));
}

#[test]
fn session_skips_blank_and_comment_lines() {
    let mut session = Session::new(Policy::Strict);

    assert_eq!(session.run_line("").unwrap(), None);
    assert_eq!(session.run_line("   ").unwrap(), None);
    assert_eq!(session.run_line("// a comment").unwrap(), None);
    assert!(session.registry().is_empty());
}

#[test]
fn session_survives_failed_commands() {
    let mut session = Session::new(Policy::Strict);

    assert!(session.run_line("define broken (1").is_err());
    assert!(session.registry().is_empty(), "a rejected definition is not registered");

    assert_eq!(session.run_line("define fine !arg0").unwrap(), None);
    assert_eq!(session.run_line("solve fine 0").unwrap(), Some(1));
}

#[test]
fn loose_session_defers_garbage_to_evaluation() {
    let mut session = Session::new(Policy::Loose);

    // The loose policy accepts a body the strict policy would reject...
    assert_eq!(session.run_line("define f x%1").unwrap(), None);
    // ...and the garbage only surfaces once the function is solved.
    assert!(session.run_line("solve f").is_err());
}

#[test]
fn unknown_commands_are_errors() {
    assert_failure("frobnicate 1");
    assert_failure("definesolve f 1");
}

#[test]
fn define_grammar_is_fixed() {
    assert_failure("define");
    assert_failure("define f");
    assert_failure("define f 1 2");
    assert_failure("solve");
    assert_success("define f arg0|arg1\nsolve f 0 1");
}

#[test]
fn scripts_stop_at_the_first_error() {
    assert_failure("define f 1\ndefine f 0");
    assert_failure("solve nothing");
    assert_success("define and2 arg0&arg1\n\n// try it\nsolve and2 1 1");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.logic").expect("missing file");
    assert_success(&script);
}
