use monkey::{
    exit_code_of,
    interpreter::{
        environment::{Environment, Output},
        value::core::Value,
    },
    repl::{CONTINUATION_PROMPT, PROMPT, Reply, Session, open_brackets},
    run_source,
};
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::new(Environment::new())
}

#[test]
fn bindings_persist_between_lines() {
    let mut session = session();

    assert_eq!(session.feed("let x = 5;"), Reply::Silent);
    assert_eq!(session.feed("x * 2"), Reply::Value("10".to_string()));
    assert_eq!(session.feed("let x = x + 1; x"), Reply::Value("6".to_string()));
}

#[test]
fn open_brackets_ask_for_more_input() {
    let mut session = session();

    assert_eq!(session.prompt(), PROMPT);
    assert_eq!(session.feed("let f = fn(x) {"), Reply::Continue);
    assert_eq!(session.prompt(), CONTINUATION_PROMPT);
    assert_eq!(session.feed("  x * x"), Reply::Continue);
    assert_eq!(session.feed("}"), Reply::Silent);
    assert_eq!(session.prompt(), PROMPT);
    assert_eq!(session.feed("f(9)"), Reply::Value("81".to_string()));
}

#[test]
fn clearing_drops_pending_input() {
    let mut session = session();

    assert_eq!(session.feed("[1, 2,"), Reply::Continue);
    session.clear();

    assert_eq!(session.prompt(), PROMPT);
    assert_eq!(session.feed("3"), Reply::Value("3".to_string()));
}

#[test]
fn blank_lines_are_silent() {
    let mut session = session();

    assert_eq!(session.feed(""), Reply::Silent);
    assert_eq!(session.feed("   "), Reply::Silent);
}

#[test]
fn syntax_errors_are_reported_and_not_evaluated() {
    let mut session = session();

    let Reply::Errors(errors) = session.feed("let = 1; let y = 2;") else {
        panic!("expected syntax errors");
    };
    assert_eq!(errors[0], "<input>:1:5: expected next token to be IDENT, got = instead");

    assert_eq!(session.feed("y"),
               Reply::Value("ERROR: identifier not found: y".to_string()));
}

#[test]
fn runtime_errors_are_echoed() {
    let mut session = session();

    assert_eq!(session.feed("1 / 0"), Reply::Value("ERROR: division by zero".to_string()));
}

#[test]
fn exit_code_follows_the_last_value() {
    let mut session = session();
    assert_eq!(session.exit_code(), 0);

    session.feed("40 + 2");
    assert_eq!(session.exit_code(), 42);

    session.feed("\"done\"");
    assert_eq!(session.exit_code(), 0);

    session.feed("7");
    session.feed("let z = 1;");
    assert_eq!(session.exit_code(), 0);
}

#[test]
fn bracket_counting_ignores_strings_and_comments() {
    assert_eq!(open_brackets(""), 0);
    assert_eq!(open_brackets("fn(x) { [x"), 2);
    assert_eq!(open_brackets("\"(((\""), 0);
    assert_eq!(open_brackets("1 // {"), 0);
    assert_eq!(open_brackets("}"), -1);
}

#[test]
fn exit_codes_wrap_like_a_shell() {
    assert_eq!(exit_code_of(Some(&Value::Integer(0))), 0);
    assert_eq!(exit_code_of(Some(&Value::Integer(255))), 255);
    assert_eq!(exit_code_of(Some(&Value::Integer(256))), 0);
    assert_eq!(exit_code_of(Some(&Value::Integer(-2))), 254);
    assert_eq!(exit_code_of(Some(&Value::Float(3.0))), 0);
    assert_eq!(exit_code_of(Some(&Value::Error("boom".to_string()))), 0);
}

#[test]
fn run_source_echoes_the_final_value() {
    let output = Output::captured();
    let env = Environment::with_output(output.clone());

    let outcome = run_source("let a = [1, 2]; push(a, 3)", "list.mk", &env, true);

    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.errors.is_empty());
    assert_eq!(output.contents(), "[1, 2, 3]\n");
}

#[test]
fn run_source_can_stay_quiet() {
    let output = Output::captured();
    let env = Environment::with_output(output.clone());

    let outcome = run_source("puts(\"side effect\"); 3", "quiet.mk", &env, false);

    assert_eq!(outcome.value, Some(Value::Integer(3)));
    assert_eq!(outcome.exit_code, 3);
    assert_eq!(output.contents(), "side effect\n");
}

#[test]
fn run_source_does_not_echo_null() {
    let output = Output::captured();
    let env = Environment::with_output(output.clone());

    run_source("puts(1)", "null.mk", &env, true);

    assert_eq!(output.contents(), "1\n");
}

#[test]
fn run_source_reports_syntax_errors_against_the_source_name() {
    let output = Output::captured();
    let env = Environment::with_output(output.clone());

    let outcome = run_source("puts(1);\nlet = 2;", "broken.mk", &env, true);

    assert_eq!(outcome.exit_code, 1);
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.errors[0],
               "broken.mk:2:5: expected next token to be IDENT, got = instead");
    assert_eq!(output.contents(), "");
}

#[test]
fn run_source_keeps_runtime_errors_as_values() {
    let env = Environment::with_output(Output::captured());

    let outcome = run_source("missing + 1", "error.mk", &env, true);

    assert_eq!(outcome.value,
               Some(Value::Error("identifier not found: missing".to_string())));
    assert_eq!(outcome.exit_code, 0);
}
