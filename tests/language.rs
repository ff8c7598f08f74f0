use std::fs;

use monkey::{
    evaluate,
    interpreter::{environment::Environment, value::core::Value},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

const EXPECT_PREFIX: &str = "// expect: ";

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "mk")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = content.lines()
                              .next()
                              .and_then(|line| line.strip_prefix(EXPECT_PREFIX))
                              .unwrap_or_else(|| {
                                  panic!("{path:?} does not start with `{EXPECT_PREFIX}`")
                              });

        count += 1;
        let value = match evaluate(&content, &Environment::new()) {
            Ok(value) => value,
            Err(e) => panic!("Demo {path:?} did not parse:\n{e}"),
        };
        let actual = value.map_or_else(|| "nothing".to_string(), |value| value.inspect());

        assert_eq!(actual, expected.trim(), "demo {path:?}");
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn eval(src: &str) -> Value {
    match evaluate(src, &Environment::new()) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Script yielded nothing: {src}"),
        Err(e) => panic!("Script failed to parse: {src}\n{e}"),
    }
}

fn assert_value(src: &str, expected: &str) {
    let value = eval(src);
    assert!(!value.is_error(), "Script failed: {src}\n{value}");
    assert_eq!(value.inspect(), expected, "script: {src}");
}

fn assert_error(src: &str, message: &str) {
    match eval(src) {
        Value::Error(actual) => assert_eq!(actual, message, "script: {src}"),
        other => panic!("Script succeeded with {other} but was expected to fail: {src}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_value("5 + 5 + 5 + 5 - 10", "10");
    assert_value("2 * 2 * 2 * 2 * 2", "32");
    assert_value("-50 + 100 + -50", "0");
    assert_value("20 + 2 * -10", "0");
    assert_value("3 * (3 * 3) + 10", "37");
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
    assert_value("7 / 2", "3");
    assert_value("-7 / 2", "-3");
    assert_value("-7 % 3", "-1");
    assert_value("2 ** 10", "1024");
    assert_value("2 ** 3 ** 2", "64");
}

#[test]
fn negative_exponents_produce_floats() {
    assert_value("2 ** -1", "0.5");
    assert_eq!(eval("4 ** -2"), Value::Float(0.0625));
}

#[test]
fn integer_errors() {
    assert_error("1 / 0", "division by zero");
    assert_error("5 % 0", "division by zero");
    assert_error("9223372036854775807 + 1", "integer overflow: 9223372036854775807 + 1");
    assert_error("3037000500 * 3037000500", "integer overflow: 3037000500 * 3037000500");
    assert_error("2 ** 64", "integer overflow: 2 ** 64");
    assert_error("let m = -9223372036854775807 - 1; -m",
                 "integer overflow: --9223372036854775808");
}

#[test]
fn bitwise_operators_and_shifts() {
    assert_value("6 & 3", "2");
    assert_value("6 | 3", "7");
    assert_value("6 ^ 3", "5");
    assert_value("~5", "-6");
    assert_value("1 << 10", "1024");
    assert_value("let n = -16; n >> 2", "-4");
    assert_value("let n = -1; n >>> 60", "15");
    assert_error("1 << 64", "invalid shift amount: 64");
    assert_error("let n = -1; 1 >> n", "invalid shift amount: -1");
}

#[test]
fn float_and_mixed_arithmetic() {
    assert_value("1.5 + 1.5", "3");
    assert_value("3 / 2.0", "1.5");
    assert_value("0.5 * 4", "2");
    assert_value("2.5 > 2", "true");
    assert_value("1.0 == 1", "true");
    assert_value("-2.5", "-2.5");
    assert_value("1.0 / 0", "inf");
    assert_error("1.5 & 2.5", "unknown operator: FLOAT & FLOAT");
    assert_error("1.5 & 1", "type mismatch: FLOAT & INTEGER");
}

#[test]
fn comparisons_and_booleans() {
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 <= 1", "true");
    assert_value("2 >= 3", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 1", "false");
    assert_value("true == true", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("(1 > 2) != false", "false");
}

#[test]
fn bang_and_truthiness() {
    assert_value("!true", "false");
    assert_value("!false", "true");
    assert_value("!5", "false");
    assert_value("!!5", "true");
    assert_value("!0", "false");
    assert_value("!\"\"", "false");
    assert_value("![]", "false");
    assert_value("!if (false) { 1 }", "true");
}

#[test]
fn logical_operators_combine_truthiness() {
    assert_value("true and false", "false");
    assert_value("true && 1", "true");
    assert_value("false or 0", "true");
    assert_value("false || if (false) { 1 }", "false");
    assert_error("false and missing", "identifier not found: missing");
}

#[test]
fn strings() {
    assert_value("\"Hello\" + \" \" + \"World!\"", "Hello World!");
    assert_value("'single' + \"double\"", "singledouble");
    assert_value("\"abc\" < \"abd\"", "true");
    assert_value("\"b\" >= \"a\"", "true");
    assert_value("\"x\" == \"x\"", "true");
    assert_value("\"x\" != \"y\"", "true");
    assert_error("\"a\" - \"b\"", "unknown operator: STRING - STRING");
    assert_error("\"a\" + 1", "type mismatch: STRING + INTEGER");
}

#[test]
fn type_errors() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("~1.5", "unknown operator: ~FLOAT");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error("5(1)", "not a function: INTEGER");
}

#[test]
fn errors_stop_the_program() {
    let env = Environment::new();

    let value = evaluate("let a = 1 / 0; let b = 2; b", &env).unwrap();

    assert_eq!(value, Some(Value::Error("division by zero".to_string())));
    assert_eq!(env.get("b"), None);
}

#[test]
fn if_else_expressions() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (false) { 10 }", "null");
    assert_value("if (1) { 10 }", "10");
    assert_value("if (1 < 2) { 10 } else { 20 }", "10");
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    assert_value("if (1 > 2) { 10 } else if (2 > 1) { 15 } else { 20 }", "15");
    assert_value("if (true) { }", "null");
}

#[test]
fn return_unwinds_nested_blocks() {
    assert_value("return 10;", "10");
    assert_value("return 10; 9;", "10");
    assert_value("return 2 * 5; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_value("let f = fn(x) { return x; x + 10; }; f(10);", "10");
    assert_value("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
                 "20");
}

#[test]
fn let_statements() {
    assert_value("let a = 5; a;", "5");
    assert_value("let a = 5 * 5; a;", "25");
    assert_value("let a = 5; let b = a; b;", "5");
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    assert_value("let my-var = 3; my-var * 2", "6");

    assert_eq!(evaluate("let a = 5;", &Environment::new()).unwrap(), None);
    assert_eq!(evaluate("// only a comment", &Environment::new()).unwrap(), None);
}

#[test]
fn bindings_persist_across_inputs() {
    let env = Environment::new();

    evaluate("let counter = 1;", &env).unwrap();
    evaluate("let counter = counter + 1;", &env).unwrap();

    assert_eq!(evaluate("counter", &env).unwrap(), Some(Value::Integer(2)));
}

#[test]
fn function_values() {
    assert_value("fn(x) { x + 2; };", "fn(x) {\n(x + 2)\n}");
    assert_value("function(a, b) { a }", "fn(a, b) {\na\n}");
    assert_value("len", "builtin function");
}

#[test]
fn function_application() {
    assert_value("let identity = fn(x) { x; }; identity(5);", "5");
    assert_value("let identity = fn(x) { return x; }; identity(5);", "5");
    assert_value("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5, 5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_value("fn(x) { x; }(5)", "5");
    assert_value("let noop = fn() { }; noop()", "null");
    assert_value("let only_let = fn() { let x = 1; }; only_let()", "null");
}

#[test]
fn argument_count_is_not_checked_for_user_functions() {
    assert_value("let first_of = fn(a, b) { a }; first_of(1)", "1");
    assert_value("let first_of = fn(a) { a }; first_of(1, 2, 3)", "1");
    assert_error("let second_of = fn(a, b) { b }; second_of(1)", "identifier not found: b");
}

#[test]
fn closures_capture_their_environment() {
    assert_value("let newAdder = fn(x) { fn(y) { x + y }; };
                  let addTwo = newAdder(2);
                  addTwo(3);",
                 "5");
    assert_value("let x = 1;
                  let f = fn() { let x = 2; x };
                  f() + x",
                 "3");
    assert_value("let make = fn() { let state = {\"n\": 0};
                                    fn() { let state[\"n\"] = state[\"n\"] + 1; state[\"n\"] } };
                  let next = make();
                  next(); next(); next()",
                 "3");
}

#[test]
fn closures_see_later_bindings_of_their_scope() {
    assert_value("let f = fn() { later }; let later = 7; f()", "7");
}

#[test]
fn recursion() {
    assert_value("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                  fib(15)",
                 "610");
    assert_value("let fact = fn(n) { if (n == 0) { return 1; } n * fact(n - 1) }; fact(20)",
                 "2432902008176640000");
}

#[test]
fn higher_order_functions() {
    let src = "let map = fn(arr, f) {
                   let iter = fn(arr, acc) {
                       if (len(arr) == 0) { acc } else { iter(rest(arr), push(acc, f(first(arr)))) }
                   };
                   iter(arr, [])
               };
               map([1, 2, 3], fn(x) { x * x })";

    assert_value(src, "[1, 4, 9]");
}

#[test]
fn arrays() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("[]", "[]");
    assert_value("[1, \"two\", [3]]", "[1, two, [3]]");
    assert_value("[1, 2] + [3]", "[1, 2, 3]");
    assert_value("let a = [1]; let b = a + [2]; a", "[1]");
}

#[test]
fn array_equality_is_identity() {
    assert_value("[1] == [1]", "false");
    assert_value("let a = [1]; let b = a; a == b", "true");
    assert_value("let a = [1]; a != a", "false");
    assert_value("{} == {}", "false");
}

#[test]
fn index_expressions() {
    assert_value("[1, 2, 3][0]", "1");
    assert_value("[1, 2, 3][1 + 1]", "3");
    assert_value("let i = 0; [1][i];", "1");
    assert_value("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6");
    assert_value("[1, 2, 3][3]", "null");
    assert_value("[1, 2, 3][-1]", "null");
    assert_value("\"hello\"[1]", "e");
    assert_value("\"hello\"[5]", "null");
    assert_error("[1, 2][\"a\"]", "invalid index: ARRAY[STRING]");
    assert_error("\"ab\"[0.5]", "invalid index: STRING[FLOAT]");
    assert_error("1[0]", "index operator not supported: INTEGER");
}

#[test]
fn slices() {
    assert_value("[1, 2, 3, 4][1:3]", "[2, 3]");
    assert_value("[1, 2, 3, 4][:2]", "[1, 2]");
    assert_value("[1, 2, 3, 4][2:]", "[3, 4]");
    assert_value("[1, 2, 3, 4][:]", "[1, 2, 3, 4]");
    assert_value("[1, 2, 3][5:]", "[]");
    assert_value("[1, 2, 3][2:1]", "[]");
    assert_value("let n = -5; [1, 2, 3][n:2]", "[1, 2]");
    assert_value("\"hello\"[1:4]", "ell");
    assert_value("\"héllo\"[:2]", "hé");
    assert_value("let a = [1, 2]; let b = a[:]; let b[0] = 9; a", "[1, 2]");
    assert_error("[1, 2][\"a\":]", "invalid index: ARRAY[STRING]");
    assert_error("{}[1:2]", "index operator not supported: HASH");
}

#[test]
fn index_assignment_mutates_shared_arrays() {
    assert_value("let a = [1, 2, 3]; let a[0] = 9; a", "[9, 2, 3]");
    assert_value("let a = [1, 2, 3]; let b = a; let a[1] = 0; b", "[1, 0, 3]");
    assert_value("let a = [[1]]; let inner = a[0]; let inner[0] = 5; a", "[[5]]");
    assert_error("let a = [1]; let a[1] = 2;", "index out of range: 1 (length 1)");
    assert_error("let a = [1]; let a[-1] = 2;", "index out of range: -1 (length 1)");
    assert_error("let a = [1]; let a[true] = 2;", "invalid index: ARRAY[BOOLEAN]");
    assert_error("let s = \"abc\"; let s[0] = \"x\";", "index assignment not supported: STRING");
    assert_error("let missing[0] = 1;", "identifier not found: missing");
}

#[test]
fn hashes() {
    assert_value("{\"one\": 10 - 9}[\"one\"]", "1");
    assert_value("let two = \"two\"; {two: 2}[\"two\"]", "2");
    assert_value("{4: 4}[4]", "4");
    assert_value("{true: 5}[true]", "5");
    assert_value("{1.5: \"x\"}[1.5]", "x");
    assert_value("{\"foo\": 5}[\"bar\"]", "null");
    assert_value("{}[\"foo\"]", "null");
    assert_value("{1: \"a\", 1: \"b\"}[1]", "b");
    assert_value("{1: \"int\", true: \"bool\", \"1\": \"str\"}[true]", "bool");
    assert_value("{1: [2, 3]}", "{1: [2, 3]}");
    assert_error("{\"name\": \"Monkey\"}[fn(x) { x }];", "unusable as hash key: FUNCTION");
    assert_error("{[1]: 2}", "unusable as hash key: ARRAY");
}

#[test]
fn index_assignment_on_hashes() {
    assert_value("let h = {}; let h[\"x\"] = 1; h[\"x\"]", "1");
    assert_value("let h = {\"x\": 1}; let alias = h; let h[\"x\"] = 2; alias[\"x\"]", "2");
    assert_error("let h = {}; let h[[]] = 1;", "unusable as hash key: ARRAY");
}

#[test]
fn while_loops() {
    assert_value("let i = 0; let sum = 0; while (i < 5) { let sum = sum + i; i++ } sum",
                 "10");
    assert_value("while (false) { 1 }", "null");
    assert_value("let i = 0; while (i < 3) { let seen = i; i++; } seen", "2");
}

#[test]
fn for_loops() {
    assert_value("let s = 0; for (let i = 0; i < 4; i++) { let s = s + i; } s", "6");
    assert_value("for (let i = 0; i < 3; i++) { i }", "null");
    assert_value("for (let i = 0; i < 3; ++i) { } i", "3");
}

#[test]
fn return_escapes_loops() {
    assert_value("let f = fn() { let i = 0; while (true) { if (i == 3) { return i; } i++; } };
                  f()",
                 "3");
    assert_value("let find = fn(arr, x) {
                      for (let i = 0; i < len(arr); i++) { if (arr[i] == x) { return i; } };
                      -1
                  };
                  [find([5, 6, 7], 7), find([5, 6, 7], 8)]",
                 "[2, -1]");
}

#[test]
fn increment_and_decrement() {
    assert_value("let x = 1; let y = x++; [x, y]", "[2, 1]");
    assert_value("let x = 1; let y = ++x; [x, y]", "[2, 2]");
    assert_value("let x = 1; let y = x--; [x, y]", "[0, 1]");
    assert_value("let x = 1; let y = --x; [x, y]", "[0, 0]");
    assert_value("let f = 1.5; f++; f", "2.5");
    assert_error("5++", "cannot increment or decrement 5");
    assert_error("let s = \"a\"; s++", "cannot increment or decrement s (STRING)");
    assert_error("nothing++", "identifier not found: nothing");
    assert_error("let x = 9223372036854775807; x++",
                 "cannot increment or decrement x (integer overflow)");
    assert_error("let x = -9223372036854775807 - 1; --x",
                 "cannot increment or decrement x (integer overflow)");
}

#[test]
fn increment_inside_a_function_rebinds_locally() {
    assert_value("let n = 1; let bump = fn() { n++; n }; [bump(), n]", "[2, 1]");
}

#[test]
fn ranges() {
    assert_value("1..5", "[1, 2, 3, 4, 5]");
    assert_value("1...5", "[1, 2, 3, 4]");
    assert_value("5..1", "[]");
    assert_value("3...3", "[]");
    assert_value("let n = 3; 0..n - 1", "[0, 1, 2]");
    assert_value("len(1..100)", "100");
    assert_error("1..\"a\"", "range bounds must be INTEGER, got INTEGER..STRING");
    assert_error("1.5..2", "range bounds must be INTEGER, got FLOAT..INTEGER");
}

#[test]
fn enclosed_scopes_keep_their_own_bindings() {
    let global = Environment::new();
    evaluate("let x = 1;", &global).unwrap_or_else(|e| panic!("{e}"));

    let local = Environment::new_enclosed(&global);
    evaluate("let y = x + 1;", &local).unwrap_or_else(|e| panic!("{e}"));

    assert!(global.contains_local("x"));
    assert!(!global.contains_local("y"));
    assert!(local.contains_local("y"));
    assert!(!local.contains_local("x"));
    assert_eq!(local.get("x"), Some(Value::Integer(1)));
    assert_eq!(global.get("y"), None);
}

#[test]
fn oversized_ranges_are_rejected() {
    assert_error("0...9223372036854775807",
                 "range 0 to 9223372036854775807 exceeds 10000000 elements");
    assert_error("0..10000000", "range 0 to 10000000 exceeds 10000000 elements");
    assert_error("let lo = -9223372036854775807 - 1; lo..9223372036854775807",
                 "range -9223372036854775808 to 9223372036854775807 exceeds 10000000 elements");
    assert_value("9223372036854775807..-9223372036854775807", "[]");
    assert_value("len(0...100000)", "100000");
}

#[test]
fn builtins_are_values() {
    assert_value("let l = len; l(\"four\")", "4");
    assert_value("let len = fn(x) { 0 }; len(\"four\")", "0");
    assert_value("len == len", "true");
    assert_error("len(1)", "argument to len not supported, got INTEGER");
}
