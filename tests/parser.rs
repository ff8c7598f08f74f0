use monkey::{
    ast::{Expression, InfixOperator, Node, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        parser::core::Parser,
        token::{Position, TokenKind},
    },
};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(),
            "unexpected syntax errors for {source:?}: {:?}",
            parser.errors());
    program
}

fn errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors()
}

fn assert_renders(source: &str, expected: &str) {
    assert_eq!(parse(source).to_string(), expected, "source: {source}");
}

#[test]
fn let_and_return_statements() {
    let program = parse("let x = 5; let y = true; return x;");

    assert_eq!(program.statements.len(), 3);
    assert!(matches!(&program.statements[0], Statement::Let(statement) if statement.name.name == "x"));
    assert!(matches!(&program.statements[2], Statement::Return { .. }));
    assert_eq!(program.to_string(), "let x = 5;let y = true;return x;");
}

#[test]
fn index_assignment_statement() {
    assert_renders("let a[0] = 1;", "let a[0] = 1;");
    assert_renders("let h[\"k\" + 1] = 2", "let h[(k + 1)] = 2;");
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
                 ("2 * 3 ** 2", "(2 * (3 ** 2))"),
                 ("a < b and b < c or d", "(((a < b) and (b < c)) or d)"),
                 ("a == b && c != d", "((a == b) and (c != d))"),
                 ("1 + 2 & 3", "(1 + (2 & 3))"),
                 ("x << 2 + 1", "((x << 2) + 1)"),
                 ("~a + 1", "((~a) + 1)")];

    for (source, expected) in cases {
        assert_renders(source, expected);
    }
}

#[test]
fn ranges_bind_between_comparison_and_sum() {
    assert_renders("1..n + 1", "(1..(n + 1))");
    assert_renders("0...len(a)", "(0...len(a))");
    assert_renders("1..3 == x", "((1..3) == x)");
}

#[test]
fn increment_and_decrement() {
    assert_renders("i++", "(i++)");
    assert_renders("--i", "(--i)");
    assert_renders("i++ + 1", "((i++) + 1)");
}

#[test]
fn if_else_and_else_if() {
    assert_renders("if (x < y) { x }", "if(x < y) x");
    assert_renders("if (x < y) { x } else { y }", "if(x < y) xelse y");
    assert_renders("if (a < b) { 1 } else if (b < c) { 2 } else { 3 }",
                   "if(a < b) 1else if(b < c) 2else 3");
}

#[test]
fn function_literals() {
    assert_renders("fn(x, y) { x + y; }", "fn(x, y) (x + y)");
    assert_renders("function() { 1 }", "fn() 1");

    let program = parse("fn(a, b, c) {}");
    let Statement::Expression { expression: Expression::Function { parameters, body, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a function literal");
    };
    assert_eq!(parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
               vec!["a", "b", "c"]);
    assert!(body.statements.is_empty());
}

#[test]
fn call_expressions() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    let Statement::Expression { expression: Expression::Call { function, arguments, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a call");
    };

    assert_eq!(function.to_string(), "add");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[1].to_string(), "(2 * 3)");
}

#[test]
fn index_and_slice_shapes() {
    assert_renders("a[1]", "(a[1])");
    assert_renders("a[1:2]", "(a[1:2])");
    assert_renders("a[:2]", "(a[:2])");
    assert_renders("a[1:]", "(a[1:])");
    assert_renders("a[:]", "(a[:])");
}

#[test]
fn hash_literals() {
    assert_renders("{}", "{}");
    assert_renders("{\"one\": 1, \"two\": 2,}", "{one:1, two:2}");
    assert_renders("{1: 2 + 3, true: 4}", "{1:(2 + 3), true:4}");

    let program = parse("{\"a\": 1, \"b\": 2}");
    let Statement::Expression { expression: Expression::Hash { pairs, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a hash literal");
    };
    assert_eq!(pairs.len(), 2);
}

#[test]
fn loops() {
    assert_renders("while (i < 3) { i++ }", "while ((i < 3)) (i++)");
    assert_renders("for (let i = 0; i < 3; i++) { puts(i) }",
                   "for (let i = 0; (i < 3); (i++)) puts(i)");
    assert_renders("for (let i = 0; i < n; let i = i + 1) { }",
                   "for (let i = 0; (i < n); let i = (i + 1)) ");
}

#[test]
fn token_literals() {
    let cases = [("let x = 1;", "let"),
                 ("return x;", "return"),
                 ("# note", "# note"),
                 ("foo", "foo"),
                 ("5", "5"),
                 ("2.5", "2.5"),
                 ("true", "true"),
                 ("\"s\"", "s"),
                 ("-a", "-"),
                 ("a + b", "+"),
                 ("x..y", ".."),
                 ("x...y", "..."),
                 ("f(x)", "("),
                 ("a[0]", "["),
                 ("[1]", "["),
                 ("{}", "{"),
                 ("if (x) { 1 }", "if"),
                 ("fn() {}", "fn"),
                 ("while (x) {}", "while"),
                 ("for (let i = 0; i < 1; i++) {}", "for"),
                 ("x++", "++"),
                 ("--x", "--")];

    for (source, expected) in cases {
        let program = parse(source);
        assert_eq!(program.statements[0].token_literal(), expected, "source: {source}");
        assert_eq!(program.token_literal(), expected, "source: {source}");
    }

    assert_eq!(parse("").token_literal(), "");
}

#[test]
fn comments_become_statements() {
    let program = parse("# leading\nlet x = 1; // trailing");

    assert_eq!(program.statements.len(), 3);
    assert!(matches!(&program.statements[0], Statement::Comment { text, .. } if text == "# leading"));
}

#[test]
fn infix_operator_is_recorded() {
    let program = parse("a >>> 2");
    let Statement::Expression { expression: Expression::Infix { operator, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected an infix expression");
    };

    assert_eq!(*operator, InfixOperator::UnsignedShiftRight);
}

#[test]
fn missing_tokens_are_reported_with_positions() {
    assert_eq!(errors("let = 5;")[0],
               "<input>:1:5: expected next token to be IDENT, got = instead");
    assert_eq!(errors("let x 5;"),
               vec!["<input>:1:7: expected next token to be =, got INT instead"]);
}

#[test]
fn structured_errors_carry_kinds_and_positions() {
    let mut parser = Parser::new(Lexer::new("let = 5;\nlet x = ;"));
    parser.parse_program();

    let errors = parser.parse_errors();
    assert_eq!(errors[0],
               ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                             found:    TokenKind::Assign,
                                             position: Position::new(4, 1, 5), });
    assert!(errors.iter().any(|error| {
                              matches!(error,
                                       ParseError::NoPrefixParseFn { kind: TokenKind::Semicolon,
                                                                     position }
                                       if position.line == 2)
                          }),
            "{errors:?}");
}

#[test]
fn tokens_without_prefix_handlers() {
    let errors = errors("let x = ;");

    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with("no prefix parse function for ; found"),
            "{errors:?}");
}

#[test]
fn illegal_characters_surface_as_syntax_errors() {
    let errors = errors("@");

    assert_eq!(errors, vec!["<input>:1:1: no prefix parse function for ILLEGAL found"]);
}

#[test]
fn oversized_integers_are_rejected() {
    let errors = errors("99999999999999999999");

    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("could not parse \"99999999999999999999\" as integer"));
}

#[test]
fn unclosed_block_reports_eof() {
    let errors = errors("if (x) { 1");

    assert!(errors.iter().any(|e| e.contains("expected next token to be }, got EOF instead")),
            "{errors:?}");
}

#[test]
fn parsing_continues_after_an_error() {
    let mut parser = Parser::new(Lexer::new("let = 1; let y = 2;"));
    let program = parser.parse_program();

    assert!(!parser.errors().is_empty());
    assert!(program.statements
                   .iter()
                   .any(|s| matches!(s, Statement::Let(l) if l.name.name == "y")));
}

#[test]
fn source_names_prefix_errors() {
    let mut parser = Parser::with_source_name(Lexer::new("let"), "script.mk");
    parser.parse_program();

    assert_eq!(parser.errors(),
               vec!["script.mk:1:4: expected next token to be IDENT, got EOF instead"]);
}
