use std::fs;

use brio::{
    error::InterpretError,
    interpret,
    interpreter::{
        evaluator::environment::Environment,
        lexer::{Token, lex},
        parser::statement::parse_program,
        value::Value,
    },
};

fn eval(source: &str) -> Result<Option<Value>, InterpretError> {
    interpret(source, &Environment::new())
}

fn assert_value(source: &str, expected: &str) {
    match eval(source) {
        Ok(Some(value)) => assert_eq!(value.to_string(), expected, "source: {source}"),
        Ok(None) => panic!("Script produced no value: {source}"),
        Err(error) => panic!("Script failed: {error}\nsource: {source}"),
    }
}

fn assert_runtime_error(source: &str, expected: &str) {
    match eval(source) {
        Err(InterpretError::Runtime(error)) => {
            assert_eq!(error.to_string(), expected, "source: {source}");
        },
        Err(InterpretError::Parse(errors)) => {
            panic!("Script failed to parse: {errors:?}\nsource: {source}");
        },
        Ok(result) => panic!("Script produced {result:?} but was expected to fail: {source}"),
    }
}

fn parse_errors(source: &str) -> Vec<String> {
    match eval(source) {
        Err(InterpretError::Parse(errors)) => errors.iter().map(ToString::to_string).collect(),
        other => panic!("Expected parse errors, got {other:?}\nsource: {source}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_value("5", "5");
    assert_value("-5", "-5");
    assert_value("5 + 5 + 5 + 5 - 10", "10");
    assert_value("2 * 2 * 2 * 2 * 2", "32");
    assert_value("5 + 5 * 2", "15");
    assert_value("(5 + 5) * 2", "20");
    assert_value("50 / 2 * 2 + 10", "60");
    assert_value("3 * (3 * 3) + 10", "37");
    assert_value("-50 + 100 + -50", "0");
    assert_value("-7 / 2", "-3");
}

#[test]
fn integer_arithmetic_wraps_on_overflow() {
    assert_value("9223372036854775807 + 1", "-9223372036854775808");
}

#[test]
fn boolean_expressions() {
    assert_value("true", "true");
    assert_value("false", "false");
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 1", "false");
    assert_value("true == true", "true");
    assert_value("true != false", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("(1 > 2) == true", "false");
}

#[test]
fn bang_operator() {
    assert_value("!true", "false");
    assert_value("!false", "true");
    assert_value("!5", "false");
    assert_value("!!5", "true");
    // Zero is truthy; only false and null are falsy.
    assert_value("!0", "false");
}

#[test]
fn string_concatenation() {
    assert_value(r#""Hello" + " " + "World""#, "Hello World");
    assert_value(r#""" + "abc""#, "abc");
}

#[test]
fn string_equality_is_not_defined() {
    assert_runtime_error(r#""a" == "a""#, "unknown operator: STRING == STRING");
    assert_runtime_error(r#""a" < "b""#, "unknown operator: STRING < STRING");
}

#[test]
fn conditionals() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (false) { 10 }", "null");
    assert_value("if (1) { 10 }", "10");
    assert_value("if (0) { 10 } else { 20 }", "10");
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    assert_value("if (1 < 2) { 10 } else { 20 }", "10");
}

#[test]
fn return_statements() {
    assert_value("return 10;", "10");
    assert_value("return 10; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
    // A return bubbles through nested blocks still wrapped and only the
    // outermost level unwraps it.
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
}

#[test]
fn let_bindings() {
    assert_value("let a = 5; a;", "5");
    assert_value("let a = 5; let b = a + 10; b;", "15");
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    // Latest write wins.
    assert_value("let a = 5; let a = a + 1; a;", "6");
}

#[test]
fn let_produces_no_value() {
    assert_eq!(eval("let a = 5;").unwrap(), None);
    assert_eq!(eval("").unwrap(), None);
}

#[test]
fn semicolons_are_optional_between_statements() {
    assert_value("let a = 5 let b = 6 a + b", "11");
}

#[test]
fn functions_and_calls() {
    assert_value("let identity = fn(x) { x }; identity(5);", "5");
    assert_value("let identity = fn(x) { return x; }; identity(5);", "5");
    assert_value("let double = fn(x) { x * 2 }; double(5);", "10");
    assert_value("let add = fn(x, y) { x + y }; add(5, add(5, 5));", "15");
    assert_value("fn(x) { x }(5)", "5");
}

#[test]
fn function_body_without_result_yields_null() {
    assert_value("let noop = fn() { }; noop();", "null");
    assert_value("let bind = fn() { let x = 1; }; bind();", "null");
}

#[test]
fn closures() {
    assert_value("let adder = fn(x) { fn(y) { x + y } }; let addTwo = adder(2); addTwo(3);",
                 "5");
    assert_value("let adder = fn(x) { fn(y) { x + y } }; adder(2)(3);", "5");
}

#[test]
fn closures_are_lexical() {
    // The captured environment is the defining scope, not the call scope: a
    // binding made inside the caller must not leak into the closure.
    assert_value("let x = 1; \
                  let f = fn() { x }; \
                  let g = fn() { let x = 2; f() }; \
                  g();",
                 "1");
    // Bindings added to the defining scope after the closure was created are
    // visible through the shared environment chain.
    assert_value("let call = fn() { later }; let later = 42; call();", "42");
}

#[test]
fn recursion() {
    assert_value("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; \
                  fib(10);",
                 "55");
}

#[test]
fn higher_order_functions() {
    assert_value("let map = fn(arr, f) { \
                      let iter = fn(a, acc) { \
                          if (len(a) == 0) { acc } else { iter(rest(a), push(acc, f(first(a)))) } \
                      }; \
                      iter(arr, []) \
                  }; \
                  map([1, 2, 3], fn(x) { x * 2 });",
                 "[2, 4, 6]");
}

#[test]
fn array_literals_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("[]", "[]");
    assert_value("[1, 2, 3][0]", "1");
    assert_value("let a = [1, 2, 3]; a[0] + a[1] + a[2];", "6");
    assert_value("let a = [[1, 2], [3, 4]]; a[1][0];", "3");
}

#[test]
fn array_index_out_of_range_yields_null() {
    assert_value("[1, 2, 3][3]", "null");
    assert_value("[1, 2, 3][99]", "null");
}

#[test]
fn negative_array_index_counts_from_the_end() {
    assert_value("[1, 2, 3][-1]", "3");
    assert_value("[1, 2, 3][-3]", "1");
    assert_value("[1, 2, 3][-4]", "null");
}

#[test]
fn string_indexing() {
    assert_value(r#""hello"[0]"#, "h");
    assert_value(r#""hello"[1]"#, "e");
    assert_value(r#""hello"[-1]"#, "o");
    assert_value(r#""hello"[5]"#, "null");
    assert_value(r#""hello"[-6]"#, "null");
}

#[test]
fn builtin_len() {
    assert_value(r#"len("")"#, "0");
    assert_value(r#"len("four")"#, "4");
    assert_value("len([1, 2, 3])", "3");
    assert_value("len([])", "0");
    assert_runtime_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_runtime_error(r#"len("a", "b")"#, "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_first_and_rest() {
    assert_value("first([1, 2, 3])", "1");
    assert_value("first([])", "null");
    assert_value(r#"first("abc")"#, "a");
    assert_value(r#"first("")"#, "null");
    assert_value("rest([1, 2, 3])", "[2, 3]");
    assert_value("rest([1])", "[]");
    assert_value("rest([])", "null");
    assert_value(r#"rest("abc")"#, "bc");
    assert_value(r#"rest("")"#, "null");
    assert_runtime_error("first(1)", "argument to `first` not supported, got INTEGER");
    assert_runtime_error("rest(true)", "argument to `rest` not supported, got BOOLEAN");
}

#[test]
fn builtin_push_does_not_mutate() {
    assert_value("push([], 1)", "[1]");
    assert_value("push([1, 2], 3)", "[1, 2, 3]");
    assert_value("let a = [1]; let b = push(a, 2); a;", "[1]");
    assert_value("let a = [1]; let b = push(a, 2); b;", "[1, 2]");
    assert_runtime_error(r#"push("a", 1)"#, "argument to `push` not supported, got STRING");
}

#[test]
fn builtin_puts_returns_null() {
    assert_value(r#"puts("from the test suite")"#, "null");
    assert_value("puts(1, [2, 3])", "null");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_value("let len = fn(x) { 99 }; len([1, 2]);", "99");
}

#[test]
fn runtime_error_messages() {
    assert_runtime_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("-true", "unknown operator: -BOOLEAN");
    assert_runtime_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("if (10 > 1) { true + false; }",
                         "unknown operator: BOOLEAN + BOOLEAN");
    assert_runtime_error("foobar", "identifier not found: foobar");
    assert_runtime_error("5(1);", "not a function: INTEGER");
    assert_runtime_error("5[0]", "index operator not supported: INTEGER");
    assert_runtime_error("[1, 2][true]", "index operator not supported: ARRAY");
    assert_runtime_error("1 / 0", "division by zero");
}

#[test]
fn errors_abort_evaluation_inside_functions() {
    assert_runtime_error("let f = fn() { true + 1 }; f();",
                         "type mismatch: BOOLEAN + INTEGER");
    assert_runtime_error("let f = fn(x) { x }; f(1 / 0);", "division by zero");
}

#[test]
fn wrong_number_of_call_arguments() {
    assert_runtime_error("let f = fn(x, y) { x + y }; f(1);",
                         "wrong number of arguments. got=1, want=2");
    assert_runtime_error("let f = fn() { 1 }; f(1, 2);",
                         "wrong number of arguments. got=2, want=0");
}

#[test]
fn runtime_errors_print_with_the_error_prefix() {
    let error = eval("5 + true;").unwrap_err();
    assert_eq!(error.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn runtime_errors_carry_the_source_line() {
    let error = match eval("let x = 1;\nmissing") {
        Err(InterpretError::Runtime(error)) => error,
        other => panic!("Expected a runtime error, got {other:?}"),
    };

    assert_eq!(error.to_string(), "identifier not found: missing");
    assert_eq!(error.line(), 2);
}

#[test]
fn parse_errors_accumulate_across_statements() {
    let errors = parse_errors("let = 5; let y 10;");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0],
               "Error on line 1: Expected next token type to be 'IDENT', found '='.");
    assert_eq!(errors[1],
               "Error on line 1: Expected next token type to be '=', found 'INT'.");
}

#[test]
fn illegal_tokens_surface_as_parse_errors() {
    let errors = parse_errors("let x = @;");

    assert_eq!(errors,
               vec!["Error on line 1: no prefix parse function for 'ILLEGAL'.".to_string()]);
}

#[test]
fn integer_literal_overflow_is_a_parse_error() {
    let errors = parse_errors("9223372036854775808");

    assert_eq!(errors,
               vec!["Error on line 1: Could not parse '9223372036854775808' as a 64-bit \
                     integer."
                        .to_string()]);
}

#[test]
fn parse_errors_report_later_lines() {
    let errors = parse_errors("let x = 5;\nlet = 3;");

    assert_eq!(errors,
               vec!["Error on line 2: Expected next token type to be 'IDENT', found '='."
                        .to_string()]);
}

#[test]
fn operator_precedence_via_canonical_printer() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        let (program, errors) = parse_program(&lex(source));
        assert!(errors.is_empty(), "parse errors for {source}: {errors:?}");
        assert_eq!(program.to_string(), expected, "source: {source}");
    }
}

#[test]
fn canonical_printer_round_trips() {
    let sources = ["let x = 5;",
                   "let y = true;",
                   r#"let s = "hello world";"#,
                   "return 5 + 5;",
                   "if (a < b) { c } else { d }",
                   "if (x) { let y = 1; y }",
                   "fn(x, y) { return x + y; }(1, 2)",
                   "let apply = fn(f, x) { f(x) };",
                   "a + b * c + d / e - f",
                   r#"["a", 1 + 2, fn(x) { x }][0]"#,
                   "let empty = fn() { };"];

    for source in sources {
        let (first_pass, errors) = parse_program(&lex(source));
        assert!(errors.is_empty(), "parse errors for {source}: {errors:?}");

        let printed = first_pass.to_string();
        let (second_pass, errors) = parse_program(&lex(&printed));
        assert!(errors.is_empty(), "re-parse errors for {printed}: {errors:?}");

        assert_eq!(first_pass, second_pass,
                   "round trip changed the tree for {source} (printed as {printed})");
    }
}

#[test]
fn function_values_inspect_as_their_source() {
    assert_value("fn(x) { x + 2 }", "fn(x) { (x + 2) }");
    assert_value("fn() { }", "fn() { }");
    assert_value("let add = fn(a, b) { return a + b; }; add",
                 "fn(a, b) { return (a + b); }");
}

#[test]
fn token_literals_cover_the_source() {
    let source = "let add = fn(a, b) { if (a != b) { return [a, \"x\"][0] } else { a / 2 } };";

    let reconstructed: String =
        lex(source).iter()
                   .map(|(token, _)| match token {
                       Token::Int(literal) => literal.clone(),
                       Token::Ident(name) => name.clone(),
                       Token::Str(value) => format!("\"{value}\""),
                       Token::Illegal(text) => text.clone(),
                       other => other.to_string(),
                   })
                   .collect();

    let projected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(reconstructed, projected);
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/example.brio").expect("missing example script");

    match eval(&script) {
        Ok(Some(value)) => assert_eq!(value.to_string(), "55"),
        other => panic!("example script did not produce a value: {other:?}"),
    }
}
