use crate::compilation::{check, evaluate};
use crate::Error;

fn assert_evals(expected: i64, source: &str) {
    match evaluate(source) {
        Ok(result) => assert_eq!(result, expected, "source: {source:?}"),
        Err(err) => panic!("failed to evaluate {source:?}: {err}"),
    }
}

fn assert_error_message(source: &str, message: &str) {
    match evaluate(source) {
        Ok(result) => panic!("unexpectedly evaluated {source:?} to {result}"),
        Err(err) => assert_eq!(err.to_string(), message, "source: {source:?}"),
    }
}

#[test]
fn single_number() {
    assert_evals(1, "1");
}

#[test]
fn negated_number() {
    assert_evals(-1, "-1");
}

#[test]
fn simple_expression() {
    assert_evals(4, "(2+2)");
}

#[test]
fn complex_expression() {
    assert_evals(3, "((((1+2)/3)*((4%5)>(6=7)))*3)");
}

#[test]
fn constant_function() {
    assert_evals(1, "f(x)={1}\nf(10)");
}

#[test]
fn sum_function() {
    assert_evals(3, "f(x,y)={(x+y)}\nf(1,2)");
}

#[test]
fn if_expression() {
    assert_evals(17, "[0]?{7}:{17}");
}

#[test]
fn recursion() {
    assert_evals(15, "f(x)={[(x>1)]?{(f((x-1))+x)}:{x}}\nf(5)");
}

#[test]
fn few_functions() {
    assert_evals(
        19,
        "f(x,y,z)={(g(x,y)+z)}\ng(x,y)={(z(x)*y)}\nz(x)={(x/3)}\nf(6,7,5)",
    );
}

#[test]
fn division_by_zero() {
    assert_error_message("(1/0)", "RUNTIME ERROR 1/0:0");
}

#[test]
fn mod_by_zero() {
    assert_error_message("(1%0)", "RUNTIME ERROR 1%0:0");
}

#[test]
fn unknown_function() {
    assert_error_message("f(1)", "FUNCTION NOT FOUND f:0");
}

#[test]
fn unknown_function_when_another_exists() {
    assert_error_message("f(x)={1}\ng(1)", "FUNCTION NOT FOUND g:1");
}

#[test]
fn wrong_argument_count() {
    assert_error_message("f(x,y)={x}\nf(1)", "ARGUMENT NUMBER MISMATCH f:1");
}

#[test]
fn duplicate_function_name() {
    assert_error_message("f(x)={1}\nf(z)={2}\n1", "DUPLICATE FUNCTION NAME f:0");
}

#[test]
fn duplicate_parameter_name() {
    assert_error_message("f(x,x)={1}\n1", "DUPLICATE PARAMETER NAME x:0");
}

#[test]
fn unknown_parameter() {
    assert_error_message("f(x)={z}\n1", "PARAMETER NOT FOUND z:0");
}

#[test]
fn syntax_error_carries_tag_and_line() {
    assert_error_message(
        "2^2",
        "SYNTAX ERROR: unexpected character '^':0",
    );
}

#[test]
fn check_stops_before_evaluation() {
    // Runtime failures are invisible to `check`.
    assert!(check("(1/0)").is_ok());
    assert!(check("f(x,y)={x}\nf(1)").is_err());
}

#[test]
fn check_returns_resolved_signatures() {
    let (program, symbols) = check("f(x)={1}\ng(x,y)={2}\n1").expect("check failed");
    assert_eq!(program.funcs.len(), 2);
    assert_eq!(symbols.len(), 2);
}

#[test]
fn evaluation_is_idempotent() {
    let source = "f(x)={[(x>1)]?{(f((x-1))+x)}:{x}}\nf(5)";
    let first = evaluate(source).expect("evaluation failed");
    let second = evaluate(source).expect("evaluation failed");
    assert_eq!(first, second);
}

#[test]
fn io_errors_are_wrapped() {
    let err = std::fs::read_to_string("no-such-file.skiff")
        .map_err(Error::from)
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
