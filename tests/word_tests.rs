// Parameterized tests of the built-in arithmetic, stack and logic words.

use forthwith::{ForthInterpreter, InterpreterStack};
use test_case::test_case;

fn eval_and_stack(source: &str, init_stack: &[i64]) -> Vec<i64> {
    let mut interpreter = ForthInterpreter::new(Vec::new(), "");

    for &value in init_stack {
        interpreter.push(value);
    }

    interpreter.evaluate(source).unwrap();

    let output = String::from_utf8_lossy(interpreter.output_ref()).to_string();
    assert!(output.is_empty(), "unexpected output: {:?}", output);

    interpreter.stack().items().to_vec()
}

#[test_case("0", &[], &[0]; "zero")]
#[test_case("42", &[], &[42]; "number")]
#[test_case("-7", &[], &[-7]; "negative number")]
#[test_case("+7", &[], &[7]; "explicitly positive number")]
#[test_case("1 2 3", &[], &[1, 2, 3]; "several numbers")]
#[test_case("+", &[2, 2], &[4]; "simple add")]
#[test_case("-", &[5, 2], &[3]; "simple sub")]
#[test_case("-", &[2, 5], &[-3]; "sub goes negative")]
#[test_case("*", &[3, 4], &[12]; "simple mul")]
#[test_case("/", &[12, 3], &[4]; "simple div")]
#[test_case("/", &[7, 2], &[3]; "div truncates")]
#[test_case("/", &[-7, 2], &[-3]; "div truncates toward zero")]
#[test_case("mod", &[13, 5], &[3]; "simple mod")]
#[test_case("mod", &[-13, 5], &[-3]; "mod takes sign of dividend")]
#[test_case("9223372036854775807 1 +", &[], &[i64::MIN]; "add wraps")]
#[test_case("-9223372036854775808 -1 /", &[], &[i64::MIN]; "div overflow wraps")]
fn arithmetic(source: &str, init_stack: &[i64], expected: &[i64]) {
    assert_eq!(eval_and_stack(source, init_stack), expected);
}

#[test_case("swap", &[1, 2], &[2, 1]; "swap")]
#[test_case("swap swap", &[1, 2], &[1, 2]; "swap is its own inverse")]
#[test_case("dup", &[5], &[5, 5]; "dup")]
#[test_case("dup drop", &[1, 5], &[1, 5]; "dup drop restores the stack")]
#[test_case("over", &[1, 2], &[1, 2, 1]; "over")]
#[test_case("rot", &[1, 2, 3], &[2, 3, 1]; "rot")]
#[test_case("rot rot rot", &[1, 2, 3], &[1, 2, 3]; "three rots restore the stack")]
#[test_case("drop", &[1, 2], &[1]; "drop")]
fn stack_shuffling(source: &str, init_stack: &[i64], expected: &[i64]) {
    assert_eq!(eval_and_stack(source, init_stack), expected);
}

#[test_case("=", &[5, 5], &[-1]; "equal")]
#[test_case("=", &[5, 3], &[0]; "not equal values")]
#[test_case("<>", &[5, 6], &[-1]; "different")]
#[test_case("<>", &[5, 5], &[0]; "different for equal values")]
#[test_case("<", &[1, 2], &[-1]; "less is true")]
#[test_case("<", &[2, 1], &[0]; "less is false")]
#[test_case("<", &[1, 1], &[0]; "less for equal")]
#[test_case(">", &[2, 1], &[-1]; "greater is true")]
#[test_case(">", &[1, 2], &[0]; "greater is false")]
#[test_case(">", &[1, 1], &[0]; "greater for equal")]
#[test_case("and", &[-1, -1], &[-1]; "and for true true")]
#[test_case("and", &[-1, 0], &[0]; "and for true false")]
#[test_case("and", &[0, 0], &[0]; "and for false false")]
#[test_case("or", &[-1, 0], &[-1]; "or for true false")]
#[test_case("or", &[0, 0], &[0]; "or for false false")]
#[test_case("invert", &[0], &[-1]; "invert false")]
#[test_case("invert", &[-1], &[0]; "invert true")]
#[test_case("5 3 = invert", &[], &[-1]; "invert a comparison")]
fn logic(source: &str, init_stack: &[i64], expected: &[i64]) {
    assert_eq!(eval_and_stack(source, init_stack), expected);
}

#[test]
fn binary_operators_use_second_value_as_left_operand() {
    for &(b, a) in &[(7, 3), (-4, 9), (100, -7), (0, 5)] {
        let source = format!("{} {}", b, a);

        assert_eq!(eval_and_stack(&format!("{} +", source), &[]), vec![b + a]);
        assert_eq!(eval_and_stack(&format!("{} -", source), &[]), vec![b - a]);
        assert_eq!(eval_and_stack(&format!("{} *", source), &[]), vec![b * a]);
        assert_eq!(eval_and_stack(&format!("{} /", source), &[]), vec![b / a]);
        assert_eq!(eval_and_stack(&format!("{} mod", source), &[]), vec![b % a]);
    }
}

#[test]
fn stack_survives_between_evaluations() {
    let mut interpreter = ForthInterpreter::new(Vec::new(), "");

    interpreter.evaluate("1 2").unwrap();
    interpreter.evaluate("+").unwrap();

    assert_eq!(interpreter.stack().items(), &[3]);
}
