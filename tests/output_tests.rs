// Words that write to the output sink, and the unknown word diagnostic.

use forthwith::{ForthInterpreter, InterpreterStack, SourceManagement, WordManagement};
use test_case::test_case;

fn eval(source: &str) -> (Vec<i64>, String) {
    let mut interpreter = ForthInterpreter::new(Vec::new(), "");

    interpreter.evaluate(source).unwrap();

    let stack = interpreter.stack().items().to_vec();
    let output = String::from_utf8(interpreter.into_output()).unwrap();

    (stack, output)
}

#[test_case("1 2 + .", "3 "; "print pops and adds a space")]
#[test_case("-5 .", "-5 "; "print negative")]
#[test_case("65 emit 66 emit", "AB"; "emit characters")]
#[test_case("955 emit", "λ"; "emit non ascii")]
#[test_case("-1 emit", "\u{FFFD}"; "emit invalid code point")]
#[test_case("cr", "\n"; "carriage return")]
#[test_case(".\" Hello World\"", "Hello World"; "string literal")]
#[test_case(".\" Hello\"", "Hello"; "single word string")]
#[test_case(".\"   spaced    out\"", "spaced out"; "string words are joined by one space")]
#[test_case(".\" trailing \"", "trailing "; "lone closing quote")]
#[test_case(".\" a\" .\" b\"", "ab"; "two strings")]
#[test_case(".S", "<0> "; "empty stack snapshot")]
fn printing(source: &str, expected: &str) {
    let (_, output) = eval(source);

    assert_eq!(output, expected);
}

#[test]
fn stack_snapshot_does_not_change_the_stack() {
    let (stack, output) = eval("1 2 3 .S");

    assert_eq!(stack, vec![1, 2, 3]);
    assert_eq!(output, "<3> 1 2 3 ");
}

#[test]
fn unknown_word_is_reported_and_skipped() {
    let (stack, output) = eval("foo 1 2 +");

    assert_eq!(stack, vec![3]);
    assert_eq!(output, "foo ?\n");
}

#[test]
fn unknown_word_inside_a_definition() {
    let (stack, output) = eval(": oops 1 bar 2 ; oops");

    assert_eq!(stack, vec![1, 2]);
    assert_eq!(output, "bar ?\n");
}

#[test]
fn words_lists_the_dictionary_sorted() {
    let (_, output) = eval(": zzz ; words");

    assert!(output.ends_with(" words zzz\n"), "{:?}", output);
    assert!(output.contains(" dup "));
    assert!(output.contains(" mod "));
}

#[test]
fn tokens_can_be_driven_one_at_a_time() {
    let mut interpreter = ForthInterpreter::new(Vec::new(), "1 2 + .");

    while let Some(token) = interpreter.next_token() {
        interpreter.interpret(&token).unwrap();
    }

    assert!(interpreter.stack().is_empty());
    assert_eq!(interpreter.output_ref().as_slice(), b"3 ");

    interpreter.replace_live_source("4 5");

    while let Some(token) = interpreter.next_token() {
        interpreter.interpret(&token).unwrap();
    }

    assert_eq!(interpreter.stack().items(), &[4, 5]);
}
