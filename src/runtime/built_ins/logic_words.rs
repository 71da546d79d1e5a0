use crate::{
    add_builtin_word,
    runtime::{
        built_ins::Builtin,
        data_structures::data_stack::{FALSE, TRUE, flag, is_true},
        error,
        interpreter::Interpreter,
    },
};

/// Pop `b a` and push the Forth flag for `test(b, a)`.
fn comparison_op(
    interpreter: &mut dyn Interpreter,
    test: fn(&i64, &i64) -> bool,
) -> error::Result<()> {
    let [b, a] = interpreter.stack_mut().pop_n()?;

    interpreter.push(flag(test(&b, &a)));
    Ok(())
}

/// Signature: `b a -- flag`
pub fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    comparison_op(interpreter, i64::eq)
}

/// Signature: `b a -- flag`
pub fn word_not_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    comparison_op(interpreter, i64::ne)
}

/// Signature: `b a -- flag`
pub fn word_less(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    comparison_op(interpreter, i64::lt)
}

/// Signature: `b a -- flag`
pub fn word_greater(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    comparison_op(interpreter, i64::gt)
}

/// Signature: `b a -- flag`
pub fn word_and(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let [b, a] = interpreter.stack_mut().pop_n()?;

    interpreter.push(flag(is_true(b) && is_true(a)));
    Ok(())
}

/// Signature: `b a -- flag`
pub fn word_or(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let [b, a] = interpreter.stack_mut().pop_n()?;

    interpreter.push(flag(is_true(b) || is_true(a)));
    Ok(())
}

/// Logical, not bitwise, negation.
///
/// Signature: `flag -- !flag`
pub fn word_invert(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(if is_true(value) { FALSE } else { TRUE });
    Ok(())
}

pub fn register_logic_words(interpreter: &mut dyn Interpreter) {
    add_builtin_word!(
        interpreter,
        "=",
        Builtin::Equal,
        "Are the top two values equal?",
        "b a -- flag"
    );

    add_builtin_word!(
        interpreter,
        "<>",
        Builtin::NotEqual,
        "Are the top two values different?",
        "b a -- flag"
    );

    add_builtin_word!(
        interpreter,
        "<",
        Builtin::Less,
        "Is the second value less than the top value?",
        "b a -- flag"
    );

    add_builtin_word!(
        interpreter,
        ">",
        Builtin::Greater,
        "Is the second value greater than the top value?",
        "b a -- flag"
    );

    add_builtin_word!(
        interpreter,
        "and",
        Builtin::And,
        "True if both flags are true.",
        "b a -- flag"
    );

    add_builtin_word!(
        interpreter,
        "or",
        Builtin::Or,
        "True if either flag is true.",
        "b a -- flag"
    );

    add_builtin_word!(
        interpreter,
        "invert",
        Builtin::Invert,
        "Logically negate a flag.",
        "flag -- !flag"
    );
}
