use crate::{
    add_builtin_word,
    runtime::{built_ins::Builtin, error, interpreter::Interpreter},
};

/// Duplicate the top value on the data stack.
///
/// Signature: `a -- a a`
pub fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.stack().peek()?;

    interpreter.push(value);
    Ok(())
}

/// Drop the top value on the data stack.
///
/// Signature: `a -- `
pub fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
pub fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let [a, b] = interpreter.stack_mut().pop_n()?;

    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Copy the second value over the top one.
///
/// Signature: `a b -- a b a`
pub fn word_over(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let [a, _] = interpreter.stack().peek_n()?;

    interpreter.push(a);
    Ok(())
}

/// Rotate the third value up to the top of the stack.
///
/// Signature: `a b c -- b c a`
pub fn word_rot(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let [a, b, c] = interpreter.stack_mut().pop_n()?;

    interpreter.push(b);
    interpreter.push(c);
    interpreter.push(a);

    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_builtin_word!(
        interpreter,
        "dup",
        Builtin::Dup,
        "Duplicate the top value on the data stack.",
        "a -- a a"
    );

    add_builtin_word!(
        interpreter,
        "drop",
        Builtin::Drop,
        "Discard the top value on the data stack.",
        "a -- "
    );

    add_builtin_word!(
        interpreter,
        "swap",
        Builtin::Swap,
        "Swap the top 2 values on the data stack.",
        "a b -- b a"
    );

    add_builtin_word!(
        interpreter,
        "over",
        Builtin::Over,
        "Make a copy of the second value and place it on top of the stack.",
        "a b -- a b a"
    );

    add_builtin_word!(
        interpreter,
        "rot",
        Builtin::Rot,
        "Rotate the top 3 values on the stack.",
        "a b c -- b c a"
    );
}
