use crate::{
    add_builtin_word,
    runtime::{
        built_ins::Builtin,
        error::{self, ScriptError},
        interpreter::Interpreter,
    },
};

/// Pop `b a` and push `op(b, a)`.
fn binary_op(interpreter: &mut dyn Interpreter, op: fn(i64, i64) -> i64) -> error::Result<()> {
    let [b, a] = interpreter.stack_mut().pop_n()?;

    interpreter.push(op(b, a));
    Ok(())
}

/// Same as binary_op, but refuses a zero divisor before anything is popped.
fn division_op(interpreter: &mut dyn Interpreter, op: fn(i64, i64) -> i64) -> error::Result<()> {
    let [_, divisor] = interpreter.stack().peek_n()?;

    if divisor == 0 {
        return Err(ScriptError::DivisionByZero);
    }

    binary_op(interpreter, op)
}

/// Signature: `b a -- b+a`
pub fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, i64::wrapping_add)
}

/// Signature: `b a -- b-a`
pub fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, i64::wrapping_sub)
}

/// Signature: `b a -- b*a`
pub fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    binary_op(interpreter, i64::wrapping_mul)
}

/// Truncating division.
///
/// Signature: `b a -- b/a`
pub fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    division_op(interpreter, i64::wrapping_div)
}

/// Remainder of truncating division, it takes the sign of the dividend.
///
/// Signature: `b a -- b%a`
pub fn word_modulo(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    division_op(interpreter, i64::wrapping_rem)
}

pub fn register_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_builtin_word!(
        interpreter,
        "+",
        Builtin::Add,
        "Add the top two values.",
        "b a -- sum"
    );

    add_builtin_word!(
        interpreter,
        "-",
        Builtin::Subtract,
        "Subtract the top value from the one beneath it.",
        "b a -- difference"
    );

    add_builtin_word!(
        interpreter,
        "*",
        Builtin::Multiply,
        "Multiply the top two values.",
        "b a -- product"
    );

    add_builtin_word!(
        interpreter,
        "/",
        Builtin::Divide,
        "Divide the second value by the top value, truncating.",
        "b a -- quotient"
    );

    add_builtin_word!(
        interpreter,
        "mod",
        Builtin::Modulo,
        "Remainder after dividing the second value by the top value.",
        "b a -- remainder"
    );
}
