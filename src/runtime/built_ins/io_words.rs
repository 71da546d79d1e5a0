use crate::{
    add_builtin_word,
    runtime::{
        built_ins::Builtin,
        error::{self, ScriptError},
        interpreter::Interpreter,
    },
};

/// Pop and print the top value followed by a space.
///
/// Signature: `value -- `
pub fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    write!(interpreter.output(), "{} ", value)?;
    Ok(())
}

/// Pop the top value and print the character with that code point.  Values that aren't valid code
/// points print as the replacement character.
///
/// Signature: `code -- `
pub fn word_emit(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;
    let character = u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    write!(interpreter.output(), "{}", character)?;
    Ok(())
}

/// Signature: ` -- `
pub fn word_cr(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    writeln!(interpreter.output())?;
    Ok(())
}

/// Print the depth of the stack and its contents, deepest first, without changing it.
///
/// Signature: ` -- `
pub fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let snapshot = interpreter.stack().to_string();

    write!(interpreter.output(), "{}", snapshot)?;
    Ok(())
}

/// Print the following tokens up to and including the one ending in `"`, joined by single spaces
/// and without the closing quote.  The quote is only found at the end of a token, so `."` has to be
/// followed by whitespace.
///
/// Nothing is printed if the closing quote is never found.
///
/// Signature: ` -- `
pub fn word_print_string(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let mut parts = Vec::new();

    loop {
        let Some(token) = interpreter.next_token() else {
            return ScriptError::unterminated(".\"", "a token ending in \"");
        };

        if let Some(last) = token.text().strip_suffix('"') {
            parts.push(last.to_string());
            break;
        }

        parts.push(token.text().to_string());
    }

    write!(interpreter.output(), "{}", parts.join(" "))?;
    Ok(())
}

pub fn register_io_words(interpreter: &mut dyn Interpreter) {
    add_builtin_word!(
        interpreter,
        ".",
        Builtin::Print,
        "Print the top value followed by a space.",
        "value -- "
    );

    add_builtin_word!(
        interpreter,
        "emit",
        Builtin::Emit,
        "Print the character for the code point on top of the stack.",
        "code -- "
    );

    add_builtin_word!(
        interpreter,
        "cr",
        Builtin::Cr,
        "Print a new line.",
        " -- "
    );

    add_builtin_word!(
        interpreter,
        ".S",
        Builtin::PrintStack,
        "Print the stack depth and contents without changing them.",
        " -- "
    );

    add_builtin_word!(
        interpreter,
        ".\"",
        Builtin::PrintString,
        "Print the text up to the next token ending in a double quote.",
        " -- "
    );
}
