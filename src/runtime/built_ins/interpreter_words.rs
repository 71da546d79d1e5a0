use crate::{
    add_builtin_word,
    runtime::{built_ins::Builtin, error, interpreter::Interpreter},
};
use tracing::debug;

/// Stop the interpreter.  Nothing after this word is read.
///
/// Signature: ` -- `
pub fn word_bye(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    debug!("Halting.");
    interpreter.halt();

    Ok(())
}

/// Print every word in the dictionary, sorted by name.
///
/// Signature: ` -- `
pub fn word_words(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let names = interpreter
        .dictionary()
        .names()
        .into_iter()
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(interpreter.output(), "{}", names)?;
    Ok(())
}

/// Register the words that manage the interpreter itself.
pub fn register_interpreter_words(interpreter: &mut dyn Interpreter) {
    add_builtin_word!(
        interpreter,
        "bye",
        Builtin::Bye,
        "Stop the interpreter.",
        " -- "
    );

    add_builtin_word!(
        interpreter,
        "words",
        Builtin::Words,
        "List the names of all known words.",
        " -- "
    );
}
