use crate::{
    add_builtin_word,
    runtime::{
        built_ins::Builtin,
        data_structures::{
            data_stack::is_true,
            dictionary::{WordBehavior, WordInfo},
        },
        error::{self, ScriptError},
        interpreter::Interpreter,
    },
};
use std::rc::Rc;
use tracing::debug;

/// The path reported for tokens read from a loop's body.
pub const LOOP_BODY_PATH: &str = "<do-loop>";

/// Which token ended a branch of an `if`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BranchEnd {
    Else,
    Then,
}

/// Read the raw text of a body up to its matching closer.  Nested opener/closer pairs are kept as
/// part of the body.  The closer itself is consumed but not included.
fn collect_body(
    interpreter: &mut dyn Interpreter,
    opener: &'static str,
    closer: &'static str,
) -> error::Result<String> {
    let mut depth = 0usize;
    let mut body = Vec::new();

    loop {
        let Some(token) = interpreter.next_structure_token() else {
            return ScriptError::unterminated(opener, closer);
        };

        if token.is(closer) {
            if depth == 0 {
                break;
            }

            depth -= 1;
        } else if token.is(opener) {
            depth += 1;
        }

        body.push(token.text().to_string());
    }

    Ok(body.join(" "))
}

/// Interpret tokens from the live environment until an `else` or `then` shows up.
fn interpret_branch(interpreter: &mut dyn Interpreter) -> error::Result<BranchEnd> {
    loop {
        let Some(token) = interpreter.next_structure_token() else {
            return ScriptError::unterminated("if", "then");
        };

        if token.is("then") {
            return Ok(BranchEnd::Then);
        }

        if token.is("else") {
            return Ok(BranchEnd::Else);
        }

        interpreter.interpret(&token)?;

        if interpreter.is_halted() {
            return Ok(BranchEnd::Then);
        }
    }
}

/// Discard tokens without interpreting them until the `then` of this `if`, or its `else` when
/// `stop_at_else` is set.  Nested `if`/`then` pairs are skipped whole.
fn skip_branch(interpreter: &mut dyn Interpreter, stop_at_else: bool) -> error::Result<BranchEnd> {
    let mut depth = 0usize;

    loop {
        let Some(token) = interpreter.next_structure_token() else {
            return ScriptError::unterminated("if", "then");
        };

        if token.is("if") {
            depth += 1;
        } else if token.is("then") {
            if depth == 0 {
                return Ok(BranchEnd::Then);
            }

            depth -= 1;
        } else if token.is("else") && depth == 0 && stop_at_else {
            return Ok(BranchEnd::Else);
        }
    }
}

/// Skip tokens up to and including the next `)`.  Running out of input just ends the comment.
///
/// Signature: ` -- `
pub fn word_comment(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    while let Some(token) = interpreter.next_token() {
        if token.is(")") {
            break;
        }
    }

    Ok(())
}

/// Pop a flag.  If it's TRUE interpret up to `else` or `then` and skip any else branch, otherwise
/// skip to `else` and interpret from there up to `then`.  Only -1 counts as true.
///
/// Signature: `flag -- `
pub fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let condition = interpreter.pop()?;

    if is_true(condition) {
        if interpret_branch(interpreter)? == BranchEnd::Else {
            let _ = skip_branch(interpreter, false)?;
        }
    } else if skip_branch(interpreter, true)? == BranchEnd::Else
        && interpret_branch(interpreter)? == BranchEnd::Else
    {
        let _ = skip_branch(interpreter, false)?;
    }

    Ok(())
}

/// Capture the text up to the matching `loop` and run it once for every index from start up to,
/// but not including, the limit.  The start index is on top of the stack with the limit beneath it.
/// Each iteration runs in its own environment with its index on the loop index stack.
///
/// Signature: `limit start -- `
pub fn word_do(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack().require(2)?;

    let body: Rc<str> = collect_body(interpreter, "do", "loop")?.into();
    let [limit, start] = interpreter.stack_mut().pop_n()?;

    for index in start..limit {
        if interpreter.is_halted() {
            break;
        }

        interpreter.loop_push(index);
        let result = interpreter.execute_source(LOOP_BODY_PATH, body.clone());
        interpreter.loop_pop();

        result?;
    }

    Ok(())
}

/// Copy the innermost loop's index.
///
/// Signature: ` -- index`
pub fn word_loop_index(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter
        .loop_index(0)
        .ok_or(ScriptError::NoActiveLoop("i"))?;

    interpreter.push(index);
    Ok(())
}

/// Copy the index of the loop enclosing the innermost one.
///
/// Signature: ` -- index`
pub fn word_outer_loop_index(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter
        .loop_index(1)
        .ok_or(ScriptError::NoActiveLoop("j"))?;

    interpreter.push(index);
    Ok(())
}

/// Start a new word.  The next token is the name and everything up to the matching `;` is kept as
/// the body's text.
///
/// Signature: ` -- `
pub fn word_define(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let Some(name) = interpreter.next_structure_token() else {
        return ScriptError::unterminated(":", ";");
    };

    let body = collect_body(interpreter, ":", ";")?;

    if interpreter.find_word(name.text()).is_some() {
        debug!(word = %name, "Redefining word.");
    }

    let mut info = WordInfo::new(
        name.location().clone(),
        name.text().to_string(),
        WordBehavior::UserDefined(Rc::from(body.as_str())),
    );

    info.description = format!(": {} {} ;", name, body);

    debug!(word = %name, body = %body, "Defined word.");
    interpreter.add_word(info);

    Ok(())
}

pub fn register_control_words(interpreter: &mut dyn Interpreter) {
    add_builtin_word!(
        interpreter,
        "(",
        Builtin::Comment,
        "Skip everything up to the next ).",
        " -- "
    );

    add_builtin_word!(
        interpreter,
        "if",
        Builtin::If,
        "Run the following branch if the flag is true, the else branch otherwise.",
        "flag -- "
    );

    add_builtin_word!(
        interpreter,
        "do",
        Builtin::Do,
        "Run the body up to loop once per index from start up to limit.",
        "limit start -- "
    );

    add_builtin_word!(
        interpreter,
        "i",
        Builtin::LoopIndex,
        "Copy the index of the innermost loop.",
        " -- index"
    );

    add_builtin_word!(
        interpreter,
        "j",
        Builtin::OuterLoopIndex,
        "Copy the index of the next outer loop.",
        " -- index"
    );

    add_builtin_word!(
        interpreter,
        ":",
        Builtin::Define,
        "Define a new word from the text up to ;.",
        " -- "
    );
}
