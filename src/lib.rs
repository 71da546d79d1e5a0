/// Module for managing source text and turning it into whitespace delimited tokens.
#[macro_use]
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
#[macro_use]
pub mod runtime;

pub use runtime::{
    error::{Result, ScriptError},
    interpreter::{
        Interpreter, InterpreterStack, LineFeed, LoopManagement, SourceManagement,
        WordManagement, forth_interpreter::ForthInterpreter,
    },
};
