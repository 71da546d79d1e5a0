/// Integer arithmetic words.
pub mod arithmetic_words;

/// Words that manipulate the data stack.
pub mod stack_words;

/// Comparison and boolean words.
pub mod logic_words;

/// Words that write to the output.
pub mod io_words;

/// Comments, conditionals, loops and word definitions.  These words read ahead in the live
/// environment instead of taking their arguments from the stack.
pub mod control_words;

/// Words that work with the interpreter itself.
pub mod interpreter_words;

use crate::runtime::{
    built_ins::{
        arithmetic_words::*, control_words::*, interpreter_words::*, io_words::*, logic_words::*,
        stack_words::*,
    },
    error,
    interpreter::Interpreter,
};

/// Every operation implemented in Rust.  The dictionary refers to built-in words by one of these
/// tags and execution dispatches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    Swap,
    Dup,
    Over,
    Rot,
    Drop,

    Equal,
    NotEqual,
    Less,
    Greater,
    And,
    Or,
    Invert,

    Print,
    Emit,
    Cr,
    PrintStack,
    PrintString,

    Comment,
    If,
    Do,
    LoopIndex,
    OuterLoopIndex,
    Define,

    Bye,
    Words,
}

/// Run a built-in operation against the interpreter.
pub fn execute_builtin(interpreter: &mut dyn Interpreter, builtin: Builtin) -> error::Result<()> {
    match builtin {
        Builtin::Add => word_add(interpreter),
        Builtin::Subtract => word_subtract(interpreter),
        Builtin::Multiply => word_multiply(interpreter),
        Builtin::Divide => word_divide(interpreter),
        Builtin::Modulo => word_modulo(interpreter),

        Builtin::Swap => word_swap(interpreter),
        Builtin::Dup => word_dup(interpreter),
        Builtin::Over => word_over(interpreter),
        Builtin::Rot => word_rot(interpreter),
        Builtin::Drop => word_drop(interpreter),

        Builtin::Equal => word_equal(interpreter),
        Builtin::NotEqual => word_not_equal(interpreter),
        Builtin::Less => word_less(interpreter),
        Builtin::Greater => word_greater(interpreter),
        Builtin::And => word_and(interpreter),
        Builtin::Or => word_or(interpreter),
        Builtin::Invert => word_invert(interpreter),

        Builtin::Print => word_print(interpreter),
        Builtin::Emit => word_emit(interpreter),
        Builtin::Cr => word_cr(interpreter),
        Builtin::PrintStack => word_print_stack(interpreter),
        Builtin::PrintString => word_print_string(interpreter),

        Builtin::Comment => word_comment(interpreter),
        Builtin::If => word_if(interpreter),
        Builtin::Do => word_do(interpreter),
        Builtin::LoopIndex => word_loop_index(interpreter),
        Builtin::OuterLoopIndex => word_outer_loop_index(interpreter),
        Builtin::Define => word_define(interpreter),

        Builtin::Bye => word_bye(interpreter),
        Builtin::Words => word_words(interpreter),
    }
}

/// Called to register all of the built-in words of the language.
pub fn register_builtin_words(interpreter: &mut dyn Interpreter) {
    register_arithmetic_words(interpreter);
    register_stack_words(interpreter);
    register_logic_words(interpreter);
    register_io_words(interpreter);
    register_control_words(interpreter);
    register_interpreter_words(interpreter);
}
