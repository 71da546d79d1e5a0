use std::fmt::{ self, Debug, Formatter };
use thiserror::Error;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// Any error that aborts the execution of a word.
///
/// Unknown words are not part of this list.  They are reported in line and interpretation carries
/// on with the next token.
#[derive(Error)]
pub enum ScriptError
{
    /// A word needed more values than the data stack held.  The stack is left untouched.
    #[error("Stack underflow, needed {needed} value(s) but the stack held {depth}.")]
    StackUnderflow { needed: usize, depth: usize },

    /// A control word never found its closing token before the input ran out.  This covers
    /// string literals missing their closing quote as well.
    #[error("Unterminated {opener}, expected {closer} before the end of input.")]
    UnterminatedStructure { opener: &'static str, closer: &'static str },

    /// Integer division or remainder with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,

    /// A loop index word was used without enough enclosing do loops.
    #[error("Word {0} used outside of a do loop.")]
    NoActiveLoop(&'static str),

    /// Word or loop bodies nested deeper than the interpreter allows.
    #[error("Nesting too deep, more than {0} nested word or loop bodies.")]
    NestingTooDeep(usize),

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)
}


/// Print the same text as Display so that errors returned from main read well.
impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    /// Shorthand for the error raised by a control word missing its closing token.
    pub fn unterminated<T>(opener: &'static str, closer: &'static str) -> Result<T>
    {
        Err(ScriptError::UnterminatedStructure { opener, closer })
    }
}
