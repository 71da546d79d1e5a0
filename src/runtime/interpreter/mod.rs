use crate::{
    lang::tokenizing::Token,
    runtime::{
        data_structures::{
            data_stack::DataStack,
            dictionary::{Dictionary, WordInfo},
        },
        error,
    },
};
use std::{io::Write, rc::Rc};

pub mod forth_interpreter;

/// Trait for managing the interpreter's data stack.  Intended to be called by the built-in words.
pub trait InterpreterStack {
    /// Use to examine the full data stack when required.  One example is the stack dump command
    /// `.S`.
    fn stack(&self) -> &DataStack;

    /// Mutable access for words that need to check or take several values at once.
    fn stack_mut(&mut self) -> &mut DataStack;

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: i64) {
        self.stack_mut().push(value);
    }

    /// Pop a value from the stack.  If the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<i64> {
        self.stack_mut().pop()
    }
}

/// Trait for the loop index stack.  Each running `do` loop keeps its current index here for the
/// duration of an iteration, innermost loop last.
pub trait LoopManagement {
    fn loop_indices(&self) -> &[i64];

    fn loop_push(&mut self, index: i64);

    fn loop_pop(&mut self);

    /// Index of an enclosing loop, 0 being the innermost one.
    fn loop_index(&self, depth: usize) -> Option<i64> {
        let indices = self.loop_indices();

        indices
            .len()
            .checked_sub(depth + 1)
            .map(|position| indices[position])
    }
}

/// Trait for managing the environments tokens are read from.
///
/// Control words like `if`, `do` and `:` read ahead in the live environment to find their
/// bodies, and word and loop bodies are run by pushing a new environment over their text.
pub trait SourceManagement {
    /// Get the next token from the live environment.  Never refills, None simply means the live
    /// environment has run dry.
    fn next_token(&mut self) -> Option<Token>;

    /// Get the next token for a control structure that isn't complete yet.  If the top level
    /// environment runs dry and a line feed is attached, another line is requested and scanning
    /// carries on.  Nested environments are never refilled.
    fn next_structure_token(&mut self) -> Option<Token>;

    /// How many environments are active, the top level one included.
    fn environment_depth(&self) -> usize;

    /// Feed new text to the live environment.  This is how the host hands over a freshly read line
    /// once the top level environment is exhausted.
    fn replace_live_source(&mut self, source: &str);

    /// Push a new environment over the given text, interpret every token in it, then pop it again.
    /// The environment is popped even if interpretation fails part way.
    fn execute_source(&mut self, path: &str, source: Rc<str>) -> error::Result<()>;
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// The current word dictionary of words known to the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// Add a word to the dictionary, silently replacing any word of the same name.
    fn add_word(&mut self, info: WordInfo);

    /// Find a word in the interpreter's dictionary by name.
    fn find_word(&self, name: &str) -> Option<&WordInfo> {
        self.dictionary().try_get(name)
    }

    /// Interpret a single token right now.  Words are executed, numbers are pushed, and anything
    /// else is reported to the output as `<token> ?` before carrying on.
    fn interpret(&mut self, token: &Token) -> error::Result<()>;
}

/// Core interpreter trait.
///
/// This trait brings together the traits that define the core functionality of the interpreter
/// along with the output sink and the halted state.
pub trait Interpreter: InterpreterStack + LoopManagement + SourceManagement + WordManagement {
    /// The sink all program output is written to.
    fn output(&mut self) -> &mut dyn Write;

    /// Stop interpreting.  The drivers stop reading tokens once the interpreter is halted.
    fn halt(&mut self);

    fn is_halted(&self) -> bool;
}

/// A source of further input lines for the top level environment.
pub trait LineFeed {
    /// Show the prompt and return the next line, or None at the end of input.
    fn next_line(&mut self, prompt: &str) -> Option<String>;
}

impl<F> LineFeed for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn next_line(&mut self, prompt: &str) -> Option<String> {
        self(prompt)
    }
}

/// Simplify registering a built-in word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The Builtin operation the word runs.  A simple description of the word.  As well as
/// the word's stack signature.
#[macro_export]
macro_rules! add_builtin_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $builtin:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use $crate::runtime::data_structures::dictionary::{WordBehavior, WordInfo};

        // Register the word while recording where in the source code the word was registered
        // from.
        let mut info = WordInfo::new(
            $crate::location_here!(),
            $name.to_string(),
            WordBehavior::Builtin($builtin),
        );

        info.description = $description.to_string();
        info.signature = $signature.to_string();

        $interpreter.add_word(info);
    }};
}
