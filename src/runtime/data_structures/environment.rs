use crate::lang::{
    source_buffer::{SourceBuffer, SourceLocation},
    tokenizing::{Token, next_token},
};
use std::rc::Rc;

/// The tag used for source handed to the interpreter without a file name.
pub const REPL_PATH: &str = "<repl>";

/// A token source over one block of text: a line of user input, a script file, a word's body or a
/// loop's body.
#[derive(Clone)]
pub struct Environment {
    buffer: SourceBuffer,
}

impl Environment {
    pub fn new(path: &str, source: Rc<str>) -> Environment {
        Environment {
            buffer: SourceBuffer::new(path, source),
        }
    }

    /// Read the next whitespace delimited token, or None once this environment has run dry.
    pub fn next_token(&mut self) -> Option<Token> {
        next_token(&mut self.buffer)
    }

    pub fn location(&self) -> &SourceLocation {
        self.buffer.location()
    }

    /// Drop what remains of the current line.
    pub fn skip_line(&mut self) {
        self.buffer.skip_line();
    }
}

/// The stack of environments.  The top one is live and is the only one tokens are read from.  The
/// bottom one is the top level environment fed by the host and is never popped.
pub struct EnvironmentStack {
    stack: Vec<Environment>,
}

impl EnvironmentStack {
    /// Create the stack with its top level environment scanning `source`.
    pub fn new(source: &str) -> EnvironmentStack {
        EnvironmentStack {
            stack: vec![Environment::new(REPL_PATH, source.into())],
        }
    }

    /// How many environments are active, the top level one included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Is the top level environment the live one?
    pub fn at_top_level(&self) -> bool {
        self.stack.len() == 1
    }

    /// Make a new environment live.  The one beneath it keeps its position until this one is
    /// popped.
    pub fn push(&mut self, environment: Environment) {
        self.stack.push(environment);
    }

    /// Drop the live environment.  The top level environment is never dropped.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            let _ = self.stack.pop();
        }
    }

    /// Pop everything above the top level environment.
    pub fn unwind(&mut self) {
        self.stack.truncate(1);
    }

    pub fn live(&self) -> &Environment {
        let index = self.stack.len() - 1;
        &self.stack[index]
    }

    pub fn live_mut(&mut self) -> &mut Environment {
        let index = self.stack.len() - 1;
        &mut self.stack[index]
    }

    /// Replace the live environment's text with new source, starting at its beginning.
    pub fn replace_live(&mut self, path: &str, source: &str) {
        *self.live_mut() = Environment::new(path, source.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_environment_does_not_disturb_the_one_beneath() {
        let mut environments = EnvironmentStack::new("1 2 3");

        assert_eq!(environments.live_mut().next_token().unwrap().text(), "1");

        environments.push(Environment::new("<body>", Rc::from("dup *")));

        assert_eq!(environments.live_mut().next_token().unwrap().text(), "dup");
        assert_eq!(environments.live_mut().next_token().unwrap().text(), "*");
        assert!(environments.live_mut().next_token().is_none());

        environments.pop();

        assert_eq!(environments.depth(), 1);
        assert_eq!(environments.live_mut().next_token().unwrap().text(), "2");
    }

    #[test]
    fn top_level_is_never_popped() {
        let mut environments = EnvironmentStack::new("");

        environments.pop();
        environments.unwind();

        assert_eq!(environments.depth(), 1);
        assert!(environments.at_top_level());
    }
}
