use crate::{
    lang::{source_buffer::SourceLocation, tokenizing::Token},
    runtime::{
        built_ins::{execute_builtin, register_builtin_words},
        data_structures::{
            data_stack::DataStack,
            dictionary::{Dictionary, WordBehavior, WordInfo},
            environment::{Environment, EnvironmentStack, REPL_PATH},
        },
        error::{self, ScriptError},
        interpreter::{
            Interpreter, InterpreterStack, LineFeed, LoopManagement, SourceManagement,
            WordManagement,
        },
    },
};
use std::{io::Write, rc::Rc};
use tracing::{debug, trace};

/// The default limit on nested word and loop bodies.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The prompt shown when a control structure continues onto another line.
pub const CONTINUE_PROMPT: &str = "... ";

/// The core interpreter.  Program output goes to `W`.
pub struct ForthInterpreter<W: Write> {
    /// The data stack used by the interpreter.
    stack: DataStack,

    /// Current index of every running do loop, innermost last.
    loop_indices: Vec<i64>,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// Where tokens are read from.  The bottom environment is the top level input.
    environments: EnvironmentStack,

    /// The location of the last token interpreted.
    current_location: Option<SourceLocation>,

    /// The output sink.
    output: W,

    /// Where more top level input comes from once the current line is used up.
    line_feed: Option<Box<dyn LineFeed>>,

    /// Limit on nested environments above the top level one.
    max_depth: usize,

    /// Set by `bye`.
    halted: bool,
}

impl<W: Write> InterpreterStack for ForthInterpreter<W> {
    fn stack(&self) -> &DataStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut DataStack {
        &mut self.stack
    }
}

impl<W: Write> LoopManagement for ForthInterpreter<W> {
    fn loop_indices(&self) -> &[i64] {
        &self.loop_indices
    }

    fn loop_push(&mut self, index: i64) {
        self.loop_indices.push(index);
    }

    fn loop_pop(&mut self) {
        let _ = self.loop_indices.pop();
    }
}

impl<W: Write> SourceManagement for ForthInterpreter<W> {
    fn next_token(&mut self) -> Option<Token> {
        self.environments.live_mut().next_token()
    }

    fn next_structure_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.next_token() {
                return Some(token);
            }

            if !self.environments.at_top_level() {
                return None;
            }

            let line = self.line_feed.as_mut()?.next_line(CONTINUE_PROMPT)?;
            self.environments.replace_live(REPL_PATH, &line);
        }
    }

    fn environment_depth(&self) -> usize {
        self.environments.depth()
    }

    fn replace_live_source(&mut self, source: &str) {
        self.environments.replace_live(REPL_PATH, source);
    }

    fn execute_source(&mut self, path: &str, source: Rc<str>) -> error::Result<()> {
        if self.environments.depth() > self.max_depth {
            return Err(ScriptError::NestingTooDeep(self.max_depth));
        }

        self.environments.push(Environment::new(path, source));
        trace!(path, depth = self.environments.depth(), "Entered environment.");

        let result = self.interpret_live();

        self.environments.pop();
        trace!(path, depth = self.environments.depth(), "Left environment.");

        result
    }
}

impl<W: Write> WordManagement for ForthInterpreter<W> {
    fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn add_word(&mut self, info: WordInfo) {
        let _ = self.dictionary.insert(info);
    }

    fn interpret(&mut self, token: &Token) -> error::Result<()> {
        trace!(token = ?token, "Interpreting.");
        self.current_location = Some(token.location().clone());

        if let Some(word) = self.dictionary.try_get(token.text()) {
            let behavior = word.behavior.clone();
            return self.execute_behavior(token.text(), behavior);
        }

        if let Some(number) = token.number() {
            self.stack.push(number);
            return Ok(());
        }

        debug!(token = ?token, "Unknown word.");
        writeln!(self.output, "{} ?", token)?;

        Ok(())
    }
}

impl<W: Write> Interpreter for ForthInterpreter<W> {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn halt(&mut self) {
        self.halted = true;
    }

    fn is_halted(&self) -> bool {
        self.halted
    }
}

impl<W: Write> ForthInterpreter<W> {
    /// Create an interpreter writing to `output` with `source` as its top level input.  All of the
    /// built-in words are registered.
    pub fn new(output: W, source: &str) -> ForthInterpreter<W> {
        let mut interpreter = ForthInterpreter {
            stack: DataStack::new(),
            loop_indices: Vec::new(),
            dictionary: Dictionary::new(),
            environments: EnvironmentStack::new(source),
            current_location: None,
            output,
            line_feed: None,
            max_depth: DEFAULT_MAX_DEPTH,
            halted: false,
        };

        register_builtin_words(&mut interpreter);
        interpreter
    }

    /// Attach a source of further input lines.  Used by `run` and by control structures that span
    /// several lines of top level input.
    pub fn set_line_feed(&mut self, line_feed: impl LineFeed + 'static) {
        self.line_feed = Some(Box::new(line_feed));
    }

    /// Limit how deeply word and loop bodies may nest.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// The output sink.
    pub fn output_ref(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// The ready prompt, the stack contents followed by `ok> `.
    pub fn prompt(&self) -> String {
        let mut prompt = String::new();

        for value in self.stack.items() {
            prompt.push_str(&format!("{} ", value));
        }

        prompt.push_str("ok> ");
        prompt
    }

    /// Interpret a block of source as top level input.
    pub fn evaluate(&mut self, source: &str) -> error::Result<()> {
        self.evaluate_named(REPL_PATH, source)
    }

    /// Interpret a block of source as top level input, reporting its tokens as coming from `path`.
    ///
    /// Errors raised by words are reported to the output and interpretation picks up again on the
    /// next line.  Only a failing output sink is returned as an error.
    pub fn evaluate_named(&mut self, path: &str, source: &str) -> error::Result<()> {
        self.environments.replace_live(path, source);
        self.interpret_top_level()
    }

    /// Interpret the top level input, asking the line feed for more whenever it runs out.  Returns
    /// when the feed has no more lines or the interpreter has been halted.
    pub fn run(&mut self) -> error::Result<()> {
        loop {
            self.interpret_top_level()?;

            if self.halted {
                break;
            }

            let prompt = self.prompt();
            let Some(line_feed) = self.line_feed.as_mut() else {
                break;
            };

            match line_feed.next_line(&prompt) {
                Some(line) => self.replace_live_source(&line),
                None => break,
            }
        }

        Ok(())
    }

    /// Interpret tokens until the top level environment runs dry.
    fn interpret_top_level(&mut self) -> error::Result<()> {
        while !self.halted {
            let Some(token) = self.next_token() else {
                break;
            };

            if let Err(error) = self.interpret(&token) {
                self.report_error(error)?;
            }
        }

        Ok(())
    }

    /// Interpret tokens until the live environment runs dry, stopping at the first error.
    fn interpret_live(&mut self) -> error::Result<()> {
        while !self.halted {
            let Some(token) = self.next_token() else {
                break;
            };

            self.interpret(&token)?;
        }

        Ok(())
    }

    fn execute_behavior(&mut self, name: &str, behavior: WordBehavior) -> error::Result<()> {
        match behavior {
            WordBehavior::Builtin(builtin) => execute_builtin(self, builtin),
            WordBehavior::UserDefined(body) => self.execute_source(name, body),
        }
    }

    /// Write the error to the output and get back to a clean top level state.  The dictionary and
    /// data stack are kept, the rest of the current input line is dropped.
    fn report_error(&mut self, error: ScriptError) -> error::Result<()> {
        if let ScriptError::Io(_) = error {
            return Err(error);
        }

        let location = self
            .current_location
            .clone()
            .unwrap_or_else(|| self.environments.live().location().clone());

        debug!(%location, %error, "Word failed.");

        self.environments.unwind();
        self.loop_indices.clear();
        self.environments.live_mut().skip_line();

        writeln!(self.output, "{}: {}", location, error)?;
        Ok(())
    }
}
