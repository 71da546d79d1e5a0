use crate::{lang::source_buffer::SourceLocation, runtime::built_ins::Builtin};
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// What a word does when it is executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordBehavior {
    /// One of the words implemented in Rust.
    Builtin(Builtin),

    /// A word defined with `:`.  The body is kept as the original source text and is re-read
    /// through a fresh environment every time the word runs.
    UserDefined(Rc<str>),
}

/// The information stored in the dictionary for each word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordInfo {
    /// The location in the source code where the word was defined.
    pub location: SourceLocation,

    /// The name of the word.
    pub name: String,

    /// What running the word does.
    pub behavior: WordBehavior,

    /// A simple description of the word.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,
}

impl WordInfo {
    pub fn new(location: SourceLocation, name: String, behavior: WordBehavior) -> WordInfo {
        WordInfo {
            location,
            name,
            behavior,
            description: String::new(),
            signature: String::new(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.behavior, WordBehavior::Builtin(_))
    }
}

/// Mapping of word names to their definitions.  Names are case sensitive.  Defining a word that
/// already exists replaces the old definition.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

/// Pretty print the dictionary sorted by name, one word per line with its kind, stack signature and
/// description.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let max_size = self.words.keys().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} words defined.\n", self.words.len())?;

        for name in self.names() {
            let word = &self.words[name];
            let kind = if word.is_builtin() { "builtin" } else { "user" };

            writeln!(
                formatter,
                "{:width$}  {:7}  {}  --  {}",
                name,
                kind,
                word.signature,
                word.description,
                width = max_size
            )?;
        }

        Ok(())
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a word, replacing any earlier word of the same name.  Returns the replaced word.
    pub fn insert(&mut self, info: WordInfo) -> Option<WordInfo> {
        self.words.insert(info.name.clone(), info)
    }

    /// Exact match lookup of a word by name.
    pub fn try_get(&self, name: &str) -> Option<&WordInfo> {
        self.words.get(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All of the defined names in sorted order.
    pub fn names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.words.keys().collect();
        names.sort();
        names
    }
}
