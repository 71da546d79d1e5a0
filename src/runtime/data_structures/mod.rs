/// The data stack of signed integers that words read their arguments from and leave their results
/// on.
pub mod data_stack;

/// Environments are the token sources the interpreter reads from.  They stack so that a word's
/// body or a loop's body can be read exactly like top level input.
pub mod environment;

/// The dictionary module provides the word dictionary used by the interpreter.
pub mod dictionary;
