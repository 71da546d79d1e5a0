/// Module for managing the original source code.
pub mod source_buffer;

/// Module for turning the source code into whitespace delimited tokens.  Tokens are handed out one
/// at a time, there is no separate tokenizing pass.
pub mod tokenizing;
