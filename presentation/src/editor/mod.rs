//! Interactive editor front-end.

pub mod repl;
