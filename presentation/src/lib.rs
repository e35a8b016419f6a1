//! Presentation layer for quizsmith
//!
//! This crate contains the CLI definition, console output formatting, and
//! the interactive editor REPL. It drives the application layer's editor
//! session and never constructs a question without going through draft
//! commit.

pub mod cli;
pub mod editor;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use editor::repl::{EditorRepl, ReplOptions};
pub use output::console::ConsoleFormatter;
