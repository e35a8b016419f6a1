//! Application layer for quizsmith
//!
//! This crate contains the editing use cases: projecting a stored question
//! into an editable draft, validating and committing a draft back into the
//! question store, and the session state (current target, unsaved-changes
//! flag) that the presentation layer drives. Persistence is reached through
//! the [`QuizRepository`] port; the file-system adapter lives in the
//! infrastructure crate.

pub mod editor;
pub mod ports;

// Re-export commonly used types
pub use editor::draft::{CHOICE_SLOTS, QuestionDraft, ValidationError};
pub use editor::session::{EditTarget, EditorSession, SessionError};
pub use ports::repository::{InMemoryRepository, QuizRepository, RepositoryError};
