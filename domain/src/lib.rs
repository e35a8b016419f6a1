//! Domain layer for quizsmith
//!
//! This crate contains the quiz data model and its persistence wire format.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A quiz is an ordered list of [`Question`] records. Two kinds exist:
//!
//! - **Identification**: answered by exact string match against a single
//!   stored answer, no choices.
//! - **Multiple choice**: an enumerated set of at least two candidate
//!   answers, exactly one of which is the stored answer.
//!
//! ## Question Store
//!
//! [`QuestionStore`] is the ordered, mutable collection the editor works
//! against. It performs no validation of its own — validated records are
//! produced at the editing boundary (the application layer) and the store
//! only manages ordering and (de)serialization.

pub mod error;
pub mod quiz;
pub mod util;

// Re-export commonly used types
pub use error::DomainError;
pub use quiz::question::{InvariantViolation, Question, QuestionKind};
pub use quiz::store::QuestionStore;
