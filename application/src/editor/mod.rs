//! The editing boundary.
//!
//! - [`draft::QuestionDraft`] — the candidate field values under edit and
//!   the commit validation that turns them into a valid `Question`
//! - [`session::EditorSession`] — selection, dirty tracking, and the
//!   store/persistence choreography around drafts

pub mod draft;
pub mod session;
