//! Editor session: explicit state for the quiz being authored.
//!
//! Holds the question store, which record the current draft targets, and
//! whether there are unsaved changes. The presentation layer owns the
//! draft itself while the user types; everything that mutates the store or
//! touches persistence goes through here.

use crate::editor::draft::{QuestionDraft, ValidationError};
use crate::ports::repository::{QuizRepository, RepositoryError};
use quizsmith_domain::{Question, QuestionKind, QuestionStore};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Which store entry the active draft will be committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Commit appends a new question.
    New,
    /// Commit replaces the question at this index.
    Existing(usize),
}

/// Errors surfaced to the presentation layer by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No valid target. Covers both "no draft in progress" and a target
    /// index that no longer exists; either way the user-facing message is
    /// that nothing is selected.
    #[error("no question is selected")]
    NothingSelected,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Session state threaded through the editor: the store, the draft target,
/// and the unsaved-changes flag.
///
/// Every operation either completes or leaves the session exactly as it
/// was; a cancelled prompt or a failed load/save never corrupts in-memory
/// state.
#[derive(Debug, Default)]
pub struct EditorSession {
    store: QuestionStore,
    target: Option<EditTarget>,
    dirty: bool,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an already-loaded question list.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            store: QuestionStore::from_questions(questions),
            target: None,
            dirty: false,
        }
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }

    /// Whether the quiz has changed since the last successful load/save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Begin composing a new question. Nothing reaches the store until the
    /// draft passes [`EditorSession::apply`].
    pub fn begin_new(&mut self, kind: QuestionKind) -> QuestionDraft {
        debug!(%kind, "starting a new question draft");
        self.target = Some(EditTarget::New);
        QuestionDraft::new(kind)
    }

    /// Begin editing the question at `index`, projecting it into a draft.
    pub fn edit(&mut self, index: usize) -> Result<QuestionDraft, SessionError> {
        let question = self.store.get(index).ok_or(SessionError::NothingSelected)?;
        let draft = QuestionDraft::from_question(question);
        self.target = Some(EditTarget::Existing(index));
        Ok(draft)
    }

    /// Abandon the active draft. The store is untouched.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Validate the draft and commit it to its target. Returns the index
    /// the question now lives at. On any error the store and target are
    /// left unchanged so the user can fix the draft and retry.
    pub fn apply(&mut self, draft: &QuestionDraft) -> Result<usize, SessionError> {
        let target = self.target.ok_or(SessionError::NothingSelected)?;
        let question = draft.commit()?;
        let index = match target {
            EditTarget::New => self.store.add(question),
            EditTarget::Existing(index) => {
                self.store
                    .replace(index, question)
                    .map_err(|_| SessionError::NothingSelected)?;
                index
            }
        };
        info!(index, "question committed");
        self.target = Some(EditTarget::Existing(index));
        self.dirty = true;
        Ok(index)
    }

    /// Delete the question at `index`. Later questions shift down; the
    /// draft target is cleared or shifted to follow the record it pointed
    /// at.
    pub fn remove(&mut self, index: usize) -> Result<Question, SessionError> {
        let removed = self
            .store
            .remove(index)
            .map_err(|_| SessionError::NothingSelected)?;
        self.target = match self.target {
            Some(EditTarget::Existing(i)) if i == index => None,
            Some(EditTarget::Existing(i)) if i > index => Some(EditTarget::Existing(i - 1)),
            other => other,
        };
        self.dirty = true;
        info!(index, "question removed");
        Ok(removed)
    }

    /// Replace the whole quiz with the contents of `path`.
    ///
    /// On failure the in-memory quiz is left exactly as it was; a broken
    /// file never clears existing work. Returns the number of questions
    /// loaded.
    pub fn load_from(
        &mut self,
        repository: &dyn QuizRepository,
        path: &Path,
    ) -> Result<usize, SessionError> {
        let questions = repository.load(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "quiz load failed");
        })?;
        let count = questions.len();
        self.store.replace_all(questions);
        self.target = None;
        self.dirty = false;
        info!(path = %path.display(), count, "quiz loaded");
        Ok(count)
    }

    /// Save the whole quiz to `path`. A failed save keeps the dirty flag
    /// set and is never reported as success. Returns the number of
    /// questions written.
    pub fn save_to(
        &mut self,
        repository: &dyn QuizRepository,
        path: &Path,
    ) -> Result<usize, SessionError> {
        repository
            .save(path, self.store.questions())
            .inspect_err(|e| {
                warn!(path = %path.display(), error = %e, "quiz save failed");
            })?;
        self.dirty = false;
        let count = self.store.len();
        info!(path = %path.display(), count, "quiz saved");
        Ok(count)
    }
}
