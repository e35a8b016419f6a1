//! Port for quiz persistence.
//!
//! The editor session loads and saves whole quizzes through
//! [`QuizRepository`]; the JSON-file adapter lives in the infrastructure
//! crate. Operations are synchronous single-file reads/writes — there is
//! no background work in this system.

use quizsmith_domain::{DomainError, Question};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from a persistence adapter.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("could not access quiz file: {0}")]
    Io(#[from] std::io::Error),

    #[error("quiz file is not valid: {0}")]
    Parse(#[from] DomainError),
}

/// Port for loading and saving a whole quiz.
///
/// Both operations are atomic from the session's point of view: `load`
/// either yields a complete question list or an error, and a failed `save`
/// must not be reported as success.
pub trait QuizRepository {
    /// Read and parse the quiz at `path`.
    fn load(&self, path: &Path) -> Result<Vec<Question>, RepositoryError>;

    /// Serialize and write `questions` to `path`.
    fn save(&self, path: &Path, questions: &[Question]) -> Result<(), RepositoryError>;
}

/// In-memory implementation for tests and previews. Keeps quizzes keyed by
/// path; loading a path never saved yields a not-found I/O error, like the
/// file-system adapter would.
#[derive(Default)]
pub struct InMemoryRepository {
    files: RefCell<HashMap<PathBuf, Vec<Question>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a path, as if a quiz file already existed there.
    pub fn with_quiz(self, path: impl Into<PathBuf>, questions: Vec<Question>) -> Self {
        self.files.borrow_mut().insert(path.into(), questions);
        self
    }

    /// Snapshot of what was last saved at `path`, if anything.
    pub fn saved_at(&self, path: impl AsRef<Path>) -> Option<Vec<Question>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl QuizRepository for InMemoryRepository {
    fn load(&self, path: &Path) -> Result<Vec<Question>, RepositoryError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no quiz stored at {}", path.display()),
                ))
            })
    }

    fn save(&self, path: &Path, questions: &[Question]) -> Result<(), RepositoryError> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), questions.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_round_trip() {
        let repo = InMemoryRepository::new();
        let quiz = vec![Question::identification("Q", "A")];
        repo.save(Path::new("quiz.json"), &quiz).unwrap();
        assert_eq!(repo.load(Path::new("quiz.json")).unwrap(), quiz);
    }

    #[test]
    fn in_memory_missing_path_is_io_error() {
        let repo = InMemoryRepository::new();
        let err = repo.load(Path::new("absent.json")).unwrap_err();
        assert!(matches!(err, RepositoryError::Io(_)));
    }
}
