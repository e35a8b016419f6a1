//! JSON quiz-file adapter for the [`QuizRepository`] port.
//!
//! A quiz file is a single UTF-8 JSON document: an array of question
//! objects. Load and save are whole-file operations; the repository never
//! exposes a partially-read or partially-written quiz to the session.

use quizsmith_application::{QuizRepository, RepositoryError};
use quizsmith_domain::{DomainError, Question, QuestionStore};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// File-system implementation of [`QuizRepository`].
pub struct JsonFileRepository {
    pretty: bool,
}

impl JsonFileRepository {
    /// Create a repository that writes pretty-printed JSON.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Control whether saved files are pretty-printed. Indentation is
    /// cosmetic; both forms load identically.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizRepository for JsonFileRepository {
    fn load(&self, path: &Path) -> Result<Vec<Question>, RepositoryError> {
        debug!(path = %path.display(), "reading quiz file");
        let text = fs::read_to_string(path)?;
        let questions = QuestionStore::from_json(&text)?;
        info!(path = %path.display(), count = questions.len(), "quiz file read");
        Ok(questions)
    }

    fn save(&self, path: &Path, questions: &[Question]) -> Result<(), RepositoryError> {
        let json = if self.pretty {
            QuestionStore::from_questions(questions.to_vec()).to_json()?
        } else {
            serde_json::to_string(questions).map_err(DomainError::from)?
        };
        fs::write(path, json)?;
        info!(path = %path.display(), count = questions.len(), "quiz file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Vec<Question> {
        vec![
            Question::identification("Capital of France?", "Paris"),
            Question::multiple_choice(
                "Largest planet?",
                "Jupiter",
                vec!["Mars".to_string(), "Jupiter".to_string()],
            ),
        ]
    }

    #[test]
    fn save_then_load_round_trips_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");
        let repo = JsonFileRepository::new();

        repo.save(&path, &sample_quiz()).unwrap();
        assert_eq!(repo.load(&path).unwrap(), sample_quiz());
    }

    #[test]
    fn compact_output_loads_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");
        let repo = JsonFileRepository::new().with_pretty(false);

        repo.save(&path, &sample_quiz()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains('\n'));
        assert_eq!(repo.load(&path).unwrap(), sample_quiz());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new();
        let err = repo.load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RepositoryError::Io(_)));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");
        fs::write(&path, r#"{"type": "identification"}"#).unwrap();

        let repo = JsonFileRepository::new();
        let err = repo.load(&path).unwrap_err();
        assert!(matches!(err, RepositoryError::Parse(_)));
    }

    #[test]
    fn save_refuses_unwritable_path_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("quiz.json");
        let repo = JsonFileRepository::new();
        let err = repo.save(&path, &sample_quiz()).unwrap_err();
        assert!(matches!(err, RepositoryError::Io(_)));
    }
}
