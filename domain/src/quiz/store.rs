//! The ordered question list and its JSON codec.

use crate::error::DomainError;
use crate::quiz::question::Question;

/// The ordered, mutable collection of questions being authored.
///
/// The store manages ordering and (de)serialization only. It never
/// validates: callers commit already-validated [`Question`] records through
/// the editing boundary. All index-based operations fail with
/// [`DomainError::OutOfRange`] rather than panicking so a stale selection
/// in the UI cannot crash the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over an existing question list.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Read-only snapshot of the questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append a question and return its index.
    pub fn add(&mut self, question: Question) -> usize {
        self.questions.push(question);
        self.questions.len() - 1
    }

    /// Replace the question at `index` in place.
    pub fn replace(&mut self, index: usize, question: Question) -> Result<(), DomainError> {
        let len = self.questions.len();
        match self.questions.get_mut(index) {
            Some(slot) => {
                *slot = question;
                Ok(())
            }
            None => Err(DomainError::OutOfRange { index, len }),
        }
    }

    /// Remove and return the question at `index`. Later questions shift
    /// down by one.
    pub fn remove(&mut self, index: usize) -> Result<Question, DomainError> {
        if index >= self.questions.len() {
            return Err(DomainError::OutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        Ok(self.questions.remove(index))
    }

    /// Replace the entire contents, e.g. after loading a quiz file.
    pub fn replace_all(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    /// Serialize the questions as a pretty-printed JSON array in list
    /// order. Indentation is cosmetic; [`QuestionStore::from_json`] accepts
    /// any whitespace.
    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string_pretty(&self.questions)?)
    }

    /// Parse a quiz from JSON text.
    ///
    /// The top level must be an array; anything else (including unparsable
    /// input) is a [`DomainError::Json`]. Per-element missing keys take the
    /// wire defaults documented on [`Question`].
    pub fn from_json(text: &str) -> Result<Vec<Question>, DomainError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::QuestionKind;

    fn sample_quiz() -> Vec<Question> {
        vec![
            Question::identification("Capital of France?", "Paris"),
            Question::multiple_choice(
                "Largest planet?",
                "Jupiter",
                vec!["Mars".to_string(), "Jupiter".to_string(), "Venus".to_string()],
            ),
        ]
    }

    #[test]
    fn add_returns_new_index() {
        let mut store = QuestionStore::new();
        assert_eq!(store.add(Question::identification("Q1", "A1")), 0);
        assert_eq!(store.add(Question::identification("Q2", "A2")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_swaps_in_place() {
        let mut store = QuestionStore::from_questions(sample_quiz());
        store
            .replace(0, Question::identification("Capital of Spain?", "Madrid"))
            .unwrap();
        assert_eq!(store.get(0).unwrap().text(), "Capital of Spain?");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_out_of_range_fails() {
        let mut store = QuestionStore::from_questions(sample_quiz());
        let err = store
            .replace(2, Question::identification("Q", "A"))
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn remove_shifts_later_indices_down() {
        let mut store = QuestionStore::from_questions(sample_quiz());
        let removed = store.remove(0).unwrap();
        assert_eq!(removed.text(), "Capital of France?");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().text(), "Largest planet?");
    }

    #[test]
    fn remove_out_of_range_leaves_list_unchanged() {
        let mut store = QuestionStore::from_questions(sample_quiz());
        let before = store.clone();
        assert!(store.remove(5).unwrap_err().is_out_of_range());
        assert_eq!(store, before);
    }

    #[test]
    fn json_round_trip_preserves_quiz() {
        let store = QuestionStore::from_questions(sample_quiz());
        let json = store.to_json().unwrap();
        let reloaded = QuestionStore::from_json(&json).unwrap();
        assert_eq!(reloaded, store.questions());
    }

    #[test]
    fn from_json_rejects_non_array_top_level() {
        assert!(QuestionStore::from_json(r#"{"type": "identification"}"#).is_err());
        assert!(QuestionStore::from_json("not json at all").is_err());
    }

    #[test]
    fn from_json_defaults_missing_choices() {
        let questions = QuestionStore::from_json(
            r#"[{"type": "identification", "question": "Q", "answer": "A"}]"#,
        )
        .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind(), QuestionKind::Identification);
        assert!(questions[0].choices().is_empty());
    }

    #[test]
    fn from_json_accepts_empty_array() {
        assert!(QuestionStore::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn to_json_emits_array_of_wire_objects() {
        let store = QuestionStore::from_questions(sample_quiz());
        let value: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["type"], "identification");
        assert_eq!(array[1]["choices"][1], "Jupiter");
    }
}
