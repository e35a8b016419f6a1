//! Question value object and its wire format.
//!
//! The serde shape mirrors the persisted quiz file: each question is an
//! object `{ "type", "question", "answer", "choices" }`. Deserialization is
//! deliberately permissive about *missing* keys — `type` falls back to
//! identification, `question` and `answer` to the empty string, `choices`
//! to an empty list — so older or hand-edited files still load. A key that
//! is present but malformed is a parse error, not a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Judged by exact string match against a single stored answer.
    Identification,
    /// One correct answer out of an enumerated list of choices.
    MultipleChoice,
}

impl QuestionKind {
    /// Wire-format name of this kind, as stored in quiz files.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Identification => "identification",
            QuestionKind::MultipleChoice => "multiple_choice",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    /// Parse a kind from user input. Accepts the wire names plus the short
    /// forms used at the editor prompt (`id`, `ident`, `mc`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identification" | "ident" | "id" => Ok(QuestionKind::Identification),
            "multiple_choice" | "multiple-choice" | "mc" => Ok(QuestionKind::MultipleChoice),
            other => Err(format!(
                "unknown question type '{other}' (expected 'identification' or 'multiple_choice')"
            )),
        }
    }
}

/// Ways a [`Question`] can violate the data-model invariants.
///
/// The editor never produces such records, but a loaded file can contain
/// them; `quizsmith --check` reports these per question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("question text is empty")]
    EmptyText,

    #[error("identification question carries {0} choice(s)")]
    ChoicesOnIdentification(usize),

    #[error("multiple-choice question has only {0} choice(s), need at least 2")]
    TooFewChoices(usize),

    #[error("answer '{0}' does not match any choice")]
    AnswerNotInChoices(String),

    #[error("answer '{0}' matches more than one choice")]
    AnswerNotUnique(String),

    #[error("choice {0} is empty")]
    EmptyChoice(usize),
}

/// A single quiz item (Value Object).
///
/// Construction is unchecked: the editing boundary in the application layer
/// is responsible for only committing well-formed records to the store.
/// [`Question::check_invariants`] exists for auditing records that arrived
/// from outside, e.g. a loaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    #[serde(rename = "type")]
    kind: QuestionKind,
    #[serde(rename = "question")]
    text: String,
    answer: String,
    choices: Vec<String>,
}

impl Default for Question {
    /// The wire-format fallback: a blank identification question. Only
    /// meaningful as the source of per-field defaults during
    /// deserialization.
    fn default() -> Self {
        Self {
            kind: QuestionKind::Identification,
            text: String::new(),
            answer: String::new(),
            choices: Vec::new(),
        }
    }
}

impl Question {
    /// Create a question from raw parts, without validation.
    pub fn new(
        kind: QuestionKind,
        text: impl Into<String>,
        answer: impl Into<String>,
        choices: Vec<String>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            answer: answer.into(),
            choices,
        }
    }

    /// Convenience constructor for an identification question.
    pub fn identification(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(QuestionKind::Identification, text, answer, Vec::new())
    }

    /// Convenience constructor for a multiple-choice question.
    pub fn multiple_choice(
        text: impl Into<String>,
        answer: impl Into<String>,
        choices: Vec<String>,
    ) -> Self {
        Self::new(QuestionKind::MultipleChoice, text, answer, choices)
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// The prompt shown to a quiz taker.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The accepted answer. For multiple choice this equals one element of
    /// [`Question::choices`].
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Candidate answers, in display order. Empty for identification.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Verify the data-model invariants for this record.
    ///
    /// Returns the first violation found, in field order: text, then the
    /// kind-specific choice/answer rules.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.text.trim().is_empty() {
            return Err(InvariantViolation::EmptyText);
        }
        match self.kind {
            QuestionKind::Identification => {
                if !self.choices.is_empty() {
                    return Err(InvariantViolation::ChoicesOnIdentification(
                        self.choices.len(),
                    ));
                }
                Ok(())
            }
            QuestionKind::MultipleChoice => {
                if self.choices.len() < 2 {
                    return Err(InvariantViolation::TooFewChoices(self.choices.len()));
                }
                if let Some(pos) = self.choices.iter().position(|c| c.trim().is_empty()) {
                    return Err(InvariantViolation::EmptyChoice(pos));
                }
                let matches = self.choices.iter().filter(|c| **c == self.answer).count();
                match matches {
                    0 => Err(InvariantViolation::AnswerNotInChoices(self.answer.clone())),
                    1 => Ok(()),
                    _ => Err(InvariantViolation::AnswerNotUnique(self.answer.clone())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_names() {
        assert_eq!(QuestionKind::Identification.as_str(), "identification");
        assert_eq!(QuestionKind::MultipleChoice.as_str(), "multiple_choice");
        assert_eq!(
            "multiple_choice".parse::<QuestionKind>().unwrap(),
            QuestionKind::MultipleChoice
        );
    }

    #[test]
    fn kind_accepts_short_forms() {
        assert_eq!(
            "mc".parse::<QuestionKind>().unwrap(),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            "ID".parse::<QuestionKind>().unwrap(),
            QuestionKind::Identification
        );
        assert!("essay".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let q: Question = serde_json::from_str(r#"{"question": "Capital of France?"}"#).unwrap();
        assert_eq!(q.kind(), QuestionKind::Identification);
        assert_eq!(q.text(), "Capital of France?");
        assert_eq!(q.answer(), "");
        assert!(q.choices().is_empty());
    }

    #[test]
    fn deserialize_missing_choices_defaults_to_empty() {
        let q: Question = serde_json::from_str(
            r#"{"type": "multiple_choice", "question": "Pick one", "answer": "A"}"#,
        )
        .unwrap();
        assert_eq!(q.kind(), QuestionKind::MultipleChoice);
        assert!(q.choices().is_empty());
    }

    #[test]
    fn deserialize_rejects_unknown_kind() {
        let result = serde_json::from_str::<Question>(r#"{"type": "essay", "question": "?"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_uses_wire_field_names() {
        let q = Question::multiple_choice(
            "Pick one",
            "Paris",
            vec!["Paris".to_string(), "London".to_string()],
        );
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "multiple_choice");
        assert_eq!(value["question"], "Pick one");
        assert_eq!(value["answer"], "Paris");
        assert_eq!(value["choices"][1], "London");
    }

    #[test]
    fn invariants_accept_valid_records() {
        assert!(
            Question::identification("Capital of France?", "Paris")
                .check_invariants()
                .is_ok()
        );
        assert!(
            Question::multiple_choice(
                "Pick one",
                "Paris",
                vec!["Paris".to_string(), "London".to_string()],
            )
            .check_invariants()
            .is_ok()
        );
    }

    #[test]
    fn invariants_reject_empty_text() {
        let q = Question::identification("   ", "Paris");
        assert_eq!(q.check_invariants(), Err(InvariantViolation::EmptyText));
    }

    #[test]
    fn invariants_reject_choices_on_identification() {
        let q = Question::new(
            QuestionKind::Identification,
            "Capital?",
            "Paris",
            vec!["Paris".to_string()],
        );
        assert_eq!(
            q.check_invariants(),
            Err(InvariantViolation::ChoicesOnIdentification(1))
        );
    }

    #[test]
    fn invariants_reject_answer_outside_choices() {
        let q = Question::multiple_choice(
            "Pick one",
            "Berlin",
            vec!["Paris".to_string(), "London".to_string()],
        );
        assert_eq!(
            q.check_invariants(),
            Err(InvariantViolation::AnswerNotInChoices("Berlin".to_string()))
        );
    }

    #[test]
    fn invariants_reject_duplicate_answer_choices() {
        let q = Question::multiple_choice(
            "Pick one",
            "Paris",
            vec!["Paris".to_string(), "Paris".to_string()],
        );
        assert_eq!(
            q.check_invariants(),
            Err(InvariantViolation::AnswerNotUnique("Paris".to_string()))
        );
    }
}
