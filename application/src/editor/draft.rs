//! Question draft and commit validation.
//!
//! A [`QuestionDraft`] is the mutable, possibly-invalid shape the user
//! edits: up to [`CHOICE_SLOTS`] fixed choice slots plus the other fields.
//! [`QuestionDraft::commit`] is the single place invalid state is stopped;
//! only its output ever reaches the question store.

use quizsmith_domain::{Question, QuestionKind};
use thiserror::Error;

/// Number of fixed choice slots in the editor form.
pub const CHOICE_SLOTS: usize = 4;

/// Why a draft cannot be committed. All variants are recoverable: the
/// presentation layer re-prompts without losing the entered data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("identification questions need a correct answer")]
    EmptyAnswer,

    #[error("multiple choice needs at least 2 choices, found {found}")]
    TooFewChoices { found: usize },

    /// The correct answer could not be determined from the selected slot.
    /// Carries the compacted choice list so the caller can prompt for an
    /// explicit pick.
    #[error("pick which choice is the correct answer")]
    AnswerAmbiguous { choices: Vec<String> },
}

/// The candidate field values currently being edited.
///
/// Fields are deliberately public: this is a form, not an invariant-bearing
/// record. Empty choice slots do not reserve a position — commit compacts
/// them out, which is why the correct answer is resolved by slot *content*
/// rather than by raw slot index (a raw index can drift once blanks above
/// it disappear).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub kind: QuestionKind,
    pub text: String,
    /// Answer field for identification questions; ignored for multiple
    /// choice.
    pub ident_answer: String,
    /// Fixed choice slots; blank slots are skipped at commit.
    pub choices: [String; CHOICE_SLOTS],
    /// Slot currently marked as the correct answer, if any.
    pub selected_slot: Option<usize>,
    /// Explicit answer collected after an [`ValidationError::AnswerAmbiguous`]
    /// re-prompt. Takes precedence over `selected_slot`.
    pub answer_override: Option<String>,
}

impl QuestionDraft {
    /// A blank draft of the given kind.
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            kind,
            text: String::new(),
            ident_answer: String::new(),
            choices: Default::default(),
            selected_slot: None,
            answer_override: None,
        }
    }

    /// Pure projection of a stored question into the editable shape.
    ///
    /// For multiple choice, the first [`CHOICE_SLOTS`] choices fill the
    /// slots and the first slot whose text equals the stored answer is
    /// pre-selected; if none matches, no slot is selected.
    pub fn from_question(question: &Question) -> Self {
        let mut draft = Self::new(question.kind());
        draft.text = question.text().to_string();
        match question.kind() {
            QuestionKind::Identification => {
                draft.ident_answer = question.answer().to_string();
            }
            QuestionKind::MultipleChoice => {
                for (slot, choice) in question.choices().iter().take(CHOICE_SLOTS).enumerate() {
                    draft.choices[slot] = choice.clone();
                }
                draft.selected_slot = question
                    .choices()
                    .iter()
                    .take(CHOICE_SLOTS)
                    .position(|c| c == question.answer());
            }
        }
        draft
    }

    /// The non-empty trimmed choices in slot order, blanks compacted out.
    pub fn compacted_choices(&self) -> Vec<String> {
        self.choices
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validate the draft and produce an immutable, invariant-satisfying
    /// [`Question`].
    ///
    /// Checks run in order: question text, then the kind-specific rules.
    /// On any failure the draft is untouched and can be re-edited.
    pub fn commit(&self) -> Result<Question, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        match self.kind {
            QuestionKind::Identification => {
                let answer = self.ident_answer.trim();
                if answer.is_empty() {
                    return Err(ValidationError::EmptyAnswer);
                }
                Ok(Question::identification(text, answer))
            }
            QuestionKind::MultipleChoice => {
                let choices = self.compacted_choices();
                if choices.len() < 2 {
                    return Err(ValidationError::TooFewChoices {
                        found: choices.len(),
                    });
                }
                let answer = self.resolve_answer(&choices)?;
                Ok(Question::multiple_choice(text, answer, choices))
            }
        }
    }

    /// Determine the correct answer among the compacted choices.
    ///
    /// An explicit override (from a previous ambiguity re-prompt) wins;
    /// otherwise the selected slot's content is looked up in the compacted
    /// list. Either way the resolved text must occur exactly once, so a
    /// blank selected slot, a duplicated choice, or no selection at all is
    /// ambiguous and forces an explicit pick.
    fn resolve_answer(&self, choices: &[String]) -> Result<String, ValidationError> {
        let ambiguous = || ValidationError::AnswerAmbiguous {
            choices: choices.to_vec(),
        };

        let content = match &self.answer_override {
            Some(answer) => answer.trim(),
            None => match self.selected_slot {
                Some(slot) => self.choices.get(slot).map(|s| s.trim()).unwrap_or(""),
                None => return Err(ambiguous()),
            },
        };
        if content.is_empty() {
            return Err(ambiguous());
        }
        match choices.iter().filter(|c| c.as_str() == content).count() {
            1 => Ok(content.to_string()),
            _ => Err(ambiguous()),
        }
    }
}
