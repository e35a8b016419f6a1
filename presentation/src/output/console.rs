//! Console formatter for quiz display

use colored::Colorize;
use quizsmith_domain::util::truncate_str;
use quizsmith_domain::{Question, QuestionKind, QuestionStore};

/// Formats questions and quizzes for console display
pub struct ConsoleFormatter {
    preview_len: usize,
}

impl ConsoleFormatter {
    /// Create a formatter; `preview_len` caps the question text shown in
    /// list labels.
    pub fn new(preview_len: usize) -> Self {
        Self { preview_len }
    }

    fn kind_tag(kind: QuestionKind) -> String {
        let tag = format!("[{kind}]");
        match kind {
            QuestionKind::Identification => tag.cyan().to_string(),
            QuestionKind::MultipleChoice => tag.yellow().to_string(),
        }
    }

    /// One list label, 1-based: `  3. [multiple_choice] Largest planet?`
    pub fn list_line(&self, index: usize, question: &Question) -> String {
        format!(
            "{:>3}. {} {}",
            index + 1,
            Self::kind_tag(question.kind()),
            truncate_str(question.text(), self.preview_len)
        )
    }

    /// The whole question list, one label per line.
    pub fn list(&self, store: &QuestionStore) -> String {
        if store.is_empty() {
            return "(no questions yet - try 'add id' or 'add mc')".dimmed().to_string();
        }
        store
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| self.list_line(i, q))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full view of one question; the correct choice is marked with `*`.
    pub fn detail(&self, question: &Question) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Type:".bold(),
            Self::kind_tag(question.kind())
        ));
        output.push_str(&format!("{} {}\n", "Question:".bold(), question.text()));
        match question.kind() {
            QuestionKind::Identification => {
                output.push_str(&format!("{} {}\n", "Answer:".bold(), question.answer()));
            }
            QuestionKind::MultipleChoice => {
                output.push_str(&format!("{}\n", "Choices:".bold()));
                for (i, choice) in question.choices().iter().enumerate() {
                    let marker = if choice == question.answer() { "*" } else { " " };
                    output.push_str(&format!("  {marker} {}. {choice}\n", i + 1));
                }
            }
        }
        output
    }

    /// Pretty JSON preview of a single question, as it would appear in the
    /// saved file.
    pub fn preview_json(&self, question: &Question) -> String {
        serde_json::to_string_pretty(question).unwrap_or_else(|_| "{}".to_string())
    }

    /// Audit every question against the data-model invariants.
    ///
    /// Returns the report text and the number of problems found (zero means
    /// a clean quiz).
    pub fn audit(&self, store: &QuestionStore) -> (String, usize) {
        let mut output = String::new();
        let mut problems = 0;
        for (i, question) in store.questions().iter().enumerate() {
            match question.check_invariants() {
                Ok(()) => {
                    output.push_str(&format!("{:>3}. {}\n", i + 1, "ok".green()));
                }
                Err(violation) => {
                    problems += 1;
                    output.push_str(&format!(
                        "{:>3}. {} {violation}\n",
                        i + 1,
                        "problem:".red().bold()
                    ));
                }
            }
        }
        output.push_str(&format!(
            "{} question(s), {} problem(s)\n",
            store.len(),
            problems
        ));
        (output, problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter::new(60)
    }

    #[test]
    fn list_line_is_one_based_and_tagged() {
        let formatter = plain();
        let q = Question::identification("Capital of France?", "Paris");
        assert_eq!(
            formatter.list_line(0, &q),
            "  1. [identification] Capital of France?"
        );
    }

    #[test]
    fn list_line_truncates_long_text() {
        colored::control::set_override(false);
        let formatter = ConsoleFormatter::new(10);
        let q = Question::identification("A very long question indeed?", "x");
        assert_eq!(formatter.list_line(2, &q), "  3. [identification] A very lon");
    }

    #[test]
    fn detail_marks_the_correct_choice() {
        let formatter = plain();
        let q = Question::multiple_choice(
            "Pick one",
            "London",
            vec!["Paris".to_string(), "London".to_string()],
        );
        let detail = formatter.detail(&q);
        assert!(detail.contains("  * 2. London"));
        assert!(detail.contains("    1. Paris"));
    }

    #[test]
    fn preview_json_matches_wire_format() {
        let formatter = plain();
        let q = Question::identification("Q", "A");
        let value: serde_json::Value =
            serde_json::from_str(&formatter.preview_json(&q)).unwrap();
        assert_eq!(value["type"], "identification");
        assert_eq!(value["question"], "Q");
    }

    #[test]
    fn audit_counts_problems() {
        let formatter = plain();
        let store = QuestionStore::from_questions(vec![
            Question::identification("Fine", "Yes"),
            Question::multiple_choice("Broken", "Berlin", vec!["Paris".to_string()]),
        ]);
        let (report, problems) = formatter.audit(&store);
        assert_eq!(problems, 1);
        assert!(report.contains("2 question(s), 1 problem(s)"));
    }
}
