//! REPL (Read-Eval-Print Loop) for interactive quiz editing
//!
//! The REPL owns the editor session and the active draft, and is the only
//! place user input becomes session calls. Two prompts: `quiz> ` between
//! edits and `draft> ` while a question form is open. Any cancelled prompt
//! aborts the operation in progress with no side effects.

use crate::ConsoleFormatter;
use colored::Colorize;
use quizsmith_application::{
    CHOICE_SLOTS, EditorSession, QuestionDraft, QuizRepository, SessionError, ValidationError,
};
use quizsmith_domain::QuestionKind;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Presentation knobs for the REPL, filled from config.
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Bytes of question text shown in list labels.
    pub preview_len: usize,
    /// Ask before removing a question.
    pub confirm_remove: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            preview_len: 60,
            confirm_remove: true,
        }
    }
}

/// Interactive quiz editor
pub struct EditorRepl<R: QuizRepository> {
    session: EditorSession,
    repository: R,
    formatter: ConsoleFormatter,
    confirm_remove: bool,
    /// File the quiz was loaded from / will be saved to.
    path: Option<PathBuf>,
    /// The question form currently open, if any.
    draft: Option<QuestionDraft>,
}

impl<R: QuizRepository> EditorRepl<R> {
    /// Create a REPL over an empty quiz.
    pub fn new(repository: R, options: ReplOptions) -> Self {
        Self {
            session: EditorSession::new(),
            repository,
            formatter: ConsoleFormatter::new(options.preview_len),
            confirm_remove: options.confirm_remove,
            path: None,
            draft: None,
        }
    }

    /// Attach a quiz file before the loop starts. A missing file is fine:
    /// the path is remembered and created on first save. Any other failure
    /// is returned and the session stays empty.
    pub fn attach(&mut self, path: PathBuf) -> Result<usize, SessionError> {
        match self.session.load_from(&self.repository, &path) {
            Ok(count) => {
                self.path = Some(path);
                Ok(count)
            }
            Err(SessionError::Repository(quizsmith_application::RepositoryError::Io(e)))
                if e.kind() == std::io::ErrorKind::NotFound =>
            {
                self.path = Some(path);
                Ok(0)
            }
            Err(e) => Err(e),
        }
    }

    /// Run the interactive loop until the user quits.
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("quizsmith").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = if self.draft.is_some() { "draft> " } else { "quiz> " };
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);
                    if self.handle_line(line, &mut rl) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    if self.confirm_quit(&mut rl) {
                        break;
                    }
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Quizsmith Editor               │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        match &self.path {
            Some(path) => println!(
                "File: {} ({} question(s))",
                path.display(),
                self.session.store().len()
            ),
            None => println!("No file attached; 'save <path>' picks one."),
        }
        println!("Type 'help' for commands.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Quiz commands:");
        println!("  list                 - Show all questions");
        println!("  add <id|mc>          - Open a draft for a new question");
        println!("  edit <n>             - Open a draft for question n");
        println!("  show <n>             - Show question n with its JSON");
        println!("  remove <n>           - Delete question n");
        println!("  save [path]          - Save the quiz");
        println!("  open <path>          - Load a quiz file");
        println!("  new                  - Start an empty quiz");
        println!("  quit                 - Exit (offers to save changes)");
        println!();
        println!("Draft commands (while a draft is open):");
        println!("  text <prompt>        - Set the question text");
        println!("  answer <text>        - Set the identification answer");
        println!("  choice <slot> [text] - Fill or clear choice slot 1-{CHOICE_SLOTS}");
        println!("  pick <slot>          - Mark a slot as the correct answer");
        println!("  kind <id|mc>         - Switch question type");
        println!("  show                 - Show the draft form");
        println!("  done                 - Validate and commit the draft");
        println!("  cancel               - Discard the draft");
        println!();
    }

    /// Handle one input line. Returns true if the REPL should exit.
    fn handle_line(&mut self, line: &str, rl: &mut DefaultEditor) -> bool {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        if self.draft.is_some() && self.handle_draft_command(command, rest, rl) {
            return false;
        }

        match command {
            "list" | "ls" => println!("{}", self.formatter.list(self.session.store())),
            "add" => self.cmd_add(rest),
            "edit" => self.cmd_edit(rest),
            "show" => self.cmd_show(rest),
            "remove" | "rm" => self.cmd_remove(rest, rl),
            "save" => self.cmd_save(rest),
            "open" => self.cmd_open(rest),
            "new" => self.cmd_new(rl),
            "help" | "h" | "?" => self.print_help(),
            "quit" | "exit" | "q" => return self.confirm_quit(rl),
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
        false
    }

    /// Draft-only commands. Returns true if the input was consumed.
    fn handle_draft_command(&mut self, command: &str, rest: &str, rl: &mut DefaultEditor) -> bool {
        let Some(mut draft) = self.draft.take() else {
            return false;
        };
        let consumed = match command {
            "text" => {
                draft.text = rest.to_string();
                true
            }
            "answer" => {
                draft.ident_answer = rest.to_string();
                true
            }
            "choice" => {
                let (slot, text) = match rest.split_once(char::is_whitespace) {
                    Some((s, t)) => (s, t.trim()),
                    None => (rest, ""),
                };
                match Self::parse_slot(slot) {
                    Some(slot) => {
                        draft.choices[slot] = text.to_string();
                        // New content invalidates any earlier explicit pick.
                        draft.answer_override = None;
                    }
                    None => println!("Choice slot must be 1-{CHOICE_SLOTS}."),
                }
                true
            }
            "pick" => {
                match Self::parse_slot(rest) {
                    Some(slot) => {
                        draft.selected_slot = Some(slot);
                        draft.answer_override = None;
                    }
                    None => println!("Pick a slot number 1-{CHOICE_SLOTS}."),
                }
                true
            }
            "kind" => {
                match rest.parse::<QuestionKind>() {
                    Ok(kind) => draft.kind = kind,
                    Err(e) => println!("{e}"),
                }
                true
            }
            // Bare `show` displays the draft; `show <n>` falls through to
            // the quiz-level command.
            "show" if rest.is_empty() => true,
            "done" => {
                self.finish_draft(draft, rl);
                return true;
            }
            "cancel" => {
                self.session.cancel();
                println!("Draft discarded.");
                return true;
            }
            _ => false,
        };
        if consumed {
            println!("{}", Self::draft_view(&draft));
        }
        self.draft = Some(draft);
        consumed
    }

    fn cmd_add(&mut self, rest: &str) {
        if self.draft.is_some() {
            println!("A draft is already open; 'done' or 'cancel' it first.");
            return;
        }
        match rest.parse::<QuestionKind>() {
            Ok(kind) => {
                let draft = self.session.begin_new(kind);
                println!("{}", Self::draft_view(&draft));
                self.draft = Some(draft);
            }
            Err(_) => println!("Usage: add <id|mc>"),
        }
    }

    fn cmd_edit(&mut self, rest: &str) {
        if self.draft.is_some() {
            println!("A draft is already open; 'done' or 'cancel' it first.");
            return;
        }
        let Some(index) = Self::parse_index(rest) else {
            println!("Usage: edit <question number>");
            return;
        };
        match self.session.edit(index) {
            Ok(draft) => {
                println!("{}", Self::draft_view(&draft));
                self.draft = Some(draft);
            }
            Err(e) => self.report(&e),
        }
    }

    fn cmd_show(&self, rest: &str) {
        let Some(index) = Self::parse_index(rest) else {
            println!("Usage: show <question number>");
            return;
        };
        match self.session.store().get(index) {
            Some(question) => {
                print!("{}", self.formatter.detail(question));
                println!("{}", self.formatter.preview_json(question).dimmed());
            }
            None => println!("{}", "Nothing selected.".yellow()),
        }
    }

    fn cmd_remove(&mut self, rest: &str, rl: &mut DefaultEditor) {
        let Some(index) = Self::parse_index(rest) else {
            println!("Usage: remove <question number>");
            return;
        };
        if self.confirm_remove {
            let prompt = format!("Delete question {}? [y/N] ", index + 1);
            if !matches!(rl.readline(&prompt), Ok(answer) if answer.trim().eq_ignore_ascii_case("y"))
            {
                println!("Kept.");
                return;
            }
        }
        match self.session.remove(index) {
            Ok(removed) => println!("Removed: {}", removed.text()),
            Err(e) => self.report(&e),
        }
    }

    fn cmd_save(&mut self, rest: &str) {
        let path = if rest.is_empty() {
            self.path.clone()
        } else {
            Some(PathBuf::from(rest))
        };
        let Some(path) = path else {
            println!("No file attached. Usage: save <path>");
            return;
        };
        if self.session.store().is_empty() {
            println!("No questions to save.");
            return;
        }
        match self.session.save_to(&self.repository, &path) {
            Ok(count) => {
                println!("Saved {count} question(s) to {}", path.display());
                self.path = Some(path);
            }
            Err(e) => self.report(&e),
        }
    }

    fn cmd_open(&mut self, rest: &str) {
        if rest.is_empty() {
            println!("Usage: open <path>");
            return;
        }
        let path = PathBuf::from(rest);
        match self.session.load_from(&self.repository, &path) {
            Ok(count) => {
                println!("Loaded {count} question(s) from {}", path.display());
                self.path = Some(path);
                self.draft = None;
            }
            Err(e) => self.report(&e),
        }
    }

    fn cmd_new(&mut self, rl: &mut DefaultEditor) {
        if self.session.is_dirty() {
            let answer = rl.readline("Discard unsaved changes? [y/N] ");
            if !matches!(answer, Ok(a) if a.trim().eq_ignore_ascii_case("y")) {
                println!("Kept.");
                return;
            }
        }
        self.session = EditorSession::new();
        self.path = None;
        self.draft = None;
        println!("Started an empty quiz.");
    }

    /// Commit the draft, resolving answer ambiguity through an explicit
    /// prompt. The draft is dropped on success and retained otherwise.
    fn finish_draft(&mut self, mut draft: QuestionDraft, rl: &mut DefaultEditor) {
        loop {
            match self.session.apply(&draft) {
                Ok(index) => {
                    println!("Committed as question {}.", index + 1);
                    if let Some(question) = self.session.store().get(index) {
                        println!("{}", self.formatter.preview_json(question).dimmed());
                    }
                    self.draft = None;
                    return;
                }
                Err(SessionError::Validation(ValidationError::AnswerAmbiguous { choices })) => {
                    println!("{}", "Which choice is the correct answer?".yellow());
                    for (i, choice) in choices.iter().enumerate() {
                        println!("  {}. {choice}", i + 1);
                    }
                    let picked = rl
                        .readline("Answer number (empty to keep editing): ")
                        .ok()
                        .and_then(|s| s.trim().parse::<usize>().ok())
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| choices.get(i).cloned());
                    match picked {
                        Some(answer) => {
                            draft.answer_override = Some(answer);
                            continue;
                        }
                        None => {
                            println!("Still editing; draft kept.");
                            self.draft = Some(draft);
                            return;
                        }
                    }
                }
                Err(e) => {
                    self.report(&e);
                    self.draft = Some(draft);
                    return;
                }
            }
        }
    }

    /// Offer save/discard/cancel when there are unsaved changes. Returns
    /// true if the REPL should exit.
    fn confirm_quit(&mut self, rl: &mut DefaultEditor) -> bool {
        if self.draft.is_some() {
            let answer = rl.readline("Discard the open draft? [y/N] ");
            if !matches!(answer, Ok(a) if a.trim().eq_ignore_ascii_case("y")) {
                return false;
            }
            self.session.cancel();
            self.draft = None;
        }
        if !self.session.is_dirty() {
            println!("Bye!");
            return true;
        }
        match rl.readline("Save changes before quitting? [y/n/c] ") {
            Ok(answer) => match answer.trim().to_ascii_lowercase().as_str() {
                "y" => {
                    let path = match self.path.clone() {
                        Some(path) => Some(path),
                        None => rl
                            .readline("Save to: ")
                            .ok()
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .map(PathBuf::from),
                    };
                    let Some(path) = path else {
                        return false;
                    };
                    match self.session.save_to(&self.repository, &path) {
                        Ok(count) => {
                            println!("Saved {count} question(s) to {}", path.display());
                            println!("Bye!");
                            true
                        }
                        Err(e) => {
                            self.report(&e);
                            false
                        }
                    }
                }
                "n" => {
                    println!("Bye!");
                    true
                }
                _ => false,
            },
            // ^C / ^D at the prompt cancels the quit.
            Err(_) => false,
        }
    }

    fn report(&self, error: &SessionError) {
        match error {
            SessionError::NothingSelected => {
                println!("{}", "Nothing selected.".yellow());
            }
            other => println!("{} {other}", "Error:".red().bold()),
        }
    }

    /// Parse a 1-based question number. Range errors are left to the
    /// session so they surface as "nothing selected" rather than a usage
    /// hint.
    fn parse_index(input: &str) -> Option<usize> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
    }

    /// Parse a 1-based choice slot number.
    fn parse_slot(input: &str) -> Option<usize> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < CHOICE_SLOTS)
    }

    fn draft_view(draft: &QuestionDraft) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Type:".bold(), draft.kind));
        let text = if draft.text.trim().is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            draft.text.clone()
        };
        output.push_str(&format!("{} {text}\n", "Question:".bold()));
        match draft.kind {
            QuestionKind::Identification => {
                let answer = if draft.ident_answer.trim().is_empty() {
                    "(empty)".dimmed().to_string()
                } else {
                    draft.ident_answer.clone()
                };
                output.push_str(&format!("{} {answer}\n", "Answer:".bold()));
            }
            QuestionKind::MultipleChoice => {
                output.push_str(&format!("{}\n", "Choices:".bold()));
                for (i, choice) in draft.choices.iter().enumerate() {
                    let marker = if draft.selected_slot == Some(i) { "*" } else { " " };
                    let content = if choice.trim().is_empty() {
                        "(empty)".dimmed().to_string()
                    } else {
                        choice.clone()
                    };
                    output.push_str(&format!("  {marker} {}. {content}\n", i + 1));
                }
            }
        }
        output
    }
}
