//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quizsmith
#[derive(Parser, Debug)]
#[command(name = "quizsmith")]
#[command(author, version, about = "Author identification and multiple-choice quizzes as JSON")]
#[command(long_about = r#"
Quizsmith is an interactive editor for quiz question sets. A quiz is a JSON
array of questions; each question is either an identification item (free
answer, judged by exact match) or a multiple-choice item (2+ choices, one
correct).

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./quizsmith.toml      Project-level config
3. ~/.config/quizsmith/config.toml   Global config

Example:
  quizsmith geography.json          Edit a quiz (created on first save)
  quizsmith --check geography.json  Audit a quiz file and exit
"#)]
pub struct Cli {
    /// Quiz file to open (falls back to `files.default_path` from config)
    pub file: Option<PathBuf>,

    /// Load the quiz, audit every question against the data-model rules,
    /// print a summary, and exit (non-zero if anything is wrong)
    #[arg(long)]
    pub check: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_file_and_check() {
        let cli = Cli::parse_from(["quizsmith", "--check", "geography.json"]);
        assert!(cli.check);
        assert_eq!(cli.file.unwrap(), PathBuf::from("geography.json"));
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::parse_from(["quizsmith", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
