//! CLI entrypoint for quizsmith
//!
//! This is the main binary that wires together all layers: it parses the
//! command line, loads configuration, constructs the file repository, and
//! hands control to the editor REPL (or runs the one-shot check mode).

use anyhow::{Result, bail};
use clap::Parser;
use quizsmith_application::QuizRepository;
use quizsmith_domain::QuestionStore;
use quizsmith_infrastructure::{ConfigLoader, JsonFileRepository};
use quizsmith_presentation::{Cli, ConsoleFormatter, EditorRepl, ReplOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting quizsmith");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let repository = JsonFileRepository::new().with_pretty(config.files.pretty);
    let file = cli.file.clone().or_else(|| config.files.default_path.clone());

    // One-shot audit mode
    if cli.check {
        let Some(path) = file else {
            bail!("--check needs a quiz file (argument or files.default_path in config)");
        };
        let questions = repository.load(&path)?;
        let formatter = ConsoleFormatter::new(config.editor.preview_len);
        let (report, problems) = formatter.audit(&QuestionStore::from_questions(questions));
        print!("{report}");
        if problems > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Interactive editor
    let options = ReplOptions {
        preview_len: config.editor.preview_len,
        confirm_remove: config.editor.confirm_remove,
    };
    let mut repl = EditorRepl::new(repository, options);
    if let Some(path) = file {
        if let Err(e) = repl.attach(path.clone()) {
            // The editor stays usable over an empty quiz; the broken file
            // on disk is untouched.
            eprintln!("Could not load {}: {e}", path.display());
        }
    }
    repl.run()?;

    Ok(())
}
