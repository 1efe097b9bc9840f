//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::config::{data_dir, Settings};
use crate::error::Result;
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::path::PathBuf;
use textile_assistant::Assistant;
use textile_domain::traits::CompletionProvider;
use tracing::{debug, warn};

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// Leave the loop
    Exit,
    /// Blank line
    Skip,
    /// A product question
    Query(&'a str),
}

/// Parse a REPL input line.
pub fn parse_repl_line(line: &str) -> ReplCommand<'_> {
    let line = line.trim();
    if line.is_empty() {
        ReplCommand::Skip
    } else if line.eq_ignore_ascii_case("exit") {
        ReplCommand::Exit
    } else {
        ReplCommand::Query(line)
    }
}

/// Answer one query and render the outcome.
///
/// Every failure is rendered here; nothing propagates past a single turn.
pub fn run_turn<P>(assistant: &Assistant<P>, formatter: &Formatter, query: &str) -> String
where
    P: CompletionProvider,
    P::Error: Display,
{
    let rendered = match assistant.answer(query) {
        Ok(answer) => formatter.format_answer(&answer),
        Err(e) => {
            warn!("Query failed: {}", e);
            formatter.format_failure(&e)
        }
    };

    rendered.unwrap_or_else(|e| formatter.error(&e.to_string()))
}

/// Run the interactive REPL.
pub fn run_repl<P>(assistant: &Assistant<P>, formatter: &Formatter, settings: &Settings) -> Result<()>
where
    P: CompletionProvider,
    P::Error: Display,
{
    println!("{}", formatter.welcome());

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("\n> ") {
            Ok(line) => match parse_repl_line(&line) {
                ReplCommand::Skip => continue,
                ReplCommand::Exit => break,
                ReplCommand::Query(query) => {
                    editor.add_history_entry(query).ok();
                    debug!("Query: {}", query);
                    println!("\n{}", run_turn(assistant, formatter, query));
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    if let Some(path) = &history_path {
        editor.save_history(path).ok();
    }

    Ok(())
}

fn get_history_path() -> Option<PathBuf> {
    let dir = data_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("history.txt"))
}
