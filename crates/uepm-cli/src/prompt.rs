//! Asking the user for input.
//!
//! With the `interactive` feature and a terminal on stderr, prompts are
//! drawn by `dialoguer`. Otherwise one line is read from stdin, which keeps
//! piped and scripted use working.

use std::io::{self, BufRead, Write};

use uepm_core::{domain::DomainValidator, error::UepmError};

use crate::error::{CliError, CliResult, IntoCli};

/// Source of answers for commands that need them.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask for a line of text. An empty answer yields `default` when given.
    fn ask(&self, prompt: &str, default: Option<String>) -> CliResult<String>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str, default: Option<String>) -> CliResult<String> {
        if let Some(answer) = ask_styled(prompt, default.as_deref()) {
            return answer;
        }
        ask_line(prompt, default)
    }
}

/// Ask a yes/no question.
///
/// Answers starting with `y` confirm, answers starting with `n` decline,
/// anything else is rejected as invalid input.
pub fn confirm(prompter: &dyn Prompter, question: &str) -> CliResult<bool> {
    let answer = prompter.ask(&format!("{question} [y/n]"), None)?;
    DomainValidator::parse_confirmation(&answer)
        .map_err(|e| CliError::Core(UepmError::from(e)))
}

#[cfg(feature = "interactive")]
fn ask_styled(prompt: &str, default: Option<&str>) -> Option<CliResult<String>> {
    if !console::Term::stderr().is_term() {
        return None;
    }

    let mut input = dialoguer::Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_owned());
    }

    Some(input.interact_text().map_err(|e| CliError::IoError {
        message: "failed to read answer".into(),
        source: io::Error::other(e),
    }))
}

#[cfg(not(feature = "interactive"))]
fn ask_styled(_prompt: &str, _default: Option<&str>) -> Option<CliResult<String>> {
    None
}

fn ask_line(prompt: &str, default: Option<String>) -> CliResult<String> {
    let mut stderr = io::stderr();
    match &default {
        Some(d) => write!(stderr, "{prompt} [{d}]: "),
        None => write!(stderr, "{prompt}: "),
    }
    .and_then(|()| stderr.flush())
    .with_cli_context(|| "failed to write prompt")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .with_cli_context(|| "failed to read answer")?;

    let answer = line.trim();
    match (answer.is_empty(), default) {
        (false, _) => Ok(answer.to_owned()),
        (true, Some(default)) => Ok(default),
        (true, None) if read == 0 => Err(CliError::InvalidInput {
            message: format!("no answer to '{prompt}' (input closed)"),
            source: None,
        }),
        (true, None) => Ok(String::new()),
    }
}
