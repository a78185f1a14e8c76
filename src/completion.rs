// completion.rs

use crate::exec::is_executable;
use crate::parser::BUILTINS;
use itertools::Itertools;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Completes the first word of the line from builtins and `PATH` executables.
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        let builtins = BUILTINS.iter().filter(|b| b.starts_with(prefix)).map(|b| b.to_string());
        builtins.chain(path_executables(prefix)).sorted().dedup().collect()
    }
}

impl Default for CommandCompleter {
    fn default() -> Self {
        Self::new()
    }
}

fn path_executables(prefix: &str) -> Vec<String> {
    let Some(path_var) = std::env::var_os("PATH") else {
        return Vec::new();
    };
    let mut names = Vec::new();
    for dir in std::env::split_paths(&path_var) {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with(prefix) && is_executable(&entry.path()) {
                names.push(name.to_string());
            }
        }
    }
    names
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        // arguments are never completed
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let completions = self
            .candidates(prefix)
            .into_iter()
            .map(|n| Pair { display: n.clone(), replacement: format!("{} ", n) })
            .collect();
        Ok((0, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}
