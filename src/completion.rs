// completion.rs

use std::cell::RefCell;

use itertools::Itertools;
use rustyline::completion::{Completer, Pair};
use rustyline::hint::Hinter;
use rustyline::highlight::Highlighter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::parser::COMMANDS;

/// Completes command names in first position and store names after `use`.
pub struct CommandCompleter {
    pub store_names: RefCell<Vec<String>>,
}

impl CommandCompleter {
    pub fn new(store_names: Vec<String>) -> Self {
        Self {
            store_names: RefCell::new(store_names),
        }
    }

    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let start = before
            .rfind(|c: char| c.is_ascii_whitespace())
            .map_or(0, |i| i + 1);
        let prefix = &before[start..];
        let previous: Vec<&str> = before[..start].split_whitespace().collect();
        let names: Vec<String> = match previous.as_slice() {
            [] => COMMANDS
                .iter()
                .filter(|c| c.starts_with(prefix))
                .map(|c| c.to_string())
                .sorted()
                .collect(),
            ["use"] => self
                .store_names
                .borrow()
                .iter()
                .filter(|s| s.starts_with(prefix))
                .cloned()
                .sorted()
                .dedup()
                .collect(),
            _ => Vec::new(),
        };
        (start, names)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = self.candidates(line, pos);
        let completions = names
            .into_iter()
            .map(|n| Pair {
                replacement: format!("{} ", n),
                display: n,
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
