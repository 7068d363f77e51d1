// session.rs

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::rc::Rc;

use itertools::Itertools;
use tracing::info;

use crate::calculator::{Calculator, Operation, SimpleCalculator};
use crate::history::{shared, History, InMemoryHistory};
use crate::parser::{Command, USAGE};

pub const DEFAULT_STORE: &str = "main";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Composition root for the shell: owns the named stores and a calculator
/// bound to one of them.
pub struct Session {
    calculator: SimpleCalculator,
    stores: BTreeMap<String, Rc<RefCell<InMemoryHistory>>>,
    active_name: String,
    active: Rc<RefCell<InMemoryHistory>>,
    history_window: usize,
}

impl Session {
    pub fn new(history_window: usize) -> Self {
        let active = shared(InMemoryHistory::new());
        let mut stores = BTreeMap::new();
        stores.insert(DEFAULT_STORE.to_string(), Rc::clone(&active));
        Self {
            calculator: SimpleCalculator::new(active.clone()),
            stores,
            active_name: DEFAULT_STORE.to_string(),
            active,
            history_window,
        }
    }

    pub fn active_store(&self) -> &str {
        &self.active_name
    }

    pub fn store_names(&self) -> Vec<String> {
        self.stores.keys().cloned().collect()
    }

    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Arith { op, a, b } => {
                let result = match op {
                    Operation::Add => self.calculator.add(a, b),
                    Operation::Subtract => self.calculator.subtract(a, b),
                    Operation::Multiply => self.calculator.multiply(a, b),
                    Operation::Divide => self.calculator.divide(a, b),
                };
                writeln!(out, "{}", result)?;
            }
            Command::History { count } => {
                let store = self.active.borrow();
                let records = store.last_operations(count.unwrap_or(self.history_window));
                let first = store.len() - records.len();
                for (i, record) in records.iter().enumerate() {
                    writeln!(out, "{:>5}  {}", first + i + 1, record)?;
                }
            }
            Command::ClearHistory => {
                self.active.borrow_mut().clear();
                info!(store = %self.active_name, "history cleared");
            }
            Command::Use(name) => self.switch_store(name),
            Command::Stores => {
                let listing = self
                    .stores
                    .iter()
                    .map(|(name, store)| {
                        let marker = if *name == self.active_name { '*' } else { ' ' };
                        format!("{} {} ({})", marker, name, store.borrow().len())
                    })
                    .join("\n");
                writeln!(out, "{}", listing)?;
            }
            Command::Help => {
                writeln!(out, "{}", USAGE.iter().join("\n"))?;
            }
            Command::Exit(code) => return Ok(Flow::Exit(code)),
        }
        Ok(Flow::Continue)
    }

    fn switch_store(&mut self, name: String) {
        let store = Rc::clone(
            self.stores
                .entry(name.clone())
                .or_insert_with(|| shared(InMemoryHistory::new())),
        );
        self.calculator.set_history(store.clone());
        info!(from = %self.active_name, to = %name, "switched history store");
        self.active = store;
        self.active_name = name;
    }
}
