// history.rs

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

/// Sink for operation records.
pub trait History {
    fn add_entry(&mut self, record: String);

    /// Returns the last `count` records in insertion order, or every record
    /// when fewer than `count` are stored.
    fn last_operations(&self, count: usize) -> Vec<String>;
}

/// Handle through which calculators reach a store they do not own.
pub type SharedHistory = Rc<RefCell<dyn History>>;

pub fn shared<H: History + 'static>(history: H) -> Rc<RefCell<H>> {
    Rc::new(RefCell::new(history))
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryHistory {
    entries: Vec<String>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for InMemoryHistory {
    fn add_entry(&mut self, record: String) {
        self.entries.push(record);
    }

    fn last_operations(&self, count: usize) -> Vec<String> {
        let start = self.entries.len() - count.min(self.entries.len());
        trace!(count, start, stored = self.entries.len(), "reading history");
        self.entries[start..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(records: &[&str]) -> InMemoryHistory {
        let mut history = InMemoryHistory::new();
        for r in records {
            history.add_entry(r.to_string());
        }
        history
    }

    #[test]
    fn stores_and_returns_single_operation() {
        let history = filled(&["1 + 1 = 2"]);
        assert_eq!(history.last_operations(1), vec!["1 + 1 = 2"]);
    }

    #[test]
    fn returns_last_n_in_insertion_order() {
        let history = filled(&["1 + 1 = 2", "2 * 2 = 4", "4 - 3 = 1"]);
        assert_eq!(history.last_operations(2), vec!["2 * 2 = 4", "4 - 3 = 1"]);
    }

    #[test]
    fn count_larger_than_len_returns_everything() {
        let history = filled(&["1 + 1 = 2", "2 * 2 = 4"]);
        assert_eq!(history.last_operations(10), vec!["1 + 1 = 2", "2 * 2 = 4"]);
        assert_eq!(history.last_operations(usize::MAX).len(), 2);
    }

    #[test]
    fn zero_count_and_empty_store() {
        let history = filled(&["1 + 1 = 2"]);
        assert!(history.last_operations(0).is_empty());
        assert!(InMemoryHistory::new().last_operations(3).is_empty());
    }

    #[test]
    fn accepts_any_text_and_clears() {
        let mut history = filled(&["", "not a record"]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries(), ["", "not a record"]);
        history.clear();
        assert!(history.is_empty());
    }
}
