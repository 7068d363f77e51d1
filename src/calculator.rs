// calculator.rs

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::history::SharedHistory;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Renders one operation record, e.g. `-5 + -3 = -8`.
pub fn format_record(a: i32, op: Operation, b: i32, result: i32) -> String {
    format!("{} {} {} = {}", a, op, b, result)
}

/// Integer arithmetic that reports every successful call to a history sink.
///
/// Add, subtract and multiply wrap on overflow. Division truncates toward
/// zero and panics when the divisor is zero; a panicking call leaves the
/// history untouched.
pub trait Calculator {
    fn add(&self, a: i32, b: i32) -> i32;
    fn subtract(&self, a: i32, b: i32) -> i32;
    fn multiply(&self, a: i32, b: i32) -> i32;
    fn divide(&self, a: i32, b: i32) -> i32;

    /// Routes all later records to `history`. Records already written stay
    /// where they are.
    fn set_history(&mut self, history: SharedHistory);
}

pub struct SimpleCalculator {
    history: SharedHistory,
}

impl SimpleCalculator {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    pub fn history(&self) -> SharedHistory {
        Rc::clone(&self.history)
    }

    fn log_operation(&self, a: i32, op: Operation, b: i32, result: i32) {
        let record = format_record(a, op, b, result);
        debug!(%op, a, b, result, "recording operation");
        self.history.borrow_mut().add_entry(record);
    }
}

impl Calculator for SimpleCalculator {
    fn add(&self, a: i32, b: i32) -> i32 {
        let result = a.wrapping_add(b);
        self.log_operation(a, Operation::Add, b, result);
        result
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        let result = a.wrapping_sub(b);
        self.log_operation(a, Operation::Subtract, b, result);
        result
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        let result = a.wrapping_mul(b);
        self.log_operation(a, Operation::Multiply, b, result);
        result
    }

    fn divide(&self, a: i32, b: i32) -> i32 {
        assert!(b != 0, "attempt to divide {} by zero", a);
        // i32::MIN / -1 wraps to i32::MIN
        let result = a.wrapping_div(b);
        self.log_operation(a, Operation::Divide, b, result);
        result
    }

    fn set_history(&mut self, history: SharedHistory) {
        debug!("rebinding calculator history");
        self.history = history;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{shared, History, InMemoryHistory};
    use std::cell::RefCell;

    /// Counts every call so tests can insist on exactly one append.
    #[derive(Default)]
    struct RecordingHistory {
        calls: Vec<String>,
    }

    impl History for RecordingHistory {
        fn add_entry(&mut self, record: String) {
            self.calls.push(record);
        }
        fn last_operations(&self, _count: usize) -> Vec<String> {
            panic!("calculator must not read history");
        }
    }

    fn recording() -> (Rc<RefCell<RecordingHistory>>, SimpleCalculator) {
        let history = shared(RecordingHistory::default());
        let calculator = SimpleCalculator::new(history.clone());
        (history, calculator)
    }

    #[test]
    fn add_logs_operation() {
        let (history, calc) = recording();
        assert_eq!(calc.add(2, 2), 4);
        assert_eq!(history.borrow().calls, vec!["2 + 2 = 4"]);
    }

    #[test]
    fn subtract_logs_operation() {
        let (history, calc) = recording();
        assert_eq!(calc.subtract(4, 3), 1);
        assert_eq!(calc.subtract(3, 10), -7);
        assert_eq!(history.borrow().calls, vec!["4 - 3 = 1", "3 - 10 = -7"]);
    }

    #[test]
    fn multiply_logs_operation() {
        let (history, calc) = recording();
        assert_eq!(calc.multiply(3, 3), 9);
        assert_eq!(history.borrow().calls, vec!["3 * 3 = 9"]);
    }

    #[test]
    fn divide_logs_operation() {
        let (history, calc) = recording();
        assert_eq!(calc.divide(6, 3), 2);
        assert_eq!(history.borrow().calls, vec!["6 / 3 = 2"]);
    }

    #[test]
    fn division_truncates_toward_zero() {
        let (history, calc) = recording();
        assert_eq!(calc.divide(5, 2), 2);
        assert_eq!(calc.divide(-7, 2), -3);
        assert_eq!(calc.divide(7, -2), -3);
        assert_eq!(
            history.borrow().calls,
            vec!["5 / 2 = 2", "-7 / 2 = -3", "7 / -2 = -3"]
        );
    }

    #[test]
    fn negative_operands() {
        let (history, calc) = recording();
        assert_eq!(calc.add(-5, -3), -8);
        assert_eq!(history.borrow().calls, vec!["-5 + -3 = -8"]);
    }

    #[test]
    fn add_with_max_value() {
        let (history, calc) = recording();
        assert_eq!(calc.add(i32::MAX, 0), i32::MAX);
        assert_eq!(history.borrow().calls, vec!["2147483647 + 0 = 2147483647"]);
    }

    #[test]
    fn overflow_wraps() {
        let (history, calc) = recording();
        assert_eq!(calc.add(i32::MAX, 1), i32::MIN);
        assert_eq!(calc.subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(calc.multiply(i32::MAX, 2), -2);
        assert_eq!(calc.divide(i32::MIN, -1), i32::MIN);
        assert_eq!(history.borrow().calls.len(), 4);
        assert_eq!(history.borrow().calls[3], "-2147483648 / -1 = -2147483648");
    }

    #[test]
    #[should_panic(expected = "by zero")]
    fn divide_by_zero_panics() {
        let (_history, calc) = recording();
        calc.divide(1, 0);
    }

    #[test]
    fn divide_by_zero_leaves_history_untouched() {
        let (history, calc) = recording();
        calc.add(1, 1);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| calc.divide(1, 0)));
        assert!(outcome.is_err());
        assert_eq!(history.borrow().calls, vec!["1 + 1 = 2"]);
    }

    #[test]
    fn set_history_redirects_later_records() {
        let first = shared(InMemoryHistory::new());
        let second = shared(InMemoryHistory::new());
        let mut calc = SimpleCalculator::new(first.clone());

        calc.add(1, 1);
        calc.set_history(second.clone());
        calc.multiply(2, 2);

        assert_eq!(first.borrow().entries(), ["1 + 1 = 2"]);
        assert_eq!(second.borrow().entries(), ["2 * 2 = 4"]);
        assert_eq!(calc.history().borrow().last_operations(5), ["2 * 2 = 4"]);
    }

    #[test]
    fn operation_symbols() {
        let symbols: Vec<String> = [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
    }
}
