//! Integer calculator that traces every operation into a swappable history.
//!
//! ```
//! use calc_history::{shared, Calculator, History, InMemoryHistory, SimpleCalculator};
//!
//! let history = shared(InMemoryHistory::new());
//! let calculator = SimpleCalculator::new(history.clone());
//!
//! assert_eq!(calculator.add(2, 2), 4);
//! assert_eq!(calculator.divide(5, 2), 2);
//! assert_eq!(history.borrow().last_operations(2), ["2 + 2 = 4", "5 / 2 = 2"]);
//! ```

pub mod calculator;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod parser;
pub mod repl;
pub mod session;

pub use calculator::{format_record, Calculator, Operation, SimpleCalculator};
pub use history::{shared, History, InMemoryHistory, SharedHistory};
