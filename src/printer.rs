//! Printer contract: the sink for run, description and test lifecycle events.
//!
//! The registry drives a printer in this order:
//!
//! ```text
//! start(description_count)
//!   start_describe(name, test_count)
//!     test(name, outcome)            once per test, in declaration order
//!   end_describe(passed, failed)
//!   ...                              once per description, in name order
//! end()
//! ```
//!
//! Printers never decide outcomes; they only render them. Three are provided:
//! [`BehavePrinter`] (the reference textual format), [`PrettyPrinter`] (colored,
//! with failure details) and [`JsonPrinter`] (one JSON document per run).

use std::io;

use crate::outcome::Outcome;

pub mod behave;
pub mod json;
pub mod pretty;

pub use behave::BehavePrinter;
pub use json::JsonPrinter;
pub use pretty::PrettyPrinter;

pub trait Printer {
    fn start(&mut self, _description_count: usize) -> io::Result<()> {
        Ok(())
    }

    fn start_describe(&mut self, name: &str, test_count: usize) -> io::Result<()>;

    fn test(&mut self, name: &str, outcome: &Outcome) -> io::Result<()>;

    /// `failed` counts every test that did not pass, failures and errors alike.
    fn end_describe(&mut self, _passed: usize, _failed: usize) -> io::Result<()> {
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}
