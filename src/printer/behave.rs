//! The reference textual format.
//!
//! ```text
//! Integer
//! - should handle addition
//! - should handle subtraction (FAILED)
//! ```
//!
//! One line per description name, one `- <test name>` line per test with ` (FAILED)` or
//! ` (ERROR)` appended for non-passing tests. Nothing else is ever written, so the output
//! is stable byte for byte.

use std::io::{self, Write};

use super::Printer;
use crate::outcome::{Outcome, Status};

pub struct BehavePrinter<W: Write> {
    out: W,
}

impl<W: Write> BehavePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for BehavePrinter<W> {
    fn start_describe(&mut self, name: &str, _test_count: usize) -> io::Result<()> {
        writeln!(self.out, "{}", name)
    }

    fn test(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        let suffix = match outcome.status() {
            Status::Ok => "",
            Status::Failure => " (FAILED)",
            Status::Error => " (ERROR)",
        };
        writeln!(self.out, "- {}{}", name, suffix)
    }

    fn end(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectation::expect;

    #[test]
    fn renders_each_status_suffix() {
        let mut printer = BehavePrinter::new(Vec::new());
        let failure = expect(1).equals(2).unwrap_err();

        printer.start(1).unwrap();
        printer.start_describe("Suite", 3).unwrap();
        printer.test("passes", &Outcome::Passed).unwrap();
        printer.test("fails", &Outcome::Failed(failure)).unwrap();
        printer
            .test(
                "errors",
                &Outcome::Errored {
                    diagnostic: "boom".to_string(),
                },
            )
            .unwrap();
        printer.end_describe(1, 2).unwrap();
        printer.end().unwrap();

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(text, "Suite\n- passes\n- fails (FAILED)\n- errors (ERROR)\n");
    }

    #[test]
    fn empty_description_is_just_its_name() {
        let mut printer = BehavePrinter::new(Vec::new());
        printer.start_describe("Empty", 0).unwrap();
        printer.end_describe(0, 0).unwrap();
        assert_eq!(printer.into_inner(), b"Empty\n");
    }
}
