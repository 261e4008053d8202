//! Colored terminal output with failure details and a closing summary.

use std::io::{self, Write};

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::Printer;
use crate::expectation::Failure;
use crate::outcome::{Outcome, RunSummary};

/// Rendered values at least this long also get an inline character diff.
const INLINE_DIFF_THRESHOLD: usize = 24;

pub struct PrettyPrinter<W: WriteColor> {
    out: W,
    summary: RunSummary,
}

impl PrettyPrinter<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> PrettyPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            summary: RunSummary::default(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, text: &str, color: Color, bold: bool) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn print_failure(&mut self, failure: &Failure) -> io::Result<()> {
        writeln!(self.out, "      at {}", failure.location)?;
        writeln!(self.out, "      expected: {}", failure.expected)?;
        writeln!(self.out, "      actual:   {}", failure.actual)?;
        if failure.expected.len() >= INLINE_DIFF_THRESHOLD
            && failure.actual.len() >= INLINE_DIFF_THRESHOLD
        {
            let changeset = Changeset::new(&failure.expected, &failure.actual, "");
            write!(self.out, "      diff:     ")?;
            self.print_diff(&changeset.diffs)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn print_diff(&mut self, diffs: &[Difference]) -> io::Result<()> {
        for diff in diffs {
            match diff {
                Difference::Same(ref x) => write!(self.out, "{}", x)?,
                Difference::Add(ref x) => self.paint(x, Color::Green, false)?,
                Difference::Rem(ref x) => self.paint(x, Color::Red, false)?,
            }
        }
        Ok(())
    }
}

impl<W: WriteColor> Printer for PrettyPrinter<W> {
    fn start(&mut self, description_count: usize) -> io::Result<()> {
        writeln!(self.out, "Running {} description(s)", description_count)
    }

    fn start_describe(&mut self, name: &str, test_count: usize) -> io::Result<()> {
        writeln!(self.out)?;
        self.paint(name, Color::Cyan, true)?;
        writeln!(self.out, " ({} test(s))", test_count)
    }

    fn test(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        self.summary.record(outcome);
        write!(self.out, "  ")?;
        match outcome {
            Outcome::Passed => {
                self.paint("PASS", Color::Green, true)?;
                writeln!(self.out, " {}", name)
            }
            Outcome::Failed(failure) => {
                self.paint("FAIL", Color::Red, true)?;
                writeln!(self.out, " {}", name)?;
                self.print_failure(failure)
            }
            Outcome::Errored { diagnostic } => {
                self.paint("ERROR", Color::Yellow, true)?;
                writeln!(self.out, " {}", name)?;
                if !diagnostic.is_empty() {
                    writeln!(self.out, "      {}", diagnostic)?;
                }
                Ok(())
            }
        }
    }

    fn end_describe(&mut self, _passed: usize, _failed: usize) -> io::Result<()> {
        self.summary.descriptions += 1;
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        let summary = self.summary;
        write!(self.out, "\nTest summary: total {}, ", summary.total_tests())?;
        self.paint("passed", Color::Green, false)?;
        write!(self.out, " {}, ", summary.passed)?;
        self.paint("failed", Color::Red, false)?;
        write!(self.out, " {}, ", summary.failed)?;
        self.paint("errored", Color::Yellow, false)?;
        writeln!(self.out, " {}", summary.errored)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectation::expect;
    use termcolor::{Ansi, NoColor};

    fn render(events: impl FnOnce(&mut PrettyPrinter<NoColor<Vec<u8>>>)) -> String {
        let mut printer = PrettyPrinter::new(NoColor::new(Vec::new()));
        events(&mut printer);
        String::from_utf8(printer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn failure_shows_location_and_both_sides() {
        let failure = expect(1000).equals(1337).unwrap_err();
        let text = render(|p| {
            p.start_describe("Integer", 1).unwrap();
            p.test("should handle subtraction", &Outcome::Failed(failure))
                .unwrap();
        });

        assert!(text.contains("FAIL should handle subtraction"));
        assert!(text.contains("expected: 1337"));
        assert!(text.contains("actual:   1000"));
        assert!(text.contains("pretty.rs"));
        assert!(!text.contains("diff:"));
    }

    #[test]
    fn long_values_get_an_inline_diff() {
        let failure = expect("the quick brown fox jumps").equals("the quick brown cat jumps");
        let text = render(|p| {
            p.test("long", &Outcome::Failed(failure.unwrap_err())).unwrap();
        });
        assert!(text.contains("diff:"));
    }

    fn painted(line: &str, code: &str) -> String {
        line.split(code)
            .skip(1)
            .map(|chunk| chunk.split('\x1b').next().unwrap_or(""))
            .collect()
    }

    #[test]
    fn inline_diff_paints_actual_green_and_expected_red() {
        let failure = expect("the quick brown fox jumps")
            .equals("the quick brown cat jumps")
            .unwrap_err();
        let mut printer = PrettyPrinter::new(Ansi::new(Vec::new()));
        printer.test("long", &Outcome::Failed(failure)).unwrap();
        let text = String::from_utf8(printer.into_inner().into_inner()).unwrap();

        let diff = text.lines().find(|l| l.contains("diff:")).unwrap();
        assert_eq!(painted(diff, "\x1b[32m"), "fox");
        assert_eq!(painted(diff, "\x1b[31m"), "cat");
    }

    #[test]
    fn summary_line_counts_every_status() {
        let text = render(|p| {
            p.start(1).unwrap();
            p.start_describe("Suite", 2).unwrap();
            p.test("a", &Outcome::Passed).unwrap();
            p.test(
                "b",
                &Outcome::Errored {
                    diagnostic: "boom".to_string(),
                },
            )
            .unwrap();
            p.end_describe(1, 1).unwrap();
            p.end().unwrap();
        });

        assert!(text.starts_with("Running 1 description(s)"));
        assert!(text.contains("ERROR b\n      boom"));
        assert!(text.contains("Test summary: total 2, passed 1, failed 0, errored 1"));
    }
}
