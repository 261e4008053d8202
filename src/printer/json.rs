//! Machine-readable report: one JSON document written when the run ends.

use std::io::{self, Write};

use serde::Serialize;

use super::Printer;
use crate::outcome::{Outcome, RunSummary, Status};

#[derive(Debug, Default, Serialize)]
pub struct JsonReport {
    pub descriptions: Vec<JsonDescription>,
    pub summary: RunSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonDescription {
    pub name: String,
    pub tests: Vec<JsonTest>,
}

#[derive(Debug, Serialize)]
pub struct JsonTest {
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub diagnostic: String,
}

pub struct JsonPrinter<W: Write> {
    out: W,
    report: JsonReport,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: JsonReport::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for JsonPrinter<W> {
    fn start(&mut self, _description_count: usize) -> io::Result<()> {
        self.report = JsonReport::default();
        Ok(())
    }

    fn start_describe(&mut self, name: &str, test_count: usize) -> io::Result<()> {
        self.report.descriptions.push(JsonDescription {
            name: name.to_string(),
            tests: Vec::with_capacity(test_count),
        });
        Ok(())
    }

    fn test(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        self.report.summary.record(outcome);
        let test = JsonTest {
            name: name.to_string(),
            status: outcome.status(),
            diagnostic: outcome.diagnostic(),
        };
        match self.report.descriptions.last_mut() {
            Some(description) => description.tests.push(test),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("test `{}` reported outside of a description", name),
                ))
            }
        }
        Ok(())
    }

    fn end_describe(&mut self, _passed: usize, _failed: usize) -> io::Result<()> {
        self.report.summary.descriptions += 1;
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn writes_one_document_at_end() {
        let mut printer = JsonPrinter::new(Vec::new());
        printer.start(1).unwrap();
        printer.start_describe("Test", 2).unwrap();
        printer.test("ok", &Outcome::Passed).unwrap();
        printer
            .test(
                "boom",
                &Outcome::Errored {
                    diagnostic: "custom".to_string(),
                },
            )
            .unwrap();
        printer.end_describe(1, 1).unwrap();
        printer.end().unwrap();

        let json: Value = serde_json::from_slice(&printer.into_inner()).unwrap();
        assert_eq!(json["descriptions"][0]["name"], "Test");
        assert_eq!(json["descriptions"][0]["tests"][0]["status"], "OK");
        assert!(json["descriptions"][0]["tests"][0].get("diagnostic").is_none());
        assert_eq!(json["descriptions"][0]["tests"][1]["status"], "ERROR");
        assert_eq!(json["descriptions"][0]["tests"][1]["diagnostic"], "custom");
        assert_eq!(json["summary"]["errored"], 1);
        assert_eq!(json["summary"]["descriptions"], 1);
    }

    #[test]
    fn test_outside_description_is_rejected() {
        let mut printer = JsonPrinter::new(Vec::new());
        let error = printer.test("orphan", &Outcome::Passed).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }
}
