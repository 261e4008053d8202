//! Shared fixtures for the integration tests: an event-recording printer and the
//! reference `Integer` / `Test` descriptions.
#![allow(dead_code)]

use std::io;

use describeit::prelude::*;

/// Records every printer event as one line of text.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<String>,
}

impl Printer for EventLog {
    fn start(&mut self, description_count: usize) -> io::Result<()> {
        self.events.push(format!("start {}", description_count));
        Ok(())
    }

    fn start_describe(&mut self, name: &str, test_count: usize) -> io::Result<()> {
        self.events
            .push(format!("describe {} {}", name, test_count));
        Ok(())
    }

    fn test(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        self.events.push(format!("test {} {}", name, outcome.status()));
        Ok(())
    }

    fn end_describe(&mut self, passed: usize, failed: usize) -> io::Result<()> {
        self.events.push(format!("end_describe {} {}", passed, failed));
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        self.events.push("end".to_string());
        Ok(())
    }
}

impl EventLog {
    pub fn test_events(&self) -> usize {
        self.events.iter().filter(|e| e.starts_with("test ")).count()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("custom error")]
pub struct CustomError;

pub fn raise_custom() -> Result<(), CustomError> {
    Err(CustomError)
}

describe! {
    pub fn integer("Integer") {
        it "should handle addition" {
            expect(1000 + 337).equals(1337)?;
        }
        it "should handle subtraction" {
            expect(1000).equals(1337)?;
        }
        it "passes multiplication" {
            expect(3 * 2).equals(6)?;
        }
    }
}

describe! {
    pub fn test_cases("Test") {
        it "should raise custom exception" {
            raise_custom()?;
        }
        it "should raise standard exception" {
            "x".parse::<u8>()?;
        }
        it "should fail in expect" {
            expect(2).equals(3)?;
        }
    }
}

pub const REFERENCE_OUTPUT: &str = "Integer\n\
- should handle addition\n\
- should handle subtraction (FAILED)\n\
- passes multiplication\n\
Test\n\
- should raise custom exception (ERROR)\n\
- should raise standard exception (ERROR)\n\
- should fail in expect (FAILED)\n";

/// Registry holding the reference scenario, declared `Test` first.
pub fn reference_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .declare_all(&[test_cases, integer])
        .expect("reference declarations register");
    registry
}

pub fn render(registry: &Registry) -> String {
    let mut printer = BehavePrinter::new(Vec::new());
    registry.run_all(&mut printer).expect("run succeeds");
    String::from_utf8(printer.into_inner()).expect("printer writes utf-8")
}
