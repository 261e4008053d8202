//! Outcome model: the three-way classification of a test execution.
//!
//! - [`Status`]: the bare OK / FAILURE / ERROR tag handed to printers.
//! - [`Outcome`]: the status together with its payload (a [`Failure`] or a diagnostic).
//! - [`RunSummary`]: tallies accumulated while a description or a whole run executes.

use std::fmt;

use serde::Serialize;

use crate::expectation::Failure;

/// Error type a test body may return. Any `std::error::Error` converts into it with `?`.
pub type TestError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return type of every test body.
pub type TestResult<T = ()> = Result<T, TestError>;

/// Classification of one test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The body completed normally
    Ok,
    /// An expectation did not hold, or an expected error was never raised
    Failure,
    /// Anything else escaped the body
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Failure => "FAILURE",
            Status::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of running one test, reported to the printer and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Failed(Failure),
    Errored { diagnostic: String },
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::Passed => Status::Ok,
            Outcome::Failed(_) => Status::Failure,
            Outcome::Errored { .. } => Status::Error,
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Human-readable explanation of a non-passing outcome. Empty for passed tests and
    /// for errors that carried no message.
    pub fn diagnostic(&self) -> String {
        match self {
            Outcome::Passed => String::new(),
            Outcome::Failed(failure) => failure.to_string(),
            Outcome::Errored { diagnostic } => diagnostic.clone(),
        }
    }
}

/// Pass/fail tallies for a description or a full run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub descriptions: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.status() {
            Status::Ok => self.passed += 1,
            Status::Failure => self.failed += 1,
            Status::Error => self.errored += 1,
        }
    }

    /// Folds the tallies of one description into a run-wide summary.
    pub fn absorb(&mut self, description: RunSummary) {
        self.descriptions += 1;
        self.passed += description.passed;
        self.failed += description.failed;
        self.errored += description.errored;
    }

    pub fn total_tests(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    /// Tests that did not pass, whether they failed or errored.
    pub fn unsuccessful(&self) -> usize {
        self.failed + self.errored
    }

    pub fn has_failures(&self) -> bool {
        self.unsuccessful() > 0
    }

    pub fn success_rate(&self) -> f64 {
        if self.total_tests() == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total_tests() as f64) * 100.0
    }
}
