//! # describeit
//!
//! A minimal behavior-driven test registration and execution engine.
//!
//! Descriptions are declared with [`describe!`], collected into a [`Registry`] and run
//! against a [`Printer`]. Every test yields exactly one [`Outcome`]: passed, failed (an
//! expectation did not hold) or errored (anything else escaped the body).

pub mod boundary;
pub mod cli;
pub mod config;
pub mod errors;
pub mod expectation;
pub mod macros;
pub mod outcome;
pub mod printer;
pub mod registrar;
pub mod registry;

pub use crate::errors::DescribeError;
pub use crate::expectation::{expect, expect_error, Comparison, Expectation, Failure, Location};
pub use crate::outcome::{Outcome, RunSummary, Status, TestError, TestResult};
pub use crate::printer::{BehavePrinter, JsonPrinter, PrettyPrinter, Printer};
pub use crate::registrar::{next_order_key, Description, DescriptionRegistrar, Suite};
pub use crate::registry::{Declaration, Registry};

/// Everything a test file needs.
pub mod prelude {
    pub use crate::{
        describe, describeit_main, expect, expect_error, BehavePrinter, Description, Outcome,
        Printer, Registry, Status, TestResult,
    };
}
