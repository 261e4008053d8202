//! # Registry
//!
//! Process-wide owner of every description and the driver of a full run.
//!
//! ## Usage Workflow
//! ```rust
//! use describeit::prelude::*;
//!
//! describe! {
//!     fn arithmetic("Arithmetic") {
//!         it "adds" { expect(1 + 1).equals(2)?; }
//!     }
//! }
//!
//! // 1. Collect every declaration explicitly
//! let mut registry = Registry::new();
//! registry.declare_all(&[arithmetic]).unwrap();
//! // 2. Run against a printer
//! let mut printer = BehavePrinter::new(Vec::new());
//! let summary = registry.run_all(&mut printer).unwrap();
//! assert_eq!(summary.passed, 1);
//! assert_eq!(printer.into_inner(), b"Arithmetic\n- adds\n");
//! ```
//!
//! Descriptions are keyed by name in an ordered map, so they report in ascending name
//! order, not declaration order. Registering a name twice replaces the earlier entry.
//!
//! [`instance`] exposes the lazily created singleton; [`Registry::new`] builds
//! independent registries.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::errors::DescribeError;
use crate::outcome::RunSummary;
use crate::printer::Printer;
use crate::registrar::Suite;

/// A registration function, as produced by [`describe!`](crate::describe).
pub type Declaration = fn(&mut Registry) -> Result<(), DescribeError>;

#[derive(Default)]
pub struct Registry {
    descriptions: BTreeMap<String, Box<dyn Suite>>,
    torn_down: bool,
}

static INSTANCE: Lazy<Mutex<Registry>> = Lazy::new(|| {
    debug!("creating process-wide registry");
    Mutex::new(Registry::new())
});

/// Returns the process-wide registry, creating it on first use.
///
/// The guard holds the registry lock; test bodies must not call this while a run is in
/// progress.
pub fn instance() -> Result<MutexGuard<'static, Registry>, DescribeError> {
    INSTANCE.lock().map_err(|_| DescribeError::Poisoned)
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the description registered under the suite's name.
    pub fn register_describe<S: Suite + 'static>(&mut self, suite: S) -> Result<(), DescribeError> {
        self.ensure_live()?;
        let name = suite.name().to_string();
        debug!(description = %name, tests = suite.test_count(), "registering description");
        if self.descriptions.insert(name.clone(), Box::new(suite)).is_some() {
            warn!(description = %name, "description registered twice; last registration wins");
        }
        Ok(())
    }

    /// The collection phase: runs every declaration against this registry.
    pub fn declare_all(&mut self, declarations: &[Declaration]) -> Result<(), DescribeError> {
        for declare in declarations {
            declare(self)?;
        }
        Ok(())
    }

    pub fn descriptions_count(&self) -> usize {
        self.descriptions.len()
    }

    /// Description names in report order.
    pub fn description_names(&self) -> impl Iterator<Item = &str> {
        self.descriptions.keys().map(String::as_str)
    }

    /// Runs every registered description in ascending name order.
    pub fn run_all(&self, printer: &mut dyn Printer) -> Result<RunSummary, DescribeError> {
        self.ensure_live()?;
        debug!(descriptions = self.descriptions.len(), "starting run");
        printer.start(self.descriptions.len())?;

        let mut summary = RunSummary::default();
        for suite in self.descriptions.values() {
            summary.absorb(suite.run_tests(printer)?);
        }

        printer.end()?;
        debug!(
            passed = summary.passed,
            failed = summary.failed,
            errored = summary.errored,
            "run finished"
        );
        Ok(summary)
    }

    /// Releases every description. Terminal: a second call fails, and so does any later
    /// registration or run.
    pub fn teardown(&mut self) -> Result<(), DescribeError> {
        if self.torn_down {
            return Err(DescribeError::AlreadyTornDown);
        }
        debug!(descriptions = self.descriptions.len(), "tearing down registry");
        self.descriptions.clear();
        self.torn_down = true;
        Ok(())
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn ensure_live(&self) -> Result<(), DescribeError> {
        if self.torn_down {
            return Err(DescribeError::TornDown);
        }
        Ok(())
    }
}
