//! # Description Registrar
//!
//! Owns the ordered test methods of one description and runs them.
//!
//! Tests are keyed by an order key drawn from [`next_order_key`], a process-wide
//! monotonic counter, so they execute in declaration order regardless of their names.
//! Each test gets a fresh instance of the description's backing state, built with
//! `Default` and wrapped in the [`Description`] hooks.

use std::{
    collections::BTreeMap,
    panic::{self, AssertUnwindSafe},
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

use crate::boundary::{panic_message, run_guarded};
use crate::errors::DescribeError;
use crate::outcome::{RunSummary, TestResult};
use crate::printer::Printer;

static ORDER_KEYS: AtomicU64 = AtomicU64::new(0);

/// Hands out strictly increasing order keys for the whole process.
pub fn next_order_key() -> u64 {
    ORDER_KEYS.fetch_add(1, Ordering::Relaxed)
}

/// Backing state of a description, rebuilt for every test.
///
/// All hooks default to no-ops. `before_all`/`after_all` run once per description per
/// run; `before_each`/`after_each` run around every test body on that test's instance.
pub trait Description: Default + 'static {
    fn before_all() {}

    fn after_all() {}

    fn before_each(&mut self) {}

    fn after_each(&mut self) {}
}

impl Description for () {}

/// A test body operating on the description's backing state.
pub type TestBody<D> = fn(&mut D) -> TestResult;

struct TestMethod<D> {
    name: String,
    body: TestBody<D>,
}

/// Type-erased view of a registrar, as stored by the registry.
pub trait Suite: Send {
    fn name(&self) -> &str;

    fn test_count(&self) -> usize;

    fn run_tests(&self, printer: &mut dyn Printer) -> Result<RunSummary, DescribeError>;
}

pub struct DescriptionRegistrar<D: Description> {
    name: String,
    methods: BTreeMap<u64, TestMethod<D>>,
}

impl<D: Description> DescriptionRegistrar<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: BTreeMap::new(),
        }
    }

    /// Adds a test. A name that is already registered keeps its slot and only has its
    /// body replaced; an order key that is already taken is overwritten.
    pub fn register_method(&mut self, name: impl Into<String>, order_key: u64, body: TestBody<D>) {
        let name = name.into();
        if let Some(existing) = self.methods.values_mut().find(|m| m.name == name) {
            warn!(description = %self.name, test = %name, "test registered twice; last body wins");
            existing.body = body;
            return;
        }
        if let Some(replaced) = self.methods.insert(order_key, TestMethod { name, body }) {
            warn!(
                description = %self.name,
                test = %replaced.name,
                order_key,
                "order key reused; previous test replaced"
            );
        }
    }

    /// Test names in execution order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.methods.values().map(|m| m.name.as_str())
    }
}

impl<D: Description> Suite for DescriptionRegistrar<D> {
    fn name(&self) -> &str {
        &self.name
    }

    fn test_count(&self) -> usize {
        self.methods.len()
    }

    fn run_tests(&self, printer: &mut dyn Printer) -> Result<RunSummary, DescribeError> {
        printer.start_describe(&self.name, self.methods.len())?;
        run_hook(&self.name, "before_all", D::before_all);

        let mut summary = RunSummary::default();
        for method in self.methods.values() {
            let outcome = run_guarded(|| {
                let mut state = D::default();
                state.before_each();
                let result = panic::catch_unwind(AssertUnwindSafe(|| (method.body)(&mut state)));
                state.after_each();
                result.unwrap_or_else(|payload| panic::resume_unwind(payload))
            });
            debug!(description = %self.name, test = %method.name, status = %outcome.status(), "test finished");
            summary.record(&outcome);
            if let Err(error) = printer.test(&method.name, &outcome) {
                run_hook(&self.name, "after_all", D::after_all);
                return Err(error.into());
            }
        }

        run_hook(&self.name, "after_all", D::after_all);
        printer.end_describe(summary.passed, summary.unsuccessful())?;
        Ok(summary)
    }
}

/// Runs a once-per-description hook. A panicking hook is logged and the run continues.
fn run_hook(description: &str, hook: &str, f: fn()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        warn!(
            description,
            hook,
            message = %panic_message(payload.as_ref()),
            "description hook panicked"
        );
    }
}
