//! Failure boundary: runs one test body and classifies how it ended.
//!
//! `Running -> {Passed, Failed, Errored}`. A returned [`Failure`] is an assertion, any
//! other returned error or a panic is an error. Nothing escapes the boundary.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use crate::expectation::Failure;
use crate::outcome::{Outcome, TestError, TestResult};

/// Executes `body` and turns whatever it produced into an [`Outcome`].
pub fn run_guarded<F>(body: F) -> Outcome
where
    F: FnOnce() -> TestResult,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(error)) => classify_error(error),
        Err(payload) => Outcome::Errored {
            diagnostic: panic_message(payload.as_ref()),
        },
    }
}

/// Splits returned errors into assertion failures and everything else.
pub fn classify_error(error: TestError) -> Outcome {
    match error.downcast::<Failure>() {
        Ok(failure) => Outcome::Failed(*failure),
        Err(other) => Outcome::Errored {
            diagnostic: other.to_string(),
        },
    }
}

/// Message carried by a panic payload, or an empty string when it is not text.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    String::new()
}
