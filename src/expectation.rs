//! # Expectation Engine
//!
//! Turns ordinary comparisons into structured failures.
//!
//! [`expect`] wraps an actual value together with the source location of the call. One of
//! the comparison methods is then applied; it either returns `Ok(())` or a [`Failure`]
//! carrying `Debug` renderings of both sides. A `Failure` converts into a
//! [`TestError`](crate::TestError) with `?`, which is how the failure boundary tells an
//! assertion apart from any other error.
//!
//! ```rust
//! use describeit::prelude::*;
//!
//! fn body() -> TestResult {
//!     expect(1000 + 337).equals(1337)?;
//!     expect("abc").not_equals("abd")?;
//!     Ok(())
//! }
//! assert!(body().is_ok());
//! ```
//!
//! An expectation on which no comparison is evaluated passes silently.

use std::{any::type_name, fmt};

use miette::Diagnostic;
use serde::Serialize;

use crate::outcome::{TestError, TestResult};

// ============================================================================
// LOCATION AND COMPARISON
// ============================================================================

/// Source position of an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Location of the caller, following `#[track_caller]` frames.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The six comparison operators an expectation supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }

    /// Evaluates `actual <op> expected`.
    pub fn holds<T, U>(&self, actual: &T, expected: &U) -> bool
    where
        T: PartialOrd<U> + ?Sized,
        U: ?Sized,
    {
        match self {
            Comparison::Eq => actual == expected,
            Comparison::Ne => actual != expected,
            Comparison::Lt => actual < expected,
            Comparison::Le => actual <= expected,
            Comparison::Gt => actual > expected,
            Comparison::Ge => actual >= expected,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// What kind of expectation produced a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// `actual <op> expected` did not hold
    Comparison(Comparison),
    /// An `expect_error` expression completed without raising the expected error
    MissingError,
}

/// The expectation-failure signal. Carries the rendered expected and actual sides.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Serialize)]
#[diagnostic(code(describeit::expectation_failed))]
pub struct Failure {
    pub kind: FailureKind,
    pub expected: String,
    pub actual: String,
    pub location: Location,
}

impl Failure {
    pub fn comparison(
        comparison: Comparison,
        expected: String,
        actual: String,
        location: Location,
    ) -> Self {
        Self {
            kind: FailureKind::Comparison(comparison),
            expected,
            actual,
            location,
        }
    }

    pub fn missing_error(kind: &str, location: Location) -> Self {
        Self {
            kind: FailureKind::MissingError,
            expected: kind.to_string(),
            actual: "no error".to_string(),
            location,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Comparison(comparison) => write!(
                f,
                "{}: expected {} {} {}",
                self.location, self.actual, comparison, self.expected
            ),
            FailureKind::MissingError => write!(
                f,
                "{}: error `{}` was not raised",
                self.location, self.expected
            ),
        }
    }
}

impl std::error::Error for Failure {}

// ============================================================================
// EXPECTATION
// ============================================================================

/// Wraps an actual value for a single comparison. Every comparison consumes it.
#[derive(Debug)]
pub struct Expectation<T> {
    actual: T,
    location: Location,
}

/// Starts an expectation on `actual`, recording the caller's location.
#[track_caller]
pub fn expect<T>(actual: T) -> Expectation<T> {
    Expectation {
        actual,
        location: Location::caller(),
    }
}

impl<T: fmt::Debug> Expectation<T> {
    pub fn actual(&self) -> &T {
        &self.actual
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// `actual == expected`
    pub fn equals<U: fmt::Debug>(self, expected: U) -> Result<(), Failure>
    where
        T: PartialEq<U>,
    {
        let holds = self.actual == expected;
        self.conclude(Comparison::Eq, holds, &expected)
    }

    /// `actual != expected`
    pub fn not_equals<U: fmt::Debug>(self, expected: U) -> Result<(), Failure>
    where
        T: PartialEq<U>,
    {
        let holds = self.actual != expected;
        self.conclude(Comparison::Ne, holds, &expected)
    }

    /// `actual < expected`
    pub fn less_than<U: fmt::Debug>(self, expected: U) -> Result<(), Failure>
    where
        T: PartialOrd<U>,
    {
        self.compare(Comparison::Lt, expected)
    }

    /// `actual <= expected`
    pub fn at_most<U: fmt::Debug>(self, expected: U) -> Result<(), Failure>
    where
        T: PartialOrd<U>,
    {
        self.compare(Comparison::Le, expected)
    }

    /// `actual > expected`
    pub fn greater_than<U: fmt::Debug>(self, expected: U) -> Result<(), Failure>
    where
        T: PartialOrd<U>,
    {
        self.compare(Comparison::Gt, expected)
    }

    /// `actual >= expected`
    pub fn at_least<U: fmt::Debug>(self, expected: U) -> Result<(), Failure>
    where
        T: PartialOrd<U>,
    {
        self.compare(Comparison::Ge, expected)
    }

    /// Applies an arbitrary comparison operator.
    pub fn compare<U: fmt::Debug>(self, comparison: Comparison, expected: U) -> Result<(), Failure>
    where
        T: PartialOrd<U>,
    {
        let holds = comparison.holds(&self.actual, &expected);
        self.conclude(comparison, holds, &expected)
    }

    fn conclude<U: fmt::Debug>(
        self,
        comparison: Comparison,
        holds: bool,
        expected: &U,
    ) -> Result<(), Failure> {
        if holds {
            return Ok(());
        }
        Err(Failure::comparison(
            comparison,
            format!("{:?}", expected),
            format!("{:?}", self.actual),
            self.location,
        ))
    }
}

// ============================================================================
// EXPECTED ERRORS
// ============================================================================

/// Runs `expression` and requires it to raise an error of kind `K`.
///
/// - `Ok(_)` yields a [`Failure`] reporting that `K` was not raised.
/// - An error that is a `K`, or has a `K` in its source chain, passes.
/// - Any other error is handed back unchanged, so the boundary classifies it as an
///   error rather than a failure.
#[track_caller]
pub fn expect_error<K, T, E>(expression: impl FnOnce() -> Result<T, E>) -> TestResult
where
    K: std::error::Error + 'static,
    E: Into<TestError>,
{
    let location = Location::caller();
    match expression() {
        Ok(_) => Err(Failure::missing_error(type_name::<K>(), location).into()),
        Err(error) => {
            let error: TestError = error.into();
            if raised::<K>(error.as_ref()) {
                Ok(())
            } else {
                Err(error)
            }
        }
    }
}

fn raised<K: std::error::Error + 'static>(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(candidate) = current {
        if candidate.is::<K>() {
            return true;
        }
        current = candidate.source();
    }
    false
}

/// `expect_error!(expression, Kind)` evaluates `expression` and requires it to return an
/// error of type `Kind`. See [`expect_error`](crate::expectation::expect_error).
#[macro_export]
macro_rules! expect_error {
    ($expression:expr, $kind:ty $(,)?) => {
        $crate::expectation::expect_error::<$kind, _, _>(|| $expression)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("custom")]
    struct CustomError;

    #[derive(Debug, thiserror::Error)]
    #[error("wrapper")]
    struct Wrapper(#[source] CustomError);

    fn raise_custom() -> Result<(), CustomError> {
        Err(CustomError)
    }

    #[test]
    fn equal_values_pass() {
        assert!(expect(1337).equals(1337).is_ok());
        assert!(expect(String::from("a")).equals("a").is_ok());
    }

    #[test]
    fn mismatch_carries_rendered_sides() {
        let failure = expect(1000).equals(1337).unwrap_err();
        assert_eq!(failure.actual, "1000");
        assert_eq!(failure.expected, "1337");
        assert_eq!(failure.kind, FailureKind::Comparison(Comparison::Eq));
        assert!(failure.to_string().ends_with("expected 1000 == 1337"));
    }

    #[test]
    fn strings_render_with_debug_quotes() {
        let failure = expect("left").equals("right").unwrap_err();
        assert_eq!(failure.actual, "\"left\"");
        assert_eq!(failure.expected, "\"right\"");
    }

    #[test]
    fn ordering_operators() {
        assert!(expect(1).less_than(2).is_ok());
        assert!(expect(2).at_most(2).is_ok());
        assert!(expect(3).greater_than(2).is_ok());
        assert!(expect(2).at_least(2).is_ok());
        assert!(expect(2).not_equals(3).is_ok());

        let failure = expect(5).less_than(4).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Comparison(Comparison::Lt));
        assert!(expect(1.5).compare(Comparison::Ge, 2.0).is_err());
    }

    #[test]
    fn location_points_at_the_expect_call() {
        let line = line!() + 1;
        let expectation = expect(1);
        assert_eq!(expectation.location().line, line);
        assert!(expectation.location().file.ends_with("expectation.rs"));
    }

    #[test]
    fn unchecked_expectation_is_silent() {
        let _ = expect(1 == 2);
    }

    #[test]
    fn expected_error_kind_passes() {
        assert!(expect_error::<CustomError, _, _>(raise_custom).is_ok());
    }

    #[test]
    fn expected_error_found_in_source_chain() {
        let result = expect_error::<CustomError, (), _>(|| Err(Wrapper(CustomError)));
        assert!(result.is_ok());
    }

    #[test]
    fn other_error_kind_propagates_unchanged() {
        let error = expect_error::<std::io::Error, _, _>(raise_custom).unwrap_err();
        assert!(error.is::<CustomError>());
    }

    #[test]
    fn missing_error_is_a_failure() {
        let error = expect_error::<CustomError, _, CustomError>(|| Ok(())).unwrap_err();
        let failure = error.downcast_ref::<Failure>().unwrap();
        assert_eq!(failure.kind, FailureKind::MissingError);
        assert!(failure.to_string().contains("was not raised"));
        assert!(failure.expected.ends_with("CustomError"));
    }

    #[test]
    fn macro_form_matches_function_form() {
        assert!(crate::expect_error!(raise_custom(), CustomError).is_ok());
    }
}
