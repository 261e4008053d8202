//! Engine-level errors.
//!
//! These are the errors of the registry and the printers themselves. Test failures are
//! not represented here: a failing test produces an [`Outcome`](crate::Outcome), never a
//! `DescribeError`.

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for every way the registration and execution engine can fail.
#[derive(Debug, Error, Diagnostic)]
pub enum DescribeError {
    #[error("the registry has been torn down")]
    #[diagnostic(
        code(describeit::registry::torn_down),
        help("teardown is terminal; collect and run all descriptions before tearing down")
    )]
    TornDown,

    #[error("the registry was already torn down")]
    #[diagnostic(code(describeit::registry::already_torn_down))]
    AlreadyTornDown,

    #[error("the registry lock is poisoned")]
    #[diagnostic(
        code(describeit::registry::poisoned),
        help("a thread panicked while holding the registry; test bodies must not access it")
    )]
    Poisoned,

    #[error("printer failed: {0}")]
    #[diagnostic(code(describeit::printer))]
    Print(#[from] std::io::Error),
}
