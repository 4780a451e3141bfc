//! Engine errors.

use crate::core::SequenceError;
use thiserror::Error;

/// Errors surfaced by the engine's public operations.
///
/// There are no fatal conditions in this crate: invalid clicks are
/// silently ignored at the call site, and both variants here leave the
/// engine's state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A caller-supplied argument was out of bounds.
    #[error(transparent)]
    InvalidArgument(#[from] SequenceError),

    /// A start was attempted before its preconditions were satisfied.
    /// The message describes what the host must enable first.
    #[error("{0}")]
    PreconditionNotMet(String),
}
