//! Page model error types.

use thiserror::Error;

/// Errors from assembling a page or registering listeners.
///
/// These mark programming errors in the page wiring, not user input problems;
/// user input never produces an error, only visibility changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Two elements were adopted under the same id.
    #[error("duplicate element id `{0}`")]
    DuplicateId(String),
    /// A listener was registered for an id the page does not contain.
    #[error("no element with id `{0}`")]
    UnknownTarget(String),
    /// The page lock was poisoned by a panicking listener.
    #[error("page state poisoned by a panicked handler")]
    Poisoned,
}
