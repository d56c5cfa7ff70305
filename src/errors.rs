//! Error types shared by the validators and the wrapper types.

use derive_more::derive::Display;
use thiserror::Error;

/// Error returned by validators for degenerate input.
///
/// Malformed but present input is never an error: it is reported as
/// `Ok(false)` by the validator instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// The input was empty where a value is required.
    #[error("Input value cannot be empty.")]
    EmptyInput,

    /// The input was absent rather than empty.
    /// Only produced by [`crate::is_email`] when called with `None`.
    #[error("Email cannot be missing.")]
    MissingInput,
}

/// Error returned when constructing a validated wrapper type from
/// input that does not pass its validator.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("invalid input")]
pub struct InvalidInput;
