//! Domain error types.

use thiserror::Error;

/// Errors raised while constructing value objects from untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Username is empty or consists only of whitespace
    #[error("username must not be empty")]
    EmptyUsername,
}
