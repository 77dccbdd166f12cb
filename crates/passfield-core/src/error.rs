//! Error types for Passfield core operations.
//!
//! Validation itself is total and never fails; a failing rule is a normal
//! outcome reported through `ValidationResult`. The errors here cover the
//! remaining fallible edges, such as parsing a rule identifier.

use thiserror::Error;

/// Core error type for Passfield operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassfieldError {
    /// Rule identifier did not match any known rule
    #[error("Unknown rule: {0} (expected one of: length, uppercase, number, special)")]
    UnknownRule(String),
}
