//! Theme error types

use thiserror::Error;

/// Returned when a string is not a member of a token enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} token '{value}'")]
pub struct ParseTokenError {
    /// Name of the token family, e.g. `size`
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseTokenError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
