//! Error types for network domain validation and parsing.

use thiserror::Error;

/// Error returned while parsing a network status from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown network status: {0}")]
pub struct ParseNetworkStatusError(pub String);

/// Error raised when a typed query parameter cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value '{value}' for filter parameter '{parameter}'")]
pub struct FilterParseError {
    /// Query parameter name.
    pub parameter: String,
    /// Rejected raw value.
    pub value: String,
}

impl FilterParseError {
    /// Creates a parse error for one query parameter.
    #[must_use]
    pub fn new(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
        }
    }
}
