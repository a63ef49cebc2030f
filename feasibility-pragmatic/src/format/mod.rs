//! This module defines logic to deserialize routes from pragmatic json input, convert them into
//! core models and write a feasibility report.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod report;
pub mod route;

/// A format error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// Keeps multiple format errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MultiFormatError {
    /// Format errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Returns codes of all errors.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }

    /// Serializes errors into json string. Falls back to plain text if serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }
}

impl Display for MultiFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}
