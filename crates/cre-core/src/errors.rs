//! Structured error types shared across CRE crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CreError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending values, limits, names).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the coupled resonance engine.
///
/// The physics core only ever fails with [`CreError::InvalidInput`] or
/// [`CreError::NotFound`]. [`CreError::Serde`] is reserved for the
/// serialization helpers and the configuration loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CreError {
    /// Malformed or out-of-domain numeric input.
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// Unknown registry key.
    #[error("not found: {0}")]
    NotFound(ErrorInfo),
    /// Serialization, parsing and file access errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl CreError {
    /// Shorthand for an [`CreError::InvalidInput`] with a bare payload.
    pub fn invalid(code: impl Into<String>, message: impl Into<String>) -> Self {
        CreError::InvalidInput(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CreError::InvalidInput(info) | CreError::NotFound(info) | CreError::Serde(info) => {
                info
            }
        }
    }

    /// Returns true for [`CreError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CreError::InvalidInput(_))
    }

    /// Returns true for [`CreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CreError::NotFound(_))
    }
}

/// Rejects values that are not strictly positive and finite.
pub fn require_positive(code: &str, field: &str, value: f64) -> Result<(), CreError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CreError::InvalidInput(
            ErrorInfo::new(code, format!("{field} must be strictly positive"))
                .with_context("field", field)
                .with_context("value", value),
        ))
    }
}

/// Rejects values that are negative or not finite.
pub fn require_non_negative(code: &str, field: &str, value: f64) -> Result<(), CreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CreError::InvalidInput(
            ErrorInfo::new(code, format!("{field} must be non-negative"))
                .with_context("field", field)
                .with_context("value", value),
        ))
    }
}

/// Rejects engine counts below one.
pub fn require_engine_count(code: &str, n_engines: usize) -> Result<(), CreError> {
    if n_engines >= 1 {
        Ok(())
    } else {
        Err(CreError::InvalidInput(
            ErrorInfo::new(code, "engine count must be at least one")
                .with_context("n_engines", n_engines),
        ))
    }
}
