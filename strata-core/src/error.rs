//! Structured errors for the comparison engine
//!
//! Errors are values with machine-readable codes. A cardinality miss is not
//! an error (the engine records it as a skip); everything here aborts the
//! run that raised it.

use crate::ValueError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DEGENERATE_GROUP: &str = "DEGENERATE_GROUP";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const UNDEFINED_FIELD: &str = "UNDEFINED_FIELD";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued with a degraded result
    Warning,
    /// Computation failed for this field pair
    Error,
    /// The whole run cannot proceed
    Fatal,
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Categorical field under comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<String>,

    /// Numerical field under comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerical: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured comparison error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrataError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    /// Severity level
    pub severity: Severity,
}

impl StrataError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: attach the field pair under comparison
    pub fn for_pair(mut self, categorical: impl Into<String>, numerical: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.categorical = Some(categorical.into());
        ctx.numerical = Some(numerical.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn degenerate_group(label: &str) -> Self {
        Self::new(
            codes::DEGENERATE_GROUP,
            format!("Empty group for category '{}'", label),
        )
        .with_suggestion("Ensure every category value has at least one observation")
    }

    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_INPUT, format!("Invalid input: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn undefined_field(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FIELD, format!("Undefined field: {}", name))
            .with_suggestion(format!("Check that every record carries a '{}' column", name))
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for StrataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for StrataError {}

impl From<ValueError> for StrataError {
    fn from(err: ValueError) -> Self {
        Self::invalid_input(err.to_string())
    }
}
