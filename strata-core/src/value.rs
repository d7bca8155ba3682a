//! Cell values in observation records
//!
//! A cell is a number, a text label, a boolean flag, or null. Categorical
//! grouping works on a value's rendered label; numerical measurement
//! requires an actual number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for value coercion
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected a numeric value, got {0}")]
    NotNumeric(&'static str),

    #[error("null value in a {0} field")]
    NullValue(&'static str),
}

/// A single cell in an observation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Bool(_) => "Bool",
            Value::Null => "Null",
        }
    }

    // ========== Field Coercion ==========

    /// Grouping key when this value appears in a categorical field.
    ///
    /// Any non-null value has a label; numbers render the way they display,
    /// so integral codes like `3.0` group under `"3"`.
    pub fn label(&self) -> Result<String, ValueError> {
        match self {
            Value::Number(n) => Ok(format!("{}", n)),
            Value::Text(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Err(ValueError::NullValue("categorical")),
        }
    }

    /// Measurement when this value appears in a numerical field.
    pub fn to_measurement(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Null => Err(ValueError::NullValue("numerical")),
            other => Err(ValueError::NotNumeric(other.type_name())),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
