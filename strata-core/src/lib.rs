//! Strata Core - Fundamental types
//!
//! This crate provides the core types used throughout Strata:
//! - `Value`: cell values in observation records
//! - `Dataset`/`Record`: tabular input to the comparison engine
//! - `Group`/`TestOutcome`: the engine's data model
//! - `StrataError`: structured errors with machine-readable codes

mod dataset;
mod error;
mod model;
mod value;

pub use dataset::{Dataset, Record};
pub use error::{codes, ErrorContext, Severity, StrataError};
pub use model::{Group, TestOutcome};
pub use value::{Value, ValueError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Dataset, Group, Record, Severity, StrataError, TestOutcome, Value};
}
