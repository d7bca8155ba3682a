//! Tabular observation datasets
//!
//! A dataset is an ordered collection of records, each mapping field names
//! to cell values. It is the immutable input to the comparison engine; the
//! engine never mutates it.

use crate::{StrataError, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One observation: field name → value
pub type Record = HashMap<String, Value>;

/// Ordered collection of observation records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build from a header plus row values, the shape a tabular
    /// acquisition layer hands over. Every row must match the header arity.
    pub fn from_rows(fields: &[&str], rows: Vec<Vec<Value>>) -> Result<Self, StrataError> {
        let mut records = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != fields.len() {
                return Err(StrataError::invalid_input(format!(
                    "row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    fields.len()
                )));
            }
            let record: Record = fields
                .iter()
                .map(|f| f.to_string())
                .zip(row)
                .collect();
            records.push(record);
        }
        Ok(Self { records })
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
