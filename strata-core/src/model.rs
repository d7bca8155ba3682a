//! Engine data model: partitioned groups and test outcomes

use serde::{Deserialize, Serialize};

/// The measurements belonging to one category value, for one
/// (categorical, numerical) field pair. Derived fresh per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub values: Vec<f64>,
}

impl Group {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Statistic and p-value of one executed test.
///
/// `p_value` is always in [0, 1]; the statistic is test-specific (U, H, F).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}
