//! Result aggregation
//!
//! Collects per-pair evaluation statuses into one table. Applied pairs
//! become rows, in evaluation order (categorical fields in caller order,
//! numerical fields nested in caller order); skipped pairs go to a ledger
//! so callers can see why a row is absent.

use crate::selector::TestStatus;
use serde::{Deserialize, Serialize};
use strata_core::TestOutcome;
use strata_stats::{CardinalityRule, TestMeta};

/// One evaluated (categorical, numerical) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub categorical: String,
    pub numerical: String,
    pub outcome: TestOutcome,
}

/// A pair that failed its cardinality gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub categorical: String,
    pub numerical: String,
    pub actual: usize,
    pub required: CardinalityRule,
}

/// Per-pair evaluation record fed to the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairStatus {
    pub categorical: String,
    pub numerical: String,
    pub status: TestStatus,
}

/// Comparison results keyed by (categorical, numerical).
///
/// The row set is exactly the set of pairs that were evaluated; an empty
/// table means no field met the test's cardinality precondition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Name of the test that produced the table
    pub test: String,
    /// Label of the statistic column ("U", "H", "F")
    pub statistic: String,
    rows: Vec<TestResult>,
    skipped: Vec<SkippedPair>,
}

impl ResultTable {
    pub fn from_statuses(meta: &TestMeta, statuses: Vec<PairStatus>) -> Self {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for pair in statuses {
            match pair.status {
                TestStatus::Applied(outcome) => rows.push(TestResult {
                    categorical: pair.categorical,
                    numerical: pair.numerical,
                    outcome,
                }),
                TestStatus::SkippedCardinality { actual, required } => {
                    skipped.push(SkippedPair {
                        categorical: pair.categorical,
                        numerical: pair.numerical,
                        actual,
                        required,
                    })
                }
            }
        }

        Self {
            test: meta.name.to_string(),
            statistic: meta.statistic.to_string(),
            rows,
            skipped,
        }
    }

    pub fn rows(&self) -> &[TestResult] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedPair] {
        &self.skipped
    }

    /// True when no pair was evaluated
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the result for one field pair
    pub fn get(&self, categorical: &str, numerical: &str) -> Option<&TestResult> {
        self.rows
            .iter()
            .find(|r| r.categorical == categorical && r.numerical == numerical)
    }
}
