//! Cardinality-gated test selection
//!
//! The selector is the only place a cardinality precondition is checked.
//! A field pair that misses the gate becomes an explicit skip carrying the
//! observed and required cardinality; it is never a silent omission and
//! never an error.

use serde::{Deserialize, Serialize};
use strata_core::{Group, StrataError, TestOutcome};
use strata_stats::{CardinalityRule, GroupTest};

/// Why a field pair did or did not produce a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestStatus {
    Applied(TestOutcome),
    SkippedCardinality {
        actual: usize,
        required: CardinalityRule,
    },
}

impl TestStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, TestStatus::Applied(_))
    }
}

/// Run `test` over `groups` if its cardinality rule admits them.
///
/// Computation errors (degenerate groups, invalid measurements) propagate;
/// only the cardinality gate produces a skip.
pub fn select(test: &dyn GroupTest, groups: &[Group]) -> Result<TestStatus, StrataError> {
    let rule = test.cardinality();
    if !rule.admits(groups.len()) {
        return Ok(TestStatus::SkippedCardinality {
            actual: groups.len(),
            required: rule,
        });
    }
    Ok(TestStatus::Applied(test.evaluate(groups)?))
}
