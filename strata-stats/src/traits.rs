//! The shared contract for group comparison tests
//!
//! Every statistic computer consumes partitioned groups and produces a
//! statistic plus p-value. Which computer may run for a field is decided
//! elsewhere, from its cardinality rule; computers never skip silently.

use serde::{Deserialize, Serialize};
use strata_core::{Group, StrataError, TestOutcome};

/// Metadata about a comparison test
#[derive(Debug, Clone, Serialize)]
pub struct TestMeta {
    pub name: &'static str,
    /// Label of the statistic this test produces ("U", "H", "F")
    pub statistic: &'static str,
    pub description: &'static str,
}

/// How many distinct categories a test requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalityRule {
    Exactly(usize),
    AtLeast(usize),
}

impl CardinalityRule {
    pub fn admits(&self, cardinality: usize) -> bool {
        match self {
            CardinalityRule::Exactly(n) => cardinality == *n,
            CardinalityRule::AtLeast(n) => cardinality >= *n,
        }
    }
}

impl std::fmt::Display for CardinalityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardinalityRule::Exactly(n) => write!(f, "exactly {}", n),
            CardinalityRule::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Statistic computer over partitioned groups
pub trait GroupTest: Send + Sync {
    fn meta(&self) -> TestMeta;
    fn cardinality(&self) -> CardinalityRule;
    fn evaluate(&self, groups: &[Group]) -> Result<TestOutcome, StrataError>;
}
