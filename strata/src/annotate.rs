//! Significance annotation
//!
//! A pure view over an already-materialized result table: each row gains a
//! flag for p-values below the threshold. Numeric data is never altered
//! and no formatting happens here.

use crate::table::{ResultTable, SkippedPair, TestResult};
use serde::{Deserialize, Serialize};

/// Default significance threshold
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// A result row plus its significance flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRow {
    pub result: TestResult,
    pub significant: bool,
}

/// A result table with per-row significance flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTable {
    pub test: String,
    pub statistic: String,
    pub threshold: f64,
    pub rows: Vec<AnnotatedRow>,
    pub skipped: Vec<SkippedPair>,
}

impl ResultTable {
    /// Annotate at the default 0.05 threshold
    pub fn annotate(&self) -> AnnotatedTable {
        self.annotate_with(DEFAULT_THRESHOLD)
    }

    /// Annotate at a caller-chosen threshold
    pub fn annotate_with(&self, threshold: f64) -> AnnotatedTable {
        AnnotatedTable {
            test: self.test.clone(),
            statistic: self.statistic.clone(),
            threshold,
            rows: self
                .rows()
                .iter()
                .map(|r| AnnotatedRow {
                    result: r.clone(),
                    significant: r.outcome.p_value < threshold,
                })
                .collect(),
            skipped: self.skipped().to_vec(),
        }
    }
}

impl AnnotatedTable {
    /// Rows flagged significant at this table's threshold
    pub fn significant_rows(&self) -> impl Iterator<Item = &AnnotatedRow> {
        self.rows.iter().filter(|r| r.significant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::TestStatus;
    use crate::table::PairStatus;
    use strata_core::TestOutcome;
    use strata_stats::TestMeta;

    fn table(p_values: &[f64]) -> ResultTable {
        let meta = TestMeta {
            name: "mann_whitney",
            statistic: "U",
            description: "test",
        };
        let statuses = p_values
            .iter()
            .enumerate()
            .map(|(i, &p)| PairStatus {
                categorical: "region".to_string(),
                numerical: format!("band{}", i),
                status: TestStatus::Applied(TestOutcome { statistic: 1.0, p_value: p }),
            })
            .collect();
        ResultTable::from_statuses(&meta, statuses)
    }

    #[test]
    fn test_default_threshold_flags_below_0_05() {
        let annotated = table(&[0.01, 0.05, 0.80]).annotate();
        let flags: Vec<bool> = annotated.rows.iter().map(|r| r.significant).collect();
        // Strictly below: 0.05 itself is not significant
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn test_annotation_is_monotonic_in_p() {
        let low = table(&[0.049]).annotate();
        let high = table(&[0.051]).annotate();
        assert!(low.rows[0].significant);
        assert!(!high.rows[0].significant);
    }

    #[test]
    fn test_custom_threshold() {
        let annotated = table(&[0.02]).annotate_with(0.01);
        assert!(!annotated.rows[0].significant);
        let annotated = table(&[0.02]).annotate_with(0.05);
        assert!(annotated.rows[0].significant);
    }

    #[test]
    fn test_annotation_preserves_numeric_data() {
        let source = table(&[0.02]);
        let annotated = source.annotate();
        assert_eq!(annotated.rows[0].result, source.rows()[0]);
    }

    #[test]
    fn test_significant_rows_iterator() {
        let annotated = table(&[0.01, 0.90, 0.002]).annotate();
        assert_eq!(annotated.significant_rows().count(), 2);
    }
}
