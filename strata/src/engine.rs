//! Comparison drivers
//!
//! The three public operations walk the cross product of grouping and
//! measurement fields, partition once per pair, and hand the groups to the
//! test the selector admits. Row order is deterministic: categorical fields
//! in caller order, numerical fields nested in caller order.

use crate::annotate::{AnnotatedTable, DEFAULT_THRESHOLD};
use crate::partition::partition;
use crate::selector::{select, TestStatus};
use crate::table::{PairStatus, ResultTable};
use strata_core::{Dataset, StrataError};
use strata_stats::{GroupTest, KruskalWallis, MannWhitney, OneWayAnova};
use tracing::debug;

fn run_gated(
    data: &Dataset,
    categorical: &[&str],
    numerical: &[&str],
    test: &dyn GroupTest,
) -> Result<ResultTable, StrataError> {
    let meta = test.meta();
    let mut statuses = Vec::with_capacity(categorical.len() * numerical.len());

    for cat in categorical {
        for num in numerical {
            let groups = partition(data, cat, num)?;
            let status = select(test, &groups).map_err(|e| e.for_pair(*cat, *num))?;
            match &status {
                TestStatus::Applied(outcome) => debug!(
                    test = meta.name,
                    categorical = %cat,
                    numerical = %num,
                    statistic = outcome.statistic,
                    p_value = outcome.p_value,
                    "pair evaluated"
                ),
                TestStatus::SkippedCardinality { actual, required } => debug!(
                    test = meta.name,
                    categorical = %cat,
                    numerical = %num,
                    actual = *actual,
                    required = %required,
                    "pair skipped"
                ),
            }
            statuses.push(PairStatus {
                categorical: (*cat).to_string(),
                numerical: (*num).to_string(),
                status,
            });
        }
    }

    Ok(ResultTable::from_statuses(&meta, statuses))
}

/// Pairwise rank comparison (Mann-Whitney U) over every field pair.
///
/// Only fields with exactly two distinct values are evaluated; other pairs
/// land in the skip ledger. If no field qualifies the table is empty.
pub fn rank_sum_comparison(
    data: &Dataset,
    categorical: &[&str],
    numerical: &[&str],
) -> Result<ResultTable, StrataError> {
    run_gated(data, categorical, numerical, &MannWhitney)
}

/// Omnibus rank comparison (Kruskal-Wallis H) over every field pair.
///
/// A categorical field with fewer than three distinct values skips all of
/// its numerical pairs. If no field qualifies the table is empty.
pub fn rank_omnibus_comparison(
    data: &Dataset,
    categorical: &[&str],
    numerical: &[&str],
) -> Result<ResultTable, StrataError> {
    run_gated(data, categorical, numerical, &KruskalWallis)
}

/// Mean comparison (one-way ANOVA) of one categorical field against each
/// numerical field.
///
/// Unlike the rank comparisons this takes a single categorical field and is
/// not cardinality-gated: it produces one row per numerical field for any
/// number of groups from two upward, and errors below that.
pub fn mean_comparison(
    data: &Dataset,
    categorical: &str,
    numerical: &[&str],
) -> Result<ResultTable, StrataError> {
    let test = OneWayAnova;
    let meta = test.meta();
    let mut statuses = Vec::with_capacity(numerical.len());

    for num in numerical {
        let groups = partition(data, categorical, num)?;
        let outcome = test
            .evaluate(&groups)
            .map_err(|e| e.for_pair(categorical, *num))?;
        debug!(
            test = meta.name,
            categorical = %categorical,
            numerical = %num,
            statistic = outcome.statistic,
            p_value = outcome.p_value,
            "pair evaluated"
        );
        statuses.push(PairStatus {
            categorical: categorical.to_string(),
            numerical: (*num).to_string(),
            status: TestStatus::Applied(outcome),
        });
    }

    Ok(ResultTable::from_statuses(&meta, statuses))
}

/// Run-then-annotate facade carrying the significance threshold
#[derive(Debug, Clone)]
pub struct Comparator {
    threshold: f64,
}

impl Comparator {
    pub fn new() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn rank_sum(
        &self,
        data: &Dataset,
        categorical: &[&str],
        numerical: &[&str],
    ) -> Result<AnnotatedTable, StrataError> {
        Ok(rank_sum_comparison(data, categorical, numerical)?.annotate_with(self.threshold))
    }

    pub fn rank_omnibus(
        &self,
        data: &Dataset,
        categorical: &[&str],
        numerical: &[&str],
    ) -> Result<AnnotatedTable, StrataError> {
        Ok(rank_omnibus_comparison(data, categorical, numerical)?.annotate_with(self.threshold))
    }

    pub fn anova(
        &self,
        data: &Dataset,
        categorical: &str,
        numerical: &[&str],
    ) -> Result<AnnotatedTable, StrataError> {
        Ok(mean_comparison(data, categorical, numerical)?.annotate_with(self.threshold))
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{codes, Value};

    fn binary_dataset() -> Dataset {
        let mut rows = Vec::new();
        for &v in &[0.21, 0.25, 0.28, 0.23, 0.30, 0.26] {
            rows.push(vec![Value::from("A"), Value::from(v)]);
        }
        for &v in &[0.55, 0.58, 0.60, 0.52, 0.57, 0.61] {
            rows.push(vec![Value::from("B"), Value::from(v)]);
        }
        Dataset::from_rows(&["region", "ndvi"], rows).unwrap()
    }

    fn seasonal_dataset() -> Dataset {
        let mut rows = Vec::new();
        for season in ["winter", "spring", "summer", "autumn"] {
            for &t in &[10.0, 12.0, 15.0, 18.0] {
                rows.push(vec![Value::from(season), Value::from(t)]);
            }
        }
        Dataset::from_rows(&["season", "temperature"], rows).unwrap()
    }

    #[test]
    fn test_rank_sum_on_binary_field() {
        let table = rank_sum_comparison(&binary_dataset(), &["region"], &["ndvi"]).unwrap();
        assert_eq!(table.rows().len(), 1);
        let row = table.get("region", "ndvi").unwrap();
        assert!(row.outcome.p_value < 0.05);
        assert_eq!(table.statistic, "U");
    }

    #[test]
    fn test_rank_sum_skips_non_binary_field() {
        let table = rank_sum_comparison(&seasonal_dataset(), &["season"], &["temperature"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.skipped().len(), 1);
        assert_eq!(table.skipped()[0].actual, 4);
    }

    #[test]
    fn test_rank_sum_single_category_is_omitted_not_an_error() {
        let data = Dataset::from_rows(
            &["region", "ndvi"],
            vec![
                vec![Value::from("A"), Value::from(0.2)],
                vec![Value::from("A"), Value::from(0.3)],
            ],
        )
        .unwrap();
        let table = rank_sum_comparison(&data, &["region"], &["ndvi"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.skipped()[0].actual, 1);
    }

    #[test]
    fn test_rank_omnibus_on_seasonal_field() {
        let table =
            rank_omnibus_comparison(&seasonal_dataset(), &["season"], &["temperature"]).unwrap();
        assert_eq!(table.rows().len(), 1);
        let row = table.get("season", "temperature").unwrap();
        assert!(row.outcome.p_value > 0.99);
    }

    #[test]
    fn test_rank_omnibus_skips_binary_field_entirely() {
        let table = rank_omnibus_comparison(&binary_dataset(), &["region"], &["ndvi"]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.skipped().len(), 1);
    }

    #[test]
    fn test_mean_comparison_row_per_numerical_field() {
        let mut rows = Vec::new();
        for (region, ndvi, albedo) in [
            ("A", 0.21, 0.11),
            ("A", 0.25, 0.13),
            ("A", 0.28, 0.12),
            ("B", 0.55, 0.31),
            ("B", 0.58, 0.33),
            ("B", 0.60, 0.35),
        ] {
            rows.push(vec![Value::from(region), Value::from(ndvi), Value::from(albedo)]);
        }
        let data = Dataset::from_rows(&["region", "ndvi", "albedo"], rows).unwrap();

        let table = mean_comparison(&data, "region", &["ndvi", "albedo"]).unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.statistic, "F");
        assert!(table.get("region", "ndvi").unwrap().outcome.p_value < 0.05);
    }

    #[test]
    fn test_mean_comparison_runs_above_rank_omnibus_gate() {
        // Four categories: skipped by rank_sum, evaluated here
        let table = mean_comparison(&seasonal_dataset(), "season", &["temperature"]).unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_mean_comparison_single_category_errors() {
        let data = Dataset::from_rows(
            &["region", "ndvi"],
            vec![vec![Value::from("A"), Value::from(0.2)]],
        )
        .unwrap();
        let err = mean_comparison(&data, "region", &["ndvi"]).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_invalid_measurement_aborts_run() {
        let data = Dataset::from_rows(
            &["region", "ndvi"],
            vec![
                vec![Value::from("A"), Value::from(0.2)],
                vec![Value::from("B"), Value::from("cloudy")],
            ],
        )
        .unwrap();
        let err = rank_sum_comparison(&data, &["region"], &["ndvi"]).unwrap_err();
        assert_eq!(err.code, codes::INVALID_INPUT);
    }

    #[test]
    fn test_row_order_follows_caller_order() {
        let mut rows = Vec::new();
        for (region, ndvi, albedo) in [
            ("A", 0.2, 0.1),
            ("A", 0.3, 0.2),
            ("B", 0.6, 0.4),
            ("B", 0.5, 0.3),
        ] {
            rows.push(vec![Value::from(region), Value::from(ndvi), Value::from(albedo)]);
        }
        let data = Dataset::from_rows(&["region", "ndvi", "albedo"], rows).unwrap();

        let table = rank_sum_comparison(&data, &["region"], &["albedo", "ndvi"]).unwrap();
        let keys: Vec<&str> = table.rows().iter().map(|r| r.numerical.as_str()).collect();
        assert_eq!(keys, vec!["albedo", "ndvi"]);
    }

    #[test]
    fn test_comparator_threshold() {
        let strict = Comparator::new().with_threshold(0.001);
        let annotated = strict.rank_sum(&binary_dataset(), &["region"], &["ndvi"]).unwrap();
        // p ≈ 0.005: significant at 0.05, not at 0.001
        assert!(!annotated.rows[0].significant);

        let default = Comparator::new();
        let annotated = default.rank_sum(&binary_dataset(), &["region"], &["ndvi"]).unwrap();
        assert!(annotated.rows[0].significant);
    }
}
