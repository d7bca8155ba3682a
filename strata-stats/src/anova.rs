//! One-way analysis of variance

use crate::distributions::f_cdf;
use crate::helpers::{mean, validate_groups};
use crate::traits::{CardinalityRule, GroupTest, TestMeta};
use strata_core::{Group, StrataError, TestOutcome};

/// One-way ANOVA F test for equality of group means.
///
/// Assumes normality and variance homogeneity; unlike the rank tests it is
/// not gated on a particular cardinality and runs for any number of groups
/// from two upward.
pub struct OneWayAnova;

impl GroupTest for OneWayAnova {
    fn meta(&self) -> TestMeta {
        TestMeta {
            name: "one_way_anova",
            statistic: "F",
            description: "One-way ANOVA F test for equality of group means",
        }
    }

    fn cardinality(&self) -> CardinalityRule {
        CardinalityRule::AtLeast(2)
    }

    fn evaluate(&self, groups: &[Group]) -> Result<TestOutcome, StrataError> {
        if groups.len() < 2 {
            return Err(StrataError::domain_error(
                "one_way_anova requires at least 2 groups",
            ));
        }
        validate_groups(groups)?;

        let total_n: usize = groups.iter().map(|g| g.len()).sum();
        let total_sum: f64 = groups.iter().flat_map(|g| g.values.iter()).sum();
        let grand_mean = total_sum / total_n as f64;

        let mut ss_between = 0.0;
        let mut ss_within = 0.0;

        for group in groups {
            let n = group.len() as f64;
            let group_mean = mean(&group.values);

            ss_between += n * (group_mean - grand_mean).powi(2);

            for x in &group.values {
                ss_within += (x - group_mean).powi(2);
            }
        }

        let k = groups.len() as f64;
        let df_between = k - 1.0;
        let df_within = total_n as f64 - k;
        if df_within <= 0.0 {
            return Err(StrataError::domain_error(
                "one_way_anova requires more observations than groups",
            ));
        }

        let ms_between = ss_between / df_between;
        let ms_within = ss_within / df_within;

        if ms_within <= 0.0 {
            return Err(StrataError::domain_error(
                "one_way_anova requires non-zero within-group variance",
            ));
        }
        let f_stat = ms_between / ms_within;

        let p_value = (1.0 - f_cdf(f_stat, df_between, df_within)).clamp(0.0, 1.0);

        Ok(TestOutcome { statistic: f_stat, p_value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::codes;

    #[test]
    fn test_anova_reference_value() {
        let groups = vec![
            Group::new("A", vec![1.0, 2.0, 3.0]),
            Group::new("B", vec![4.0, 5.0, 6.0]),
            Group::new("C", vec![7.0, 8.0, 9.0]),
        ];
        let outcome = OneWayAnova.evaluate(&groups).unwrap();
        // SS_between = 54, SS_within = 6, F = 27, p = (1 + 2F/6)^(-3) = 0.001
        assert!((outcome.statistic - 27.0).abs() < 1e-10);
        assert!((outcome.p_value - 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_anova_two_groups() {
        let groups = vec![
            Group::new("A", vec![1.0, 2.0, 3.0]),
            Group::new("B", vec![2.0, 3.0, 4.0]),
        ];
        let outcome = OneWayAnova.evaluate(&groups).unwrap();
        assert!((outcome.statistic - 1.5).abs() < 1e-10);
        assert!(outcome.p_value > 0.25 && outcome.p_value < 0.32);
    }

    #[test]
    fn test_anova_equal_means_large_p() {
        let groups = vec![
            Group::new("A", vec![1.0, 2.0, 3.0]),
            Group::new("B", vec![1.0, 2.0, 3.0]),
            Group::new("C", vec![1.0, 2.0, 3.0]),
        ];
        let outcome = OneWayAnova.evaluate(&groups).unwrap();
        assert!(outcome.statistic.abs() < 1e-12);
        assert!(outcome.p_value > 0.99);
    }

    #[test]
    fn test_anova_single_group_rejected() {
        let groups = vec![Group::new("A", vec![1.0, 2.0])];
        let err = OneWayAnova.evaluate(&groups).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_anova_empty_group_is_degenerate() {
        let groups = vec![Group::new("A", vec![1.0, 2.0]), Group::new("B", vec![])];
        let err = OneWayAnova.evaluate(&groups).unwrap_err();
        assert_eq!(err.code, codes::DEGENERATE_GROUP);
    }

    #[test]
    fn test_anova_zero_within_variance() {
        let groups = vec![Group::new("A", vec![1.0, 1.0]), Group::new("B", vec![2.0, 2.0])];
        let err = OneWayAnova.evaluate(&groups).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }
}
