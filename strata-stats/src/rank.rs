//! Rank-based comparison tests
//!
//! Both tests rank the pooled observations and work on rank sums, so they
//! make no normality assumption about the underlying measurements.

use crate::distributions::{chi_squared_cdf, standard_normal_cdf};
use crate::helpers::{assign_ranks, tie_term, validate_groups};
use crate::traits::{CardinalityRule, GroupTest, TestMeta};
use strata_core::{Group, StrataError, TestOutcome};

/// Two-sided Mann-Whitney U test for two independent groups.
///
/// The statistic is U of the first group, so swapping the groups
/// complements the statistic (U₁ + U₂ = n₁n₂) but leaves the p-value
/// unchanged. The p-value uses the normal approximation with a continuity
/// correction and tie-corrected rank variance.
pub struct MannWhitney;

impl GroupTest for MannWhitney {
    fn meta(&self) -> TestMeta {
        TestMeta {
            name: "mann_whitney",
            statistic: "U",
            description: "Two-sided Mann-Whitney rank-sum test for two independent groups",
        }
    }

    fn cardinality(&self) -> CardinalityRule {
        CardinalityRule::Exactly(2)
    }

    fn evaluate(&self, groups: &[Group]) -> Result<TestOutcome, StrataError> {
        if groups.len() != 2 {
            return Err(StrataError::domain_error(format!(
                "mann_whitney expects exactly 2 groups, got {}",
                groups.len()
            )));
        }
        validate_groups(groups)?;

        let n1 = groups[0].len() as f64;
        let n2 = groups[1].len() as f64;
        let n = n1 + n2;

        let combined: Vec<f64> = groups[0]
            .values
            .iter()
            .chain(groups[1].values.iter())
            .copied()
            .collect();
        let ranks = assign_ranks(&combined);

        let r1: f64 = ranks[..groups[0].len()].iter().sum();
        let u1 = r1 - n1 * (n1 + 1.0) / 2.0;

        let mean_u = n1 * n2 / 2.0;
        let var_u = n1 * n2 / 12.0 * ((n + 1.0) - tie_term(&combined) / (n * (n - 1.0)));
        if var_u <= 0.0 {
            return Err(StrataError::domain_error(
                "all observations are identical, rank variance is zero",
            ));
        }

        // Continuity correction pulls the statistic toward its mean
        let delta = u1 - mean_u;
        let correction = if delta > 0.0 {
            -0.5
        } else if delta < 0.0 {
            0.5
        } else {
            0.0
        };
        let z = (delta + correction) / var_u.sqrt();

        let p_value = (2.0 * (1.0 - standard_normal_cdf(z.abs()))).clamp(0.0, 1.0);

        Ok(TestOutcome { statistic: u1, p_value })
    }
}

/// Kruskal-Wallis omnibus rank test across three or more groups.
///
/// Tests whether at least one group's distribution differs, without
/// identifying which. H is tie-corrected and referred to the chi-squared
/// distribution with k − 1 degrees of freedom.
pub struct KruskalWallis;

impl GroupTest for KruskalWallis {
    fn meta(&self) -> TestMeta {
        TestMeta {
            name: "kruskal_wallis",
            statistic: "H",
            description: "Kruskal-Wallis omnibus rank test across all groups",
        }
    }

    fn cardinality(&self) -> CardinalityRule {
        CardinalityRule::AtLeast(3)
    }

    fn evaluate(&self, groups: &[Group]) -> Result<TestOutcome, StrataError> {
        let k = groups.len();
        if k < 2 {
            return Err(StrataError::domain_error(
                "kruskal_wallis requires at least 2 groups",
            ));
        }
        validate_groups(groups)?;

        let n_total: usize = groups.iter().map(|g| g.len()).sum();
        let n = n_total as f64;

        let combined: Vec<f64> = groups
            .iter()
            .flat_map(|g| g.values.iter().copied())
            .collect();
        let ranks = assign_ranks(&combined);

        // Rank sum per group, walking the pooled ranks in group order
        let mut h = 0.0;
        let mut offset = 0;
        for group in groups {
            let ri: f64 = ranks[offset..offset + group.len()].iter().sum();
            h += ri * ri / group.len() as f64;
            offset += group.len();
        }
        h = 12.0 / (n * (n + 1.0)) * h - 3.0 * (n + 1.0);

        // Tie correction divides H by 1 - Σ(t³-t)/(N³-N)
        let correction = 1.0 - tie_term(&combined) / (n * n * n - n);
        if correction <= 0.0 {
            return Err(StrataError::domain_error(
                "all observations are identical, rank variance is zero",
            ));
        }
        h /= correction;

        let df = (k - 1) as f64;
        let p_value = (1.0 - chi_squared_cdf(h, df)).clamp(0.0, 1.0);

        Ok(TestOutcome { statistic: h, p_value })
    }
}
