//! Helper functions for the test computers
//!
//! Input validation and rank utilities shared by the rank-based tests.

use strata_core::{Group, StrataError};

/// Tolerance under which two measurements count as tied
const TIE_EPS: f64 = 1e-10;

/// Reject empty groups and non-finite measurements.
///
/// An empty group is malformed input, distinct from a cardinality skip.
pub fn validate_groups(groups: &[Group]) -> Result<(), StrataError> {
    for group in groups {
        if group.is_empty() {
            return Err(StrataError::degenerate_group(&group.label));
        }
        if group.values.iter().any(|v| !v.is_finite()) {
            return Err(StrataError::invalid_input(format!(
                "non-finite measurement in group '{}'",
                group.label
            )));
        }
    }
    Ok(())
}

/// Mean of a non-empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Assign 1-based ranks, averaging over ties
pub fn assign_ranks(data: &[f64]) -> Vec<f64> {
    let n = data.len();

    let mut indexed: Vec<(usize, f64)> =
        data.iter().enumerate().map(|(i, &val)| (i, val)).collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranks = vec![0.0; n];

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && (indexed[j].1 - indexed[i].1).abs() < TIE_EPS {
            j += 1;
        }

        // Average rank for the tied run (1-based)
        let avg_rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for k in i..j {
            ranks[indexed[k].0] = avg_rank;
        }

        i = j;
    }

    ranks
}

/// Σ(t³ − t) over tied runs, the correction term shared by both rank tests
pub fn tie_term(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut total = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j < sorted.len() && (sorted[j] - sorted[i]).abs() < TIE_EPS {
            j += 1;
        }
        let t = (j - i) as f64;
        if t > 1.0 {
            total += t * t * t - t;
        }
        i = j;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_assign_ranks_no_ties() {
        assert_eq!(assign_ranks(&[30.0, 10.0, 20.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_assign_ranks_with_ties() {
        // Tied 20s occupy ranks 2 and 3, both get 2.5
        assert_eq!(assign_ranks(&[10.0, 20.0, 20.0, 40.0]), vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn test_tie_term() {
        assert_eq!(tie_term(&[1.0, 2.0, 3.0]), 0.0);
        // One run of 2 and one of 3: (8-2) + (27-3) = 30
        assert_eq!(tie_term(&[5.0, 5.0, 7.0, 7.0, 7.0, 9.0]), 30.0);
    }

    #[test]
    fn test_validate_groups_empty() {
        let groups = vec![Group::new("A", vec![1.0]), Group::new("B", vec![])];
        let err = validate_groups(&groups).unwrap_err();
        assert_eq!(err.code, strata_core::codes::DEGENERATE_GROUP);
    }

    #[test]
    fn test_validate_groups_non_finite() {
        let groups = vec![Group::new("A", vec![1.0, f64::NAN])];
        let err = validate_groups(&groups).unwrap_err();
        assert_eq!(err.code, strata_core::codes::INVALID_INPUT);
    }
}
