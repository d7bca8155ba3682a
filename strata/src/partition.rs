//! Group partitioner
//!
//! Splits a dataset into one group per distinct categorical value, carrying
//! the numerical measurements of the matching records. Groups come out in
//! first-seen record order, not sorted. Pure function of the dataset.

use std::collections::HashMap;
use strata_core::{Dataset, Group, StrataError};

/// Partition `numerical` measurements by the distinct values of `categorical`.
///
/// The number of groups returned is the observed cardinality of the
/// categorical field. Both fields must be present in every record; a
/// mistyped or null cell in either field aborts with an error.
pub fn partition(
    data: &Dataset,
    categorical: &str,
    numerical: &str,
) -> Result<Vec<Group>, StrataError> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<f64>> = HashMap::new();

    for record in data.records() {
        let cat = record
            .get(categorical)
            .ok_or_else(|| StrataError::undefined_field(categorical))?;
        let num = record
            .get(numerical)
            .ok_or_else(|| StrataError::undefined_field(numerical))?;

        let label = cat
            .label()
            .map_err(|e| StrataError::from(e).for_pair(categorical, numerical))?;
        let value = num
            .to_measurement()
            .map_err(|e| StrataError::from(e).for_pair(categorical, numerical))?;

        if !buckets.contains_key(&label) {
            order.push(label.clone());
        }
        buckets.entry(label).or_default().push(value);
    }

    Ok(order
        .into_iter()
        .map(|label| {
            let values = buckets.remove(&label).unwrap_or_default();
            Group::new(label, values)
        })
        .collect())
}
