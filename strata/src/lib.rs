//! Strata - Grouped comparison of observation tables
//!
//! Given a tabular dataset with categorical grouping fields and numerical
//! measurement fields, Strata partitions the measurements by category,
//! picks a hypothesis test from the cardinality of each grouping field,
//! and assembles the statistics and p-values into an annotated comparison
//! table.
//!
//! ```
//! use strata::{rank_sum_comparison, Dataset, Value};
//!
//! let data = Dataset::from_rows(
//!     &["region", "ndvi"],
//!     vec![
//!         vec![Value::from("A"), Value::from(0.21)],
//!         vec![Value::from("A"), Value::from(0.25)],
//!         vec![Value::from("B"), Value::from(0.58)],
//!         vec![Value::from("B"), Value::from(0.61)],
//!     ],
//! )?;
//!
//! let table = rank_sum_comparison(&data, &["region"], &["ndvi"])?;
//! let annotated = table.annotate();
//! assert_eq!(annotated.rows.len(), 1);
//! # Ok::<(), strata::StrataError>(())
//! ```

mod annotate;
mod engine;
mod partition;
mod render;
mod selector;
mod table;

pub use annotate::{AnnotatedRow, AnnotatedTable, DEFAULT_THRESHOLD};
pub use engine::{mean_comparison, rank_omnibus_comparison, rank_sum_comparison, Comparator};
pub use partition::partition;
pub use render::Renderer;
pub use selector::{select, TestStatus};
pub use table::{PairStatus, ResultTable, SkippedPair, TestResult};

pub use strata_core::{
    codes, Dataset, Group, Record, Severity, StrataError, TestOutcome, Value,
};
pub use strata_stats::{
    CardinalityRule, GroupTest, KruskalWallis, MannWhitney, OneWayAnova, TestMeta,
};
