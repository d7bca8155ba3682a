//! Strata Statistics
//!
//! Distribution functions and the three group-comparison tests. Every test
//! implements the `GroupTest` contract: partitioned groups in, statistic
//! plus p-value out. Cardinality gating lives with the caller; computers
//! here either produce an outcome or fail loudly.

mod anova;
mod helpers;
mod rank;
mod traits;

pub mod distributions;

pub use anova::OneWayAnova;
pub use rank::{KruskalWallis, MannWhitney};
pub use traits::{CardinalityRule, GroupTest, TestMeta};
