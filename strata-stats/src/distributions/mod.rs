//! Distribution functions backing the p-value computations
//!
//! Pure f64 implementations: the normal CDF feeds the rank-sum test, the
//! chi-squared CDF the omnibus rank test, and the F CDF the mean test.

mod chi;
mod f;
mod normal;

pub use chi::{chi_squared_cdf, gamma_ln};
pub use f::{f_cdf, regularized_incomplete_beta};
pub use normal::standard_normal_cdf;
