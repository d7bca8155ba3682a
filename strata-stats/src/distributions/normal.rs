//! Standard normal distribution

/// Standard normal CDF P(X ≤ x)
pub fn standard_normal_cdf(x: f64) -> f64 {
    // Φ(x) = 0.5 * (1 + erf(x/√2))
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function approximation using Taylor series
fn erf(x: f64) -> f64 {
    // erf(x) ≈ (2/√π) * Σ((-1)^n * x^(2n+1)) / (n! * (2n+1))

    // For large |x|, use asymptotic value
    if x.abs() > 4.0 {
        return if x > 0.0 { 1.0 } else { -1.0 };
    }

    let two_over_sqrt_pi = 2.0 / std::f64::consts::PI.sqrt();
    let x_squared = x * x;

    let mut sum = 0.0;
    let mut term = x;

    for n in 0..100 {
        sum += term / (2.0 * n as f64 + 1.0);

        // Next term: multiply by -x² / (n+1)
        term = -term * x_squared / (n as f64 + 1.0);

        if term.abs() < 1e-16 {
            break;
        }
    }

    two_over_sqrt_pi * sum
}
