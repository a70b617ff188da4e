//! Standard test functions for exercising the optimizer. Each has its global
//! minimum value of `0.0`.

use std::f64::consts::PI;

/// Sum of squares. Minimum at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Rosenbrock's banana valley. Minimum at `[1, 1, ..., 1]`.
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Highly multimodal; minimum at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    let a = 10.0;
    a * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - a * (2.0 * PI * xi).cos())
            .sum::<f64>()
}
