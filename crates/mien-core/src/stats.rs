//! Distribution statistics for score separability.

use crate::types::ScoreSet;
use crate::EPS;

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (denominator N, not N - 1).
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Decidability index between the genuine and impostor distributions.
///
/// d' = (mean_g - mean_i) / (sqrt(0.5 * (var_g + var_i)) + eps), both
/// variances population-based. When both classes are degenerate (zero
/// variance) the stabilizer keeps the result finite; a near-zero or
/// negative d' is a valid, merely poor, outcome and never an error.
pub fn d_prime(scores: &ScoreSet) -> f64 {
    let var_g = population_std(&scores.genuine).powi(2);
    let var_i = population_std(&scores.impostor).powi(2);
    let pooled = (0.5 * (var_g + var_i)).sqrt();
    (mean(&scores.genuine) - mean(&scores.impostor)) / (pooled + EPS)
}
