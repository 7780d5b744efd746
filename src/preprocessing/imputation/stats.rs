//! Column statistics used by the tail estimators.
//!
//! All functions take the non-missing values of one column and return `None`
//! for an empty slice. Sums are accumulated left to right.

use std::cmp::Ordering;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator), two-pass.
///
/// A single value has zero spread.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let n = values.len();
    if n < 2 {
        return Some(0.0);
    }
    let ss: f64 = values.iter().map(|&x| (x - mu) * (x - mu)).sum();
    Some((ss / (n - 1) as f64).sqrt())
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Sorted copy of `values`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    out
}

/// Quantile `q` in `[0, 1]` of already sorted data, linear interpolation
/// between the closest ranks at index `q * (n - 1)`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let idx = (q.clamp(0.0, 1.0) * (n - 1) as f64).min((n - 1) as f64);
    Some(interpolate(sorted, idx))
}

/// `(Q1, Q3)` of unsorted data.
pub fn quartiles(values: &[f64]) -> Option<(f64, f64)> {
    let s = sorted(values);
    Some((quantile_sorted(&s, 0.25)?, quantile_sorted(&s, 0.75)?))
}

fn interpolate(sorted: &[f64], idx: f64) -> f64 {
    let lower = idx.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let frac = idx - lower as f64;

    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}
