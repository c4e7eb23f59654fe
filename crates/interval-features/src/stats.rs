//! Statistical Reductions over Interval Slices

use ndarray::ArrayView1;

/// Arithmetic mean of a slice.
///
/// Returns NaN for an empty view; the extractor never produces one, since
/// every interval has length at least 1.
pub fn mean(values: ArrayView1<'_, f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / n as f64
}

/// Sample standard deviation (n-1 denominator).
///
/// Two-pass: the mean is computed first, then the sum of squared deviations
/// from it. The single-pass sum-of-squares form cancels catastrophically for
/// large values and is deliberately avoided. Returns NaN when the slice has
/// fewer than two values.
pub fn std_dev(values: ArrayView1<'_, f64>) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|&v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Ordinary-least-squares slope of the values against x = 1..n.
///
/// Uses the closed forms for the index sums: xbar = (n+1)/2 and
/// sum(x^2) = n(n+1)(2n+1)/6. These are exact integer sequences, not
/// data-dependent, so the closed form carries no stability concern.
/// Returns NaN when the slice has fewer than two values (the denominator
/// is exactly zero for n = 1).
pub fn slope(values: ArrayView1<'_, f64>) -> f64 {
    let len = values.len();
    if len < 2 {
        return f64::NAN;
    }
    let n = len as f64;
    let mut sumxy = 0.0;
    for (i, &v) in values.iter().enumerate() {
        sumxy += (i + 1) as f64 * v;
    }
    let xbar = (n + 1.0) / 2.0;
    let ybar = mean(values);
    let sumx2 = n * (n + 1.0) * (2.0 * n + 1.0) / 6.0;
    (sumxy - n * xbar * ybar) / (sumx2 - n * xbar * xbar)
}
