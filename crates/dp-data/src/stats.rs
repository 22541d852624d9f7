//! Aggregates over columns with gaps
//!
//! Missing entries (`None`) and non-finite values are skipped.

fn present(values: &[Option<f64>]) -> impl Iterator<Item = f64> + '_ {
    values.iter().flatten().copied().filter(|v| v.is_finite())
}

/// Smallest present value
pub fn min(values: &[Option<f64>]) -> Option<f64> {
    present(values).reduce(f64::min)
}

/// Largest present value
pub fn max(values: &[Option<f64>]) -> Option<f64> {
    present(values).reduce(f64::max)
}

/// Median of the present values, averaging the middle pair for even counts
pub fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut sorted: Vec<f64> = present(values).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}
