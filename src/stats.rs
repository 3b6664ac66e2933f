use crate::data::{Value, present};

/// Number of entries in the sequence, missing ones included.
pub fn length(data: &[Value]) -> usize {
    data.len()
}

/// Arithmetic mean of the sequence.
///
/// If `skip_missing` is false, any missing entry makes the result `NaN`.
pub fn mean(data: &[Value], skip_missing: bool) -> f64 {
    match collect_present(data, skip_missing) {
        Some(vals) => compute_mean(&vals),
        None => f64::NAN,
    }
}

/// Sample standard deviation of the sequence (`n - 1` denominator).
///
/// If `skip_missing` is false, any missing entry makes the result `NaN`.
pub fn std_dev(data: &[Value], skip_missing: bool) -> f64 {
    match collect_present(data, skip_missing) {
        Some(vals) => compute_std_dev(&vals),
        None => f64::NAN,
    }
}

/// The present values of the sequence, in order, with missing entries dropped.
pub fn present_values(data: &[Value]) -> Vec<f64> {
    data.iter().copied().filter_map(present).collect()
}

fn collect_present(data: &[Value], skip_missing: bool) -> Option<Vec<f64>> {
    let vals = present_values(data);
    if !skip_missing && vals.len() != data.len() {
        return None;
    }
    Some(vals)
}

pub fn compute_mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    let n_vals = vals.len() as f64;
    let mean = vals.iter().sum::<f64>() / n_vals;
    if mean.is_finite() || !all_finite(vals) {
        return mean;
    }
    // The running sum overflowed; divide before adding.
    vals.iter().map(|&val| val / n_vals).sum()
}

pub fn compute_var(vals: &[f64]) -> f64 {
    let var = plain_var(vals);
    if var.is_finite() {
        return var;
    }
    match scaled_var(vals) {
        Some((var, scale)) => var * scale * scale,
        None => var,
    }
}

pub fn compute_std_dev(vals: &[f64]) -> f64 {
    let var = plain_var(vals);
    if var.is_finite() {
        return var.sqrt();
    }
    // The variance itself may not fit in an f64 even when the standard
    // deviation does, so rescale after the square root.
    match scaled_var(vals) {
        Some((var, scale)) => var.sqrt() * scale,
        None => var.sqrt(),
    }
}

fn plain_var(vals: &[f64]) -> f64 {
    let n_vals = vals.len();
    if n_vals < 2 {
        return f64::NAN;
    }
    let mean = compute_mean(vals);
    vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / (n_vals - 1) as f64
}

/// Variance of `vals / scale` together with `scale = max|val|`.
///
/// Only defined for finite values that are not all zero.
fn scaled_var(vals: &[f64]) -> Option<(f64, f64)> {
    if !all_finite(vals) {
        return None;
    }
    let scale = vals.iter().fold(0.0_f64, |max, val| max.max(val.abs()));
    if scale == 0.0 {
        return None;
    }
    let scaled: Vec<f64> = vals.iter().map(|&val| val / scale).collect();
    Some((plain_var(&scaled), scale))
}

fn all_finite(vals: &[f64]) -> bool {
    vals.iter().all(|val| val.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn slice_stats() {
        let vals = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_mean(&vals), 3.0);
        assert_eq!(compute_var(&vals), 2.5);
        assert_relative_eq!(compute_std_dev(&vals), 1.5811388300841898);

        let vals: Vec<f64> = (0..=100).map(f64::from).collect();
        assert_eq!(compute_mean(&vals), 50.0);
        assert_eq!(compute_var(&vals), 858.5);
    }

    #[test]
    fn too_few_values() {
        assert!(compute_mean(&[]).is_nan());
        assert!(compute_var(&[]).is_nan());
        assert!(compute_var(&[7.0]).is_nan());
        assert_eq!(compute_mean(&[7.0]), 7.0);
    }

    #[test]
    fn skip_missing() {
        let data = [Some(1.0), None, Some(3.0), Some(f64::NAN)];
        assert_eq!(length(&data), 4);
        assert_eq!(mean(&data, true), 2.0);
        assert_relative_eq!(std_dev(&data, true), 2.0_f64.sqrt());
    }

    #[test]
    fn missing_propagates_without_skip() {
        let data = [Some(1.0), None, Some(3.0)];
        assert!(mean(&data, false).is_nan());
        assert!(std_dev(&data, false).is_nan());

        let data = [Some(1.0), Some(3.0)];
        assert_eq!(mean(&data, false), 2.0);
    }

    #[test]
    fn large_values() {
        let vals = [1e308, 1e308, -1e308, -1e308, -1e308];
        assert_relative_eq!(compute_mean(&vals), -2e307);

        let vals = [1e200, 3e200];
        assert_relative_eq!(compute_mean(&vals), 2e200);
        assert_relative_eq!(
            compute_std_dev(&vals),
            2.0_f64.sqrt() * 1e200,
            max_relative = 1e-12
        );
        assert!(compute_var(&vals).is_infinite());

        let vals = [f64::MAX, 0.0];
        assert_relative_eq!(compute_mean(&vals), f64::MAX / 2.0);
        assert_relative_eq!(
            compute_std_dev(&vals),
            f64::MAX / 2.0_f64.sqrt(),
            max_relative = 1e-12
        );

        let vals = [f64::MAX, -f64::MAX];
        assert_eq!(compute_mean(&vals), 0.0);
        assert!(compute_std_dev(&vals).is_infinite());
    }

    #[test]
    fn infinite_values() {
        assert_eq!(compute_mean(&[1.0, f64::INFINITY]), f64::INFINITY);
        assert!(compute_mean(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
        assert!(compute_std_dev(&[1.0, f64::INFINITY]).is_nan());
    }

    #[test]
    fn all_missing() {
        let data = [None, None];
        assert!(mean(&data, true).is_nan());
        assert!(std_dev(&data, true).is_nan());
        assert_eq!(length(&data), 2);
    }
}
