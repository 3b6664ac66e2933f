use crate::data::Value;
use crate::stats::{compute_mean, compute_std_dev, length, present_values};
use std::fmt;

/// Descriptive statistics of a sample with a strictly positive mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Mean of the present values.
    pub mean: f64,
    /// Sample standard deviation of the present values.
    pub sd: f64,
    /// Length of the input, missing entries included.
    pub n: usize,
}

/// Summarize `data`, skipping missing entries.
///
/// Returns `None` when the mean is not strictly positive, and also when
/// there are no present values to average (empty or all-missing input).
pub fn summarize(data: &[Value]) -> Option<Summary> {
    let n = length(data);

    let vals = present_values(data);
    if vals.is_empty() {
        return None;
    }

    let mean = compute_mean(&vals);
    let sd = compute_std_dev(&vals);

    // A NaN mean (e.g. from opposite infinities) fails this comparison.
    if mean > 0.0 {
        Some(Summary { mean, sd, n })
    } else {
        None
    }
}

/// Human-readable rendering of a [`summarize`] outcome.
pub struct Report {
    pub summary: Option<Summary>,
    pub precision: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.summary {
            Some(Summary { mean, sd, n }) => write!(
                f,
                "n = {n}, mean = {mean:.prec$}, sd = {sd:.prec$}",
                prec = self.precision
            ),
            None => f.write_str("absent"),
        }
    }
}
