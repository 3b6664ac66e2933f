//! Input values.

use anyhow::{Context, Result};

/// One entry of a numeric sequence.
///
/// `None` marks a missing entry. A present `NaN` is treated as missing too.
pub type Value = Option<f64>;

/// Get the usable number behind a value, if any.
pub fn present(val: Value) -> Option<f64> {
    val.filter(|x| !x.is_nan())
}

/// Check whether a value is missing.
pub fn is_missing(val: Value) -> bool {
    present(val).is_none()
}

/// Parse a single value.
///
/// `NA` (any case), `NaN` and the empty string mark a missing entry.
pub fn parse_value(s: &str) -> Result<Value> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    let val: f64 = s
        .parse()
        .with_context(|| format!("failed to parse {s:?} as a number"))?;
    Ok(present(Some(val)))
}

pub fn parse_values<S: AsRef<str>>(strs: &[S]) -> Result<Vec<Value>> {
    strs.iter()
        .enumerate()
        .map(|(idx, s)| parse_value(s.as_ref()).with_context(|| format!("invalid value {idx}")))
        .collect()
}
