use crate::{Error, Result};

/// Causal exponential moving average.
///
/// `out[0] = values[0]`, then `out[i] = weight * out[i - 1] + (1 - weight) * values[i]`.
/// No look-ahead and no bias correction; `weight = 0` returns the input
/// unchanged. Callers keep `weight` in `[0, 1)` (see
/// [`crate::output::RouteConfig::validate`]).
pub fn smooth(values: &[f64], weight: f64) -> Result<Vec<f64>> {
    let (&first, rest) = values.split_first().ok_or(Error::EmptySeries)?;

    let mut smoothed = Vec::with_capacity(values.len());
    smoothed.push(first);
    let mut last = first;
    for &v in rest {
        last = weight * last + (1.0 - weight) * v;
        smoothed.push(last);
    }
    Ok(smoothed)
}
