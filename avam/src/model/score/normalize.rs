use crate::util::stats::round1;
use itertools::Itertools;

/// scales raw values onto 0–100 across the whole collection: the minimum
/// maps to 0, the maximum to 100, nulls pass through. scores are relative
/// to the collection being scored by construction, so the same raw value
/// normalizes differently in different runs.
///
/// a degenerate collection, empty or constant, maps every present value to
/// the midpoint 50.0: there is no spread to place anyone on. `invert` flips
/// the scale (100 − x) before the final one-decimal rounding.
pub fn normalize_scores(values: &[Option<f64>], invert: bool) -> Vec<Option<f64>> {
    let valid = values.iter().filter_map(|v| *v).collect_vec();
    let lo = valid.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if valid.is_empty() || lo == hi {
        return values.iter().map(|v| v.map(|_| 50.0)).collect_vec();
    }
    values
        .iter()
        .map(|v| {
            v.map(|value| {
                let mut normalized = (value - lo) / (hi - lo) * 100.0;
                if invert {
                    normalized = 100.0 - normalized;
                }
                round1(normalized)
            })
        })
        .collect_vec()
}
