use crate::util::stats::round1;
use itertools::Itertools;

/// combines weighted sub-scores into one 0–100 score. null sub-scores are
/// excluded and the remaining weights renormalized, so a point is judged
/// only on what is known about it rather than dragged down by missing
/// data. null when no sub-score is present or the effective weight is not
/// positive. rounded to one decimal.
pub fn combine_components(components: &[(f64, Option<f64>)]) -> Option<f64> {
    let valid = components
        .iter()
        .filter_map(|(weight, value)| value.map(|v| (*weight, v)))
        .collect_vec();
    if valid.is_empty() {
        return None;
    }
    let total_weight: f64 = valid.iter().map(|(weight, _)| weight).sum();
    if total_weight <= 0.0 {
        return None;
    }
    let score: f64 = valid
        .iter()
        .map(|(weight, value)| value * weight / total_weight)
        .sum();
    Some(round1(score))
}
