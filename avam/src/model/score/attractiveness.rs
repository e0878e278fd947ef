/// inherent attractiveness: CHF per square meter divided by status-quo
/// accessibility minutes. the market price already capitalizes everything
/// desirable about a place; dividing out today's transport quality leaves
/// the part that is not accessibility, which is exactly what an AV cannot
/// change and a buyer keeps.
///
/// defined only when both inputs are present and positive.
pub fn inherent_attractiveness(
    chf_per_m2: Option<f64>,
    status_quo_minutes: Option<f64>,
) -> Option<f64> {
    match (chf_per_m2, status_quo_minutes) {
        (Some(price), Some(minutes)) if price > 0.0 && minutes > 0.0 => Some(price / minutes),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_price_per_minute() {
        assert_eq!(inherent_attractiveness(Some(10000.0), Some(10.0)), Some(1000.0));
    }

    #[test]
    fn test_undefined_without_price() {
        assert_eq!(inherent_attractiveness(None, Some(10.0)), None);
        assert_eq!(inherent_attractiveness(Some(0.0), Some(10.0)), None);
    }

    #[test]
    fn test_undefined_without_status_quo() {
        assert_eq!(inherent_attractiveness(Some(10000.0), None), None);
        assert_eq!(
            inherent_attractiveness(Some(10000.0), Some(0.0)),
            None,
            "a zero denominator is undefined, not infinite"
        );
    }
}
