use super::{comfort_minutes, ComfortFactors, ComfortMode};
use crate::model::city::ReferenceCity;
use crate::model::travel_time::CityDurations;
use crate::util::stats;

/// status-quo accessibility in minutes: how well a location reaches the
/// reference cities today, without any autonomous option.
///
/// per city this is the better of raw driving minutes and comfort-weighted
/// transit minutes; unlike the gain computation, a city reachable by only
/// one mode still counts, on that mode alone. the result is the mean over
/// qualifying cities, null when none qualifies.
pub fn status_quo_access(
    driving: &CityDurations,
    transit: &CityDurations,
    cities: &[ReferenceCity],
    factors: &ComfortFactors,
) -> Option<f64> {
    let mut best = Vec::with_capacity(cities.len());
    for city in cities.iter() {
        let drive_min = driving
            .get(&city.id)
            .copied()
            .flatten()
            .map(|s| comfort_minutes(s, ComfortMode::DrivingManual, factors));
        let transit_min = transit
            .get(&city.id)
            .copied()
            .flatten()
            .map(|s| comfort_minutes(s, ComfortMode::PublicTransport, factors));
        match (drive_min, transit_min) {
            (Some(drive), Some(transit)) => best.push(drive.min(transit)),
            (Some(drive), None) => best.push(drive),
            (None, Some(transit)) => best.push(transit),
            (None, None) => {}
        }
    }
    stats::mean(&best)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn durations(value: serde_json::Value) -> CityDurations {
        serde_json::from_value(value).expect("durations fixture should deserialize")
    }

    fn cities() -> Vec<ReferenceCity> {
        vec![
            ReferenceCity::new("zurich", "Zürich HB", 47.3769, 8.5417),
            ReferenceCity::new("bern", "Bern HB", 46.9490, 7.4395),
        ]
    }

    #[test]
    fn test_driving_is_not_discounted() {
        // drive 600s = 10.0 raw minutes; transit 900s = 10.5 comfort minutes.
        // best today is the raw drive
        let result = status_quo_access(
            &durations(json!({"zurich": 600})),
            &durations(json!({"zurich": 900})),
            &cities()[..1],
            &ComfortFactors::default(),
        );
        assert_eq!(result, Some(10.0));
    }

    #[test]
    fn test_single_mode_city_still_counts() {
        // zurich by transit only: 1800s × 0.7 = 21.0 comfort minutes
        let result = status_quo_access(
            &durations(json!({"zurich": null})),
            &durations(json!({"zurich": 1800})),
            &cities()[..1],
            &ComfortFactors::default(),
        );
        assert_eq!(result, Some(21.0));
    }

    #[test]
    fn test_mean_over_qualifying_cities() {
        // zurich best = 10.0 (drive), bern best = 14.0 (transit comfort)
        let result = status_quo_access(
            &durations(json!({"zurich": 600})),
            &durations(json!({"bern": 1200})),
            &cities(),
            &ComfortFactors::default(),
        );
        assert_eq!(result, Some(12.0));
    }

    #[test]
    fn test_null_when_nothing_is_reachable() {
        let result = status_quo_access(
            &durations(json!({"zurich": null})),
            &CityDurations::new(),
            &cities(),
            &ComfortFactors::default(),
        );
        assert_eq!(result, None);
    }
}
