use super::{comfort_minutes, ComfortFactors, ComfortMode};
use crate::model::city::ReferenceCity;
use crate::model::travel_time::CityDurations;
use crate::util::stats;
use itertools::Itertools;
use std::collections::BTreeMap;

/// per-city accessibility gain in comfort-weighted minutes: what an
/// autonomous vehicle would save over the best option available today,
/// where "today" is the better of manually driving and sitting in transit.
///
/// a city where either mode is missing gets null, since the comparison is
/// undefined there. a gain of zero is a result, not an absence: it marks a
/// city transit already serves as well as an AV would.
pub fn accessibility_gain_per_city(
    driving: &CityDurations,
    transit: &CityDurations,
    cities: &[ReferenceCity],
    factors: &ComfortFactors,
) -> BTreeMap<String, Option<f64>> {
    cities
        .iter()
        .map(|city| {
            let drive_s = driving.get(&city.id).copied().flatten();
            let transit_s = transit.get(&city.id).copied().flatten();
            let gain = drive_s.zip(transit_s).map(|(drive, transit)| {
                let manual = comfort_minutes(drive, ComfortMode::DrivingManual, factors);
                let transit_comfort =
                    comfort_minutes(transit, ComfortMode::PublicTransport, factors);
                let av = comfort_minutes(drive, ComfortMode::DrivingAv, factors);
                manual.min(transit_comfort) - av
            });
            (city.id.clone(), gain)
        })
        .collect()
}

/// scalar gain for a point: the mean over cities with a defined gain, null
/// when no city qualifies.
pub fn mean_accessibility_gain(gains: &BTreeMap<String, Option<f64>>) -> Option<f64> {
    let valid = gains.values().filter_map(|g| *g).collect_vec();
    stats::mean(&valid)
}
