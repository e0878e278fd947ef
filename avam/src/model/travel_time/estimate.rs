use super::CityDurations;
use crate::model::city::ReferenceCity;
use geo::{Distance, Haversine, Point};
use std::collections::BTreeMap;
use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};

/// a location the transit estimator produces durations for.
#[derive(Debug, Clone)]
pub struct EstimateSite {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// estimates public transport durations from driving durations with a
/// Swiss-calibrated model, for locations where no transit source is
/// available.
///
/// the transit-to-drive ratio grows with crow-flight distance to each city:
/// S-Bahn territory under 20 km is nearly competitive with driving, regional
/// and intercity ranges degrade gradually, and past 220 km the ratio is
/// capped. locations inside the Mittelland corridor, approximated as having
/// several reference cities within 80 km, get a discount for their denser
/// connections.
///
/// null driving durations stay null; a site absent from the driving matrix
/// produces an all-null entry.
pub fn estimate_public_transport(
    sites: &[EstimateSite],
    driving: &BTreeMap<String, CityDurations>,
    cities: &[ReferenceCity],
) -> BTreeMap<String, CityDurations> {
    let empty = CityDurations::new();
    sites
        .iter()
        .map(|site| {
            let origin = Point::new(site.lon, site.lat);
            let drive = driving.get(&site.id).unwrap_or(&empty);
            let nearby = cities
                .iter()
                .filter(|city| distance_km(origin, Point::new(city.lon, city.lat)) < 80.0)
                .count();
            let mut durations = CityDurations::new();
            for city in cities.iter() {
                let estimate = drive.get(&city.id).copied().flatten().map(|drive_s| {
                    let dist_km = distance_km(origin, Point::new(city.lon, city.lat));
                    let ratio = base_ratio(dist_km) * corridor_factor(nearby);
                    (drive_s as f64 * ratio).round() as u32
                });
                durations.insert(city.id.clone(), estimate);
            }
            (site.id.clone(), durations)
        })
        .collect()
}

fn distance_km(a: Point<f64>, b: Point<f64>) -> f64 {
    Length::new::<meter>(Haversine.distance(a, b)).get::<kilometer>()
}

fn base_ratio(dist_km: f64) -> f64 {
    if dist_km < 20.0 {
        1.1
    } else if dist_km < 60.0 {
        1.2 + (dist_km - 20.0) / 40.0 * 0.3
    } else if dist_km < 120.0 {
        1.5 + (dist_km - 60.0) / 60.0 * 0.3
    } else {
        1.8 + ((dist_km - 120.0) / 100.0 * 0.4).min(0.4)
    }
}

fn corridor_factor(nearby_cities: usize) -> f64 {
    if nearby_cities >= 3 {
        0.92
    } else if nearby_cities >= 2 {
        0.96
    } else {
        1.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ratio_brackets() {
        assert_eq!(base_ratio(10.0), 1.1);
        assert_eq!(base_ratio(20.0), 1.2);
        assert!((base_ratio(40.0) - 1.35).abs() < 1e-12);
        assert_eq!(base_ratio(60.0), 1.5);
        assert!((base_ratio(90.0) - 1.65).abs() < 1e-12);
        assert_eq!(base_ratio(120.0), 1.8);
        assert!((base_ratio(220.0) - 2.2).abs() < 1e-12);
        assert!(
            (base_ratio(500.0) - 2.2).abs() < 1e-12,
            "ratio should cap at 2.2 for very long distances"
        );
    }

    #[test]
    fn test_corridor_factor() {
        assert_eq!(corridor_factor(0), 1.0);
        assert_eq!(corridor_factor(1), 1.0);
        assert_eq!(corridor_factor(2), 0.96);
        assert_eq!(corridor_factor(3), 0.92);
        assert_eq!(corridor_factor(7), 0.92);
    }

    #[test]
    fn test_estimate_at_city_doorstep() {
        // site colocated with the only city: ratio 1.1, no corridor discount
        let sites = vec![EstimateSite {
            id: String::from("0261"),
            lat: 47.3769,
            lon: 8.5417,
        }];
        let cities = vec![ReferenceCity::new("zurich", "Zürich HB", 47.3769, 8.5417)];
        let driving: BTreeMap<String, CityDurations> =
            serde_json::from_value(json!({"0261": {"zurich": 1000}}))
                .expect("fixture should deserialize");
        let result = estimate_public_transport(&sites, &driving, &cities);
        let durations = result.get("0261").expect("site should be present");
        assert_eq!(durations.get("zurich"), Some(&Some(1100)));
    }

    #[test]
    fn test_null_driving_stays_null() {
        let sites = vec![EstimateSite {
            id: String::from("0261"),
            lat: 47.3769,
            lon: 8.5417,
        }];
        let cities = vec![ReferenceCity::new("zurich", "Zürich HB", 47.3769, 8.5417)];
        let driving: BTreeMap<String, CityDurations> =
            serde_json::from_value(json!({"0261": {"zurich": null}}))
                .expect("fixture should deserialize");
        let result = estimate_public_transport(&sites, &driving, &cities);
        let durations = result.get("0261").expect("site should be present");
        assert_eq!(durations.get("zurich"), Some(&None));
    }

    #[test]
    fn test_site_missing_from_driving_matrix_is_all_null() {
        let sites = vec![EstimateSite {
            id: String::from("9999"),
            lat: 46.5,
            lon: 9.0,
        }];
        let cities = vec![ReferenceCity::new("zurich", "Zürich HB", 47.3769, 8.5417)];
        let driving = BTreeMap::new();
        let result = estimate_public_transport(&sites, &driving, &cities);
        let durations = result.get("9999").expect("site should be present");
        assert_eq!(durations.get("zurich"), Some(&None));
    }
}
