use super::{CityDurations, TravelMode, TravelTimeMatrix};
use crate::model::city::ReferenceCity;
use crate::model::point::PointCatalog;
use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// how member point durations fold into one municipality duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMethod {
    /// the best-connected member point wins. this is where commuters in the
    /// municipality would actually choose to live.
    #[default]
    Min,
    /// arithmetic mean over member points, rounded to whole seconds.
    Avg,
}

impl Display for AggregationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMethod::Min => write!(f, "min"),
            AggregationMethod::Avg => write!(f, "avg"),
        }
    }
}

/// folds a point-keyed matrix upward into a municipality-keyed matrix.
///
/// a point contributes to every municipality in its membership list, not
/// just its primary one. per municipality and city, null durations are
/// excluded before folding; a municipality whose members are all null for a
/// city stays null. modes absent from the input stay absent in the output.
pub fn aggregate_to_municipalities(
    points: &PointCatalog,
    matrix: &TravelTimeMatrix,
    cities: &[ReferenceCity],
    method: AggregationMethod,
) -> TravelTimeMatrix {
    let mut members: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for record in points.iter() {
        for muni_id in record.municipality_ids.iter() {
            members
                .entry(muni_id.as_str())
                .or_default()
                .push(record.point_id.as_str());
        }
    }

    let mut result = TravelTimeMatrix::default();
    for mode in TravelMode::ALL {
        let source = matrix.mode(mode);
        if source.is_empty() {
            continue;
        }
        let target = result.mode_mut(mode);
        for (muni_id, point_ids) in members.iter() {
            let mut durations = CityDurations::new();
            for city in cities.iter() {
                let values = point_ids
                    .iter()
                    .filter_map(|point_id| {
                        source
                            .get(*point_id)
                            .and_then(|d| d.get(city.id.as_str()))
                            .copied()
                            .flatten()
                    })
                    .collect_vec();
                durations.insert(city.id.clone(), fold(&values, method));
            }
            target.insert((*muni_id).to_string(), durations);
        }
    }
    result
}

fn fold(values: &[u32], method: AggregationMethod) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    match method {
        AggregationMethod::Min => values.iter().min().copied(),
        AggregationMethod::Avg => {
            let sum = values.iter().map(|v| *v as f64).sum::<f64>();
            Some((sum / values.len() as f64).round() as u32)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::point::PointRecord;
    use serde_json::json;

    fn fixture() -> (PointCatalog, TravelTimeMatrix, Vec<ReferenceCity>) {
        let points = PointCatalog::new(vec![
            PointRecord {
                point_id: String::from("8001"),
                name: String::from("Zürich"),
                lat: Some(47.37),
                lon: Some(8.54),
                e_lv95: None,
                n_lv95: None,
                municipality_ids: vec![String::from("0261")],
            },
            PointRecord {
                point_id: String::from("8037"),
                name: String::from("Zürich"),
                lat: Some(47.39),
                lon: Some(8.52),
                e_lv95: None,
                n_lv95: None,
                municipality_ids: vec![String::from("0261"), String::from("0066")],
            },
            PointRecord {
                point_id: String::from("8105"),
                name: String::from("Regensdorf"),
                lat: Some(47.43),
                lon: Some(8.46),
                e_lv95: None,
                n_lv95: None,
                municipality_ids: vec![String::from("0096")],
            },
        ]);
        let matrix: TravelTimeMatrix = serde_json::from_value(json!({
            "driving": {
                "8001": {"bern": 450},
                "8037": {"bern": 300},
                "8105": {"bern": null}
            }
        }))
        .expect("fixture matrix should deserialize");
        let cities = vec![ReferenceCity::new("bern", "Bern HB", 46.9490, 7.4395)];
        (points, matrix, cities)
    }

    #[test]
    fn test_min_takes_best_member_point() {
        let (points, matrix, cities) = fixture();
        let result =
            aggregate_to_municipalities(&points, &matrix, &cities, AggregationMethod::Min);
        let durations = result
            .get(TravelMode::Driving, "0261")
            .expect("municipality 0261 should be present");
        assert_eq!(
            durations.get("bern"),
            Some(&Some(300)),
            "minimum over [450, 300] should win"
        );
    }

    #[test]
    fn test_all_null_members_stay_null() {
        let (points, matrix, cities) = fixture();
        let result =
            aggregate_to_municipalities(&points, &matrix, &cities, AggregationMethod::Min);
        let durations = result
            .get(TravelMode::Driving, "0096")
            .expect("municipality 0096 should be present");
        assert_eq!(durations.get("bern"), Some(&None));
    }

    #[test]
    fn test_secondary_membership_contributes() {
        let (points, matrix, cities) = fixture();
        let result =
            aggregate_to_municipalities(&points, &matrix, &cities, AggregationMethod::Min);
        let durations = result
            .get(TravelMode::Driving, "0066")
            .expect("municipality 0066 should be present via secondary membership");
        assert_eq!(durations.get("bern"), Some(&Some(300)));
    }

    #[test]
    fn test_avg_rounds_to_whole_seconds() {
        let (points, matrix, cities) = fixture();
        let result =
            aggregate_to_municipalities(&points, &matrix, &cities, AggregationMethod::Avg);
        let durations = result
            .get(TravelMode::Driving, "0261")
            .expect("municipality 0261 should be present");
        assert_eq!(durations.get("bern"), Some(&Some(375)));
    }

    #[test]
    fn test_absent_mode_stays_absent() {
        let (points, matrix, cities) = fixture();
        let result =
            aggregate_to_municipalities(&points, &matrix, &cities, AggregationMethod::Min);
        assert!(
            result.public_transport.is_empty(),
            "no transit input should produce no transit output"
        );
    }
}
