use crate::util::fs::{self, FileError};
use crate::util::lv95;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// one fine-grained scoring location, either a PLZ centroid or a settlement
/// point. coordinates may arrive as WGS84 or as LV95 planar values depending
/// on the upstream source; membership lists every municipality the point
/// serves, primary first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointRecord {
    pub point_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_lv95: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_lv95: Option<f64>,
    #[serde(default)]
    pub municipality_ids: Vec<String>,
}

impl PointRecord {
    /// resolved WGS84 coordinate as (lat, lon), converting from LV95 when
    /// only planar coordinates are present.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => match (self.e_lv95, self.n_lv95) {
                (Some(e), Some(n)) => Some(lv95::lv95_to_wgs84(e, n)),
                _ => None,
            },
        }
    }

    /// the primary municipality for downward joins is the first entry of
    /// the membership list.
    pub fn primary_municipality(&self) -> Option<&str> {
        self.municipality_ids.first().map(|id| id.as_str())
    }
}

/// the fine-grained point catalog, in file order.
#[derive(Debug, Clone, Default)]
pub struct PointCatalog {
    records: Vec<PointRecord>,
}

impl PointCatalog {
    pub fn new(records: Vec<PointRecord>) -> PointCatalog {
        PointCatalog { records }
    }

    pub fn from_file(path: &Path) -> Result<PointCatalog, FileError> {
        let records: Vec<PointRecord> = fs::read_json(path)?;
        Ok(PointCatalog::new(records))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_coordinate_prefers_wgs84() {
        let record = PointRecord {
            point_id: String::from("8001"),
            name: String::from("Zürich"),
            lat: Some(47.37),
            lon: Some(8.54),
            e_lv95: Some(2_683_000.0),
            n_lv95: Some(1_248_000.0),
            municipality_ids: vec![String::from("0261")],
        };
        let (lat, lon) = record.coordinate().expect("coordinate should resolve");
        assert_eq!((lat, lon), (47.37, 8.54));
    }

    #[test]
    fn test_coordinate_falls_back_to_lv95() {
        let record = PointRecord {
            point_id: String::from("settlement_abc"),
            name: String::from("Hinterdorf"),
            lat: None,
            lon: None,
            e_lv95: Some(2_600_000.0),
            n_lv95: Some(1_200_000.0),
            municipality_ids: vec![String::from("0351")],
        };
        let (lat, lon) = record.coordinate().expect("coordinate should resolve");
        assert!((lat - 46.951_081_1).abs() < 1e-6);
        assert!((lon - 7.438_637_2).abs() < 1e-6);
    }

    #[test]
    fn test_coordinate_none_when_no_source() {
        let record = PointRecord {
            point_id: String::from("nowhere"),
            name: String::new(),
            lat: None,
            lon: None,
            e_lv95: None,
            n_lv95: None,
            municipality_ids: vec![],
        };
        assert!(record.coordinate().is_none());
    }
}
