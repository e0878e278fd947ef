use crate::model::travel_time::CityDurations;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// one fully scored location, the unit of the published GeoJSON. every
/// optional field serializes as an explicit null: consumers filter on the
/// distinction between "computed as zero" and "could not be computed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub id: String,
    pub point_id: String,
    pub municipality_id: String,
    pub name: String,
    pub canton: String,
    pub canton_code: String,
    pub lat: f64,
    pub lon: f64,
    /// raw driving seconds per configured city
    pub drive_times: CityDurations,
    /// raw transit seconds per configured city
    pub pt_times: CityDurations,
    pub min_drive_s: Option<u32>,
    pub min_pt_s: Option<u32>,
    /// comfort-weighted minutes saved per city, one decimal
    pub gain_per_city: BTreeMap<String, Option<f64>>,
    /// the city with the strictly greatest unrounded gain
    pub best_city: Option<String>,
    pub chf_per_m2: Option<f64>,
    pub tax_multiplier: Option<f64>,
    pub status_quo_access: Option<f64>,
    pub inherent_attractiveness_raw: Option<f64>,
    pub score_accessibility: Option<f64>,
    pub score_attractiveness: Option<f64>,
    pub autonomy_score: Option<f64>,
}
