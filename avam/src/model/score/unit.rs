use crate::model::travel_time::CityDurations;

/// the fully resolved input for one output feature: identity inherited
/// from the primary municipality, travel times resolved per mode by the
/// resolution strategy, price and tax joined downward.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringUnit {
    /// resolution-prefixed feature id, e.g. `plz_8001`
    pub feature_id: String,
    /// the raw location id, e.g. the PLZ code or BFS number
    pub point_id: String,
    pub municipality_id: String,
    pub name: String,
    pub canton: String,
    pub canton_code: String,
    pub lat: f64,
    pub lon: f64,
    pub driving: CityDurations,
    pub transit: CityDurations,
    pub chf_per_m2: Option<f64>,
    pub tax_multiplier: Option<f64>,
}
