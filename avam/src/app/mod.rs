pub mod aggregate;
pub mod app_error;
pub mod convert_prices;
pub mod demo;
pub mod estimate_pt;
pub mod merge_prices;
pub mod score;
pub mod taxes;

/// canonical artifact names inside a pipeline data directory. stages find
/// each other's outputs through these, so a directory is the only piece of
/// state the pipeline shares.
pub mod filenames {
    pub const MUNICIPALITIES: &str = "municipalities.json";
    pub const PLZ_POINTS: &str = "plz_points.json";
    pub const SETTLEMENT_POINTS: &str = "settlement_points.json";
    pub const TRAVEL_TIMES: &str = "travel_times.json";
    pub const PLZ_TRAVEL_TIMES: &str = "plz_travel_times.json";
    pub const SETTLEMENT_TRAVEL_TIMES: &str = "settlement_travel_times.json";
    pub const PRICES: &str = "prices.json";
    pub const TAXES: &str = "taxes.json";
    pub const SCORED_GEOJSON: &str = "municipalities_scored.geojson";
}
